//! Sender errors.

use thiserror::Error;

/// Message sender error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum SenderError {
    #[error("Chat API answered with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error(transparent)]
    ImplementationError {
        source: Box<dyn std::error::Error + Send + Sync + 'static>,
    },
}

/// Result alias for `SenderError`.
pub type Result<T, E = SenderError> = core::result::Result<T, E>;
