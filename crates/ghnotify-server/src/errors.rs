//! Webhook errors.

use actix_http::StatusCode;
use actix_web::ResponseError;
use ghnotify_chat_interface::SenderError;
use ghnotify_core::FormatError;
use thiserror::Error;

/// Request rejected before any processing.
#[allow(missing_docs)]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("Missing configuration: AccessToken")]
    MissingAccessToken,

    #[error("Missing HTTP Header: X-Hub-Signature")]
    MissingSignature,

    #[error("Unknown Hash Algorithm")]
    UnsupportedHashAlgorithm,

    #[error("Invalid X-Hub-Signature")]
    InvalidSignature,

    #[error("Missing parameter: channel")]
    MissingChannel,
}

impl ResponseError for RequestError {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }
}

/// Webhook error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Request { source: RequestError },

    #[error("Invalid JSON payload: {source}")]
    InvalidJson { source: serde_json::Error },

    #[error("Could not format event: {source}")]
    FormatError { source: FormatError },

    #[error("Could not send message: {source}")]
    SenderError { source: SenderError },

    #[error("Could not build metrics handler,\n  caused by: {source}")]
    MetricsError {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("I/O error,\n  caused by: {source}")]
    IoError { source: std::io::Error },
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Request { source } => source.status_code(),
            ServerError::InvalidJson { .. } | ServerError::FormatError { .. } => {
                StatusCode::BAD_REQUEST
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<RequestError> for ServerError {
    fn from(e: RequestError) -> Self {
        Self::Request { source: e }
    }
}

impl From<FormatError> for ServerError {
    fn from(e: FormatError) -> Self {
        Self::FormatError { source: e }
    }
}

impl From<SenderError> for ServerError {
    fn from(e: SenderError) -> Self {
        Self::SenderError { source: e }
    }
}

/// Result alias for `ServerError`.
pub type Result<T, E = ServerError> = core::result::Result<T, E>;
