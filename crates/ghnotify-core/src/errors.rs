//! Formatting errors.

use ghnotify_events::EventError;
use thiserror::Error;

/// Formatting error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Wraps [`ghnotify_events::EventError`].
    #[error("{source}")]
    InvalidPayload { source: EventError },
}

impl From<EventError> for FormatError {
    fn from(e: EventError) -> Self {
        Self::InvalidPayload { source: e }
    }
}

/// Result alias for `FormatError`.
pub type Result<T, E = FormatError> = core::result::Result<T, E>;

/// Turns an absent payload value into a `MissingField` error.
pub(crate) trait Required<T> {
    fn required(self, field: &str) -> Result<T>;
}

impl<T> Required<T> for Option<T> {
    fn required(self, field: &str) -> Result<T> {
        self.ok_or_else(|| FormatError::MissingField {
            field: field.to_string(),
        })
    }
}
