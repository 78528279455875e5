//! Event errors.

use thiserror::Error;

use crate::EventType;

/// Event error.
#[allow(missing_docs)]
#[derive(Debug, Error)]
pub enum EventError {
    #[error("Invalid payload for event type {event_type},\n  caused by: {source}")]
    InvalidPayload {
        event_type: EventType,
        source: serde_json::Error,
    },
}

/// Result alias for `EventError`.
pub type Result<T, E = EventError> = core::result::Result<T, E>;
