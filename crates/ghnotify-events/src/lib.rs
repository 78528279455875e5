//! GitHub webhook events.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod event;
mod event_type;
pub mod types;

pub use errors::{EventError, Result};
pub use event::GhEvent;
pub use event_type::EventType;
