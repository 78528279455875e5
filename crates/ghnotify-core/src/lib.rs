//! Event formatting.
//!
//! Turns parsed webhook events into Markdown chat messages.

#![warn(clippy::all)]

pub mod errors;
pub mod formatters;
pub mod markdown;

pub use errors::{FormatError, Result};
pub use formatters::{format_event, format_payload};
