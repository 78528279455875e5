//! Chat interface

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod interface;

pub use errors::{Result, SenderError};
pub use interface::MessageSender;
#[cfg(any(test, feature = "testkit"))]
pub use interface::MockMessageSender;
