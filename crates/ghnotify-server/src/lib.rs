//! Server module.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authenticator;
mod chat;
pub mod constants;
pub mod errors;
mod health;
mod metrics;
pub mod server;
mod webhook;

pub use errors::{RequestError, Result, ServerError};
