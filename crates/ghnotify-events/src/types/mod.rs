//! GitHub payload types.
//!
//! Every field is optional: payloads sent by GitHub vary between event versions,
//! and missing data is reported by the formatters instead of the parser.

/// Shared types.
pub mod common;
/// Fallback shape for unsupported events.
pub mod generic;
/// Issues and issue comments.
pub mod issues;
/// Ping.
pub mod ping;
/// Pull requests and review comments.
pub mod pulls;
/// Pushes.
pub mod push;
/// Branch and tag creation / deletion.
pub mod refs;
