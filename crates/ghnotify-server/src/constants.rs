//! Webhook constants.

/// GitHub event header.
pub const GITHUB_EVENT_HEADER: &str = "X-GitHub-Event";
/// GitHub signature header.
pub const GITHUB_SIGNATURE_HEADER: &str = "X-Hub-Signature";
/// Query parameter holding the destination channel.
pub const CHANNEL_PARAMETER: &str = "channel";
/// Response body for events acknowledged without message.
pub const ACKNOWLEDGED_BODY: &str = "OK";
