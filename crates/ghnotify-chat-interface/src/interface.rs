//! Sender interface.

use async_trait::async_trait;

use crate::Result;

/// Chat message sender.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Post a message to a channel.
    async fn send(&self, channel_id: &str, message: &str) -> Result<()>;
}
