//! Null driver for the chat API.

#![warn(missing_docs)]
#![warn(clippy::all)]

use async_trait::async_trait;
use ghnotify_chat_interface::{MessageSender, Result};

/// Null message sender, only logging messages.
#[derive(Clone, Default)]
pub struct NullMessageSender {
    _private: (),
}

impl NullMessageSender {
    /// Build a null message sender.
    pub fn new() -> Self {
        Self { _private: () }
    }
}

#[async_trait]
impl MessageSender for NullMessageSender {
    #[tracing::instrument(skip(self, message))]
    async fn send(&self, channel_id: &str, message: &str) -> Result<()> {
        tracing::info!(content = message, "Message not sent (null driver)");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_always_succeeds() {
        let sender = NullMessageSender::new();
        sender.send("channel", "__Hello__").await.unwrap();
    }
}
