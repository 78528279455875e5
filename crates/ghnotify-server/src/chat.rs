//! Message sender wrappers.

use async_trait::async_trait;
use ghnotify_chat_interface::{MessageSender, Result};

use crate::metrics::CHAT_API_CALLS;

/// Message sender with metrics.
pub struct MetricsMessageSender {
    inner: Box<dyn MessageSender>,
}

impl MetricsMessageSender {
    /// Wrap a sender.
    pub fn new(inner: Box<dyn MessageSender>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl MessageSender for MetricsMessageSender {
    async fn send(&self, channel_id: &str, message: &str) -> Result<()> {
        CHAT_API_CALLS.inc();
        self.inner.send(channel_id, message).await
    }
}
