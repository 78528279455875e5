use std::path::PathBuf;

use async_trait::async_trait;
use clap::Parser;
use ghnotify_core::format_payload;
use ghnotify_events::EventType;

use super::{Command, CommandContext};
use crate::Result;

/// Render a webhook payload as it would be sent to the chat
#[derive(Parser)]
pub(crate) struct RenderCommand {
    /// Event name, as sent in the X-GitHub-Event header
    #[arg(long)]
    event: String,
    /// JSON payload file
    payload_file: PathBuf,
}

#[async_trait]
impl Command for RenderCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let content = tokio::fs::read_to_string(self.payload_file).await?;
        let payload: serde_json::Value = serde_json::from_str(&content)?;

        let event_type = EventType::from_header(Some(&self.event));
        let message = format_payload(event_type, Some(&self.event), &payload)?;

        writeln!(
            ctx.writer.write().await,
            "{}",
            message.as_deref().unwrap_or("(no message)")
        )?;

        Ok(())
    }
}
