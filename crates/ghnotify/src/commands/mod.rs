//! Subcommands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use ghnotify_chat_http::HttpMessageSender;
use ghnotify_chat_interface::MessageSender;
use ghnotify_chat_null::NullMessageSender;
use ghnotify_config::{ChatDriver, Config};
use tokio::sync::RwLock;
use tracing::info;

use self::{render::RenderCommand, server::ServerCommand};
use crate::Result;

mod render;
mod server;

/// Everything a command may need: configuration, the chat sender and an output.
pub(crate) struct CommandContext {
    pub config: Config,
    pub sender: Box<dyn MessageSender>,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    /// Build a context writing to stdout, with the configured chat driver.
    pub fn from_config(config: Config) -> Result<Self> {
        let sender = build_message_sender(&config)?;

        Ok(Self {
            config,
            sender,
            writer: Arc::new(RwLock::new(std::io::stdout())),
        })
    }
}

fn build_message_sender(config: &Config) -> Result<Box<dyn MessageSender>> {
    let driver = config.chat.driver()?;
    info!(driver = ?driver, message = "Using chat driver");

    let sender: Box<dyn MessageSender> = match driver {
        ChatDriver::Http => Box::new(HttpMessageSender::new(config)?),
        ChatDriver::Null => Box::new(NullMessageSender::new()),
    };

    Ok(sender)
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Server(ServerCommand),
    Render(RenderCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Server(sub) => sub.execute(ctx).await,
            Self::Render(sub) => sub.execute(ctx).await,
        }
    }
}
