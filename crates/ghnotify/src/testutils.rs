use std::{io::Write, path::PathBuf, sync::Arc};

use clap::Parser;
use ghnotify_chat_interface::MockMessageSender;
use ghnotify_config::Config;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub sender: MockMessageSender,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version(),
            sender: MockMessageSender::new(),
        }
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            sender: Box::new(self.sender),
            writer,
        }
    }
}

/// Write a payload in a per-process temporary directory.
pub(crate) fn write_payload(name: &str, content: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ghnotify-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    {
        let command_args = {
            let mut tmp_args = vec!["bot"];
            tmp_args.extend(command_args);
            tmp_args
        };

        let args = Args::try_parse_from(command_args);
        match args {
            Ok(args) => CommandExecutor::parse_args_async(args, ctx.into_context(buf.clone()))
                .await
                .unwrap(),
            Err(e) => {
                eprintln!("{}", e);
                panic!("Parse error.")
            }
        }
    }

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}
