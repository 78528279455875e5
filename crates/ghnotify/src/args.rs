use clap::Parser;
use ghnotify_config::Config;
use ghnotify_sentry::with_sentry_configuration;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// GitHub webhook to chat notifier
#[derive(Parser)]
#[command(version, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    /// Run a command inside an actix system, with Sentry enabled when configured.
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;

        actix_rt::System::with_tokio_rt(move || runtime).block_on(async move {
            let ctx = CommandContext::from_config(config.clone())?;

            with_sentry_configuration(&config, || Self::parse_args_async(args, ctx)).await
        })
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
