//! ghnotify command line.

use anyhow::Result;
use args::{Args, CommandExecutor};
use clap::Parser;
use ghnotify_config::Config;
use ghnotify_logging::configure_logging;
use shadow_rs::shadow;
use tracing::info;

pub(crate) mod args;
mod commands;
mod config_validator;
#[cfg(test)]
mod testutils;

shadow!(build);

/// Version line, as `ghnotify 0.1.0 (abc1234 on main, built 2024-01-01T00:00:00+00:00)`.
pub fn get_version_data() -> String {
    format!(
        "{} {} ({} on {}, built {})",
        build::PROJECT_NAME,
        build::PKG_VERSION,
        non_empty_or(build::SHORT_COMMIT, "unknown commit"),
        non_empty_or(build::BRANCH, "unknown branch"),
        build::BUILD_TIME_3339
    )
}

fn non_empty_or<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

/// Log what the bot will do with incoming webhooks. Secrets are never logged.
fn log_startup_summary(config: &Config) {
    info!(
        chat_driver = config.chat.driver.as_str(),
        chat_api = config.chat.api.root_url.as_str(),
        signature_check = config.webhook_secret().is_some(),
        sentry = !config.sentry.url.is_empty(),
        message = "Startup configuration",
    );
}

/// Load configuration, set up logging, then run the requested command.
pub fn initialize_command_line() -> Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env(env!("CARGO_PKG_VERSION").to_string());
    configure_logging(&config)?;

    info!("{}", get_version_data());
    config_validator::validate_configuration(&config)?;
    log_startup_summary(&config);

    CommandExecutor::parse_args(config, Args::parse())
}
