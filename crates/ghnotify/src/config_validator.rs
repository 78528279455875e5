//! Validation utilities.

use std::fmt::Write;

use ghnotify_config::{ChatDriver, Config};
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push('\n');
        write!(error, "  - Missing env. var.: {}", name).unwrap();
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        error.push('\n');
        write!(error, "  - Invalid env. var.: {} ({})", name, value).unwrap();
    }

    let mut error = String::new();

    // Check server configuration
    if config.server.bind_ip.is_empty() {
        _missing(&mut error, "BOT_SERVER_BIND_IP");
    }
    if config.server.bind_port == 0 {
        _missing(&mut error, "BOT_SERVER_BIND_PORT");
    }

    // Check chat configuration
    match config.chat.driver() {
        Ok(ChatDriver::Http) if config.chat.api.root_url.is_empty() => {
            _missing(&mut error, "BOT_CHAT_API_ROOT_URL");
        }
        Err(_) => _invalid(&mut error, "BOT_CHAT_DRIVER", &config.chat.driver),
        _ => (),
    }

    // Webhooks are rejected at runtime without a token.
    if config.access_token().is_none() {
        warn!("BOT_ACCESS_TOKEN is not set, every webhook will be rejected");
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub fn validate_configuration(config: &Config) -> Result<(), ValidationError> {
    validate_env_vars(config)
}
