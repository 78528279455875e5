//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ChatDriver, DriverError};

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Message sender driver name.
    pub driver: String,
    /// Chat bot access token.
    pub access_token: String,
    /// Chat API options.
    pub api: ChatApiConfig,
}

impl ChatConfig {
    /// Parse the configured driver.
    pub fn driver(&self) -> Result<ChatDriver, DriverError> {
        ChatDriver::from_str(&self.driver)
    }
}

#[derive(Debug, Clone)]
pub struct ChatApiConfig {
    /// Chat API root URL.
    pub root_url: String,
    /// Chat API connect timeout (in milliseconds).
    pub connect_timeout: u64,
}

#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry URL.
    pub url: String,
    /// Traces sample rate (between 0 and 1) for Sentry
    pub traces_sample_rate: f32,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind IP.
    pub bind_ip: String,
    /// Server bind port.
    pub bind_port: u16,
    /// Server workers count.
    pub workers_count: Option<u16>,
    /// Server webhook secret.
    pub webhook_secret: String,
    /// Maximum webhook payload size (in bytes).
    pub max_payload_size: usize,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Chat options.
    pub chat: ChatConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Sentry options.
    pub sentry: SentryConfig,
    /// Server options.
    pub server: ServerConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Config {
        Config {
            chat: ChatConfig {
                driver: env_to_str("BOT_CHAT_DRIVER", "http"),
                access_token: env_to_str("BOT_ACCESS_TOKEN", ""),
                api: ChatApiConfig {
                    root_url: env_to_str("BOT_CHAT_API_ROOT_URL", "https://kokoro.io/api"),
                    connect_timeout: env_to_u64("BOT_CHAT_API_CONNECT_TIMEOUT", 5000),
                },
            },
            logging: LoggingConfig {
                use_bunyan: env_to_bool("BOT_LOGGING_USE_BUNYAN", false),
            },
            sentry: SentryConfig {
                url: env_to_str("BOT_SENTRY_URL", ""),
                traces_sample_rate: env_to_f32("BOT_SENTRY_TRACES_SAMPLE_RATE", 0.0),
            },
            server: ServerConfig {
                bind_ip: env_to_str("BOT_SERVER_BIND_IP", "127.0.0.1"),
                bind_port: env_to_u16("BOT_SERVER_BIND_PORT", 8008),
                workers_count: env_to_optional_u16("BOT_SERVER_WORKERS_COUNT", None),
                webhook_secret: env_to_str("BOT_WEBHOOK_SECRET", ""),
                max_payload_size: env_to_usize("BOT_SERVER_MAX_PAYLOAD_SIZE", 5 * 1024 * 1024),
            },
            version,
        }
    }

    pub fn from_env_no_version() -> Self {
        Self::from_env("0.0.0".into())
    }

    /// Access token used by the message sender, if configured.
    pub fn access_token(&self) -> Option<&str> {
        non_empty(&self.chat.access_token)
    }

    /// Webhook signing secret, if configured.
    ///
    /// Signature verification is only enabled when a secret is present.
    pub fn webhook_secret(&self) -> Option<&str> {
        non_empty(&self.server.webhook_secret)
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn env_to_u16(name: &str, default: u16) -> u16 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_optional_u16(name: &str, default: Option<u16>) -> Option<u16> {
    env::var(name)
        .map(|e| e.parse::<u16>().map(Some).unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_usize(name: &str, default: usize) -> usize {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_f32(name: &str, default: f32) -> f32 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name)
        .unwrap_or_else(|_e| default.to_string())
        .replace("\\n", "\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_values_are_absent() {
        let mut config = Config::from_env_no_version();
        config.chat.access_token = String::new();
        config.server.webhook_secret = String::new();

        assert_eq!(config.access_token(), None);
        assert_eq!(config.webhook_secret(), None);

        config.chat.access_token = "token".into();
        config.server.webhook_secret = "secret".into();

        assert_eq!(config.access_token(), Some("token"));
        assert_eq!(config.webhook_secret(), Some("secret"));
    }
}
