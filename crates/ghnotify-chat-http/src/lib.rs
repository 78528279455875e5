//! HTTP driver for the chat API.

#![warn(clippy::all)]

mod errors;

use std::time::Duration;

use async_trait::async_trait;
use ghnotify_chat_interface::{MessageSender, Result};
use ghnotify_config::Config;
use http::{header, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Url};
use serde::Serialize;

pub use errors::HttpSenderError;

const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";

/// Message sender posting to the chat bot API.
#[derive(Clone)]
pub struct HttpMessageSender {
    client: Client,
    root_url: String,
    access_token: String,
}

impl HttpMessageSender {
    /// Build a sender from configuration.
    pub fn new(config: &Config) -> Result<Self, HttpSenderError> {
        Ok(Self {
            client: build_client(config)?,
            root_url: config.chat.api.root_url.clone(),
            access_token: config.chat.access_token.clone(),
        })
    }

    fn build_url(&self, channel_id: &str) -> Result<Url, HttpSenderError> {
        let invalid_url = |reason: String| HttpSenderError::InvalidRootUrl {
            url: self.root_url.clone(),
            reason,
        };

        let mut url = Url::parse(&self.root_url).map_err(|e| invalid_url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|()| invalid_url("cannot be a base".into()))?
            .pop_if_empty()
            .extend(["v1", "bot", "channels", channel_id, "messages"]);

        Ok(url)
    }

    async fn post_message(&self, channel_id: &str, message: &str) -> Result<(), HttpSenderError> {
        #[derive(Serialize)]
        struct Request<'a> {
            message: &'a str,
        }

        if self.access_token.is_empty() {
            return Err(HttpSenderError::MissingAccessToken);
        }

        let token = HeaderValue::from_str(&self.access_token)
            .map_err(|_| HttpSenderError::InvalidAccessToken)?;

        let response = self
            .client
            .post(self.build_url(channel_id)?)
            .header(ACCESS_TOKEN_HEADER, token)
            .json(&Request { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status_code = %status,
                message = "Could not post message to channel",
            );

            return Err(HttpSenderError::UnexpectedStatus {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl MessageSender for HttpMessageSender {
    #[tracing::instrument(skip(self, message))]
    async fn send(&self, channel_id: &str, message: &str) -> Result<()> {
        Ok(self.post_message(channel_id, message).await?)
    }
}

fn build_client(config: &Config) -> Result<Client, HttpSenderError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    Ok(ClientBuilder::new()
        .connect_timeout(Duration::from_millis(config.chat.api.connect_timeout))
        .user_agent(format!("ghnotify/{}", config.version))
        .default_headers(headers)
        .build()?)
}

#[cfg(test)]
mod tests {
    use ghnotify_chat_interface::SenderError;
    use pretty_assertions::assert_eq;

    use super::*;

    fn sender(root_url: &str, access_token: &str) -> HttpMessageSender {
        let mut config = Config::from_env_no_version();
        config.chat.api.root_url = root_url.into();
        config.chat.access_token = access_token.into();
        HttpMessageSender::new(&config).unwrap()
    }

    #[test]
    fn build_url() {
        let sender = sender("https://kokoro.io/api", "token");
        assert_eq!(
            sender.build_url("ABCDEF").unwrap().as_str(),
            "https://kokoro.io/api/v1/bot/channels/ABCDEF/messages"
        );

        // Trailing slash and path-breaking channel ids.
        let sender = self::sender("https://chat.example.com/api/", "token");
        assert_eq!(
            sender.build_url("a/b?c").unwrap().as_str(),
            "https://chat.example.com/api/v1/bot/channels/a%2Fb%3Fc/messages"
        );
    }

    #[test]
    fn build_url_invalid_root() {
        let sender = sender("not a url", "token");
        assert!(matches!(
            sender.build_url("ABCDEF"),
            Err(HttpSenderError::InvalidRootUrl { .. })
        ));
    }

    #[tokio::test]
    async fn send_without_token() {
        let sender = sender("https://kokoro.io/api", "");
        let err = sender.send("ABCDEF", "Hello").await.unwrap_err();

        assert!(matches!(err, SenderError::ImplementationError { .. }));
        assert_eq!(err.to_string(), "Missing configuration: AccessToken");
    }

    #[test]
    fn unexpected_status_is_kept() {
        let err: SenderError = HttpSenderError::UnexpectedStatus {
            status: 401,
            body: "Unauthorized".into(),
        }
        .into();

        assert!(matches!(err, SenderError::UnexpectedStatus { status: 401, .. }));
    }
}
