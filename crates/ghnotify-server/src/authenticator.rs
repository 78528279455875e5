//! Request authentication.

use std::collections::HashMap;

use actix_web::{http::header::HeaderMap, web, HttpRequest};
use ghnotify_config::Config;
use ghnotify_crypto::{CryptoError, Signature};
use ghnotify_events::EventType;
use tracing::warn;

use crate::{
    constants::{CHANNEL_PARAMETER, GITHUB_EVENT_HEADER, GITHUB_SIGNATURE_HEADER},
    RequestError,
};

/// Request which passed every check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedRequest {
    /// Destination channel.
    pub channel: String,
    /// Declared event type.
    pub event_type: EventType,
    /// Raw event header value.
    pub event_name: Option<String>,
}

/// Validate an incoming webhook request.
///
/// Checks run in order: access token, signature (only when a secret is configured),
/// then channel. The body must be the exact bytes received.
pub fn authenticate(
    config: &Config,
    req: &HttpRequest,
    body: &[u8],
) -> Result<AuthenticatedRequest, RequestError> {
    if config.access_token().is_none() {
        warn!("Access token is not configured, rejecting webhook");
        return Err(RequestError::MissingAccessToken);
    }

    if let Some(secret) = config.webhook_secret() {
        verify_signature(req.headers(), body, secret)?;
    }

    let channel = extract_channel(req.query_string()).ok_or(RequestError::MissingChannel)?;
    let event_name = req
        .headers()
        .get(GITHUB_EVENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    Ok(AuthenticatedRequest {
        channel,
        event_type: EventType::from_header(event_name.as_deref()),
        event_name,
    })
}

fn verify_signature(headers: &HeaderMap, body: &[u8], secret: &str) -> Result<(), RequestError> {
    let header = headers
        .get(GITHUB_SIGNATURE_HEADER)
        .ok_or(RequestError::MissingSignature)?
        .to_str()
        .map_err(|_| RequestError::InvalidSignature)?;

    let signature = Signature::from_header(header).map_err(|e| {
        warn!(error = %e, message = "Malformed webhook signature");
        match e {
            CryptoError::UnsupportedAlgorithm { .. } => RequestError::UnsupportedHashAlgorithm,
            _ => RequestError::InvalidSignature,
        }
    })?;

    match signature.is_valid(body, secret) {
        Ok(true) => Ok(()),
        Ok(false) => {
            warn!("Webhook signature mismatch");
            Err(RequestError::InvalidSignature)
        }
        Err(e) => {
            warn!(error = %e, message = "Could not verify webhook signature");
            Err(RequestError::InvalidSignature)
        }
    }
}

fn extract_channel(query: &str) -> Option<String> {
    web::Query::<HashMap<String, String>>::from_query(query)
        .ok()?
        .into_inner()
        .remove(CHANNEL_PARAMETER)
        .filter(|channel| !channel.is_empty())
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;
    use pretty_assertions::assert_eq;

    use super::*;

    const SECRET: &str = "It's a Secret to Everybody";
    const BODY: &[u8] = b"Hello, World!";

    fn config(secret: &str) -> Config {
        let mut config = Config::from_env_no_version();
        config.chat.access_token = "token".into();
        config.server.webhook_secret = secret.into();
        config
    }

    fn signature() -> String {
        Signature::compute(BODY, SECRET).unwrap().to_header()
    }

    #[test]
    fn test_valid_request() {
        let req = TestRequest::post()
            .uri("/webhook?channel=ABCDEF&other=1")
            .insert_header(("X-Github-Event", "pull_request"))
            .insert_header((GITHUB_SIGNATURE_HEADER, signature()))
            .to_http_request();

        assert_eq!(
            authenticate(&config(SECRET), &req, BODY).unwrap(),
            AuthenticatedRequest {
                channel: "ABCDEF".into(),
                event_type: EventType::PullRequest,
                event_name: Some("pull_request".into()),
            }
        );
    }

    #[test]
    fn test_missing_access_token_comes_first() {
        let mut config = config(SECRET);
        config.chat.access_token = String::new();

        let req = TestRequest::post().uri("/webhook").to_http_request();
        assert_eq!(
            authenticate(&config, &req, BODY),
            Err(RequestError::MissingAccessToken)
        );
    }

    #[test]
    fn test_missing_signature_ignores_channel() {
        let req = TestRequest::post()
            .uri("/webhook")
            .insert_header(("X-GitHub-Event", "push"))
            .to_http_request();

        let err = authenticate(&config(SECRET), &req, BODY).unwrap_err();
        assert_eq!(err, RequestError::MissingSignature);
        assert_eq!(err.to_string(), "Missing HTTP Header: X-Hub-Signature");
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let req = TestRequest::post()
            .uri("/webhook?channel=ABCDEF")
            .insert_header(("x-hub-signature", signature()))
            .insert_header(("x-github-event", "PUSH"))
            .to_http_request();

        let request = authenticate(&config(SECRET), &req, BODY).unwrap();
        assert_eq!(request.event_type, EventType::Push);
    }

    #[test]
    fn test_signature_errors() {
        let cases = [
            ("sha256=abcd", RequestError::UnsupportedHashAlgorithm),
            ("md5", RequestError::UnsupportedHashAlgorithm),
            ("sha1=not-hex", RequestError::InvalidSignature),
            (
                "sha1=0000000000000000000000000000000000000000",
                RequestError::InvalidSignature,
            ),
        ];

        for (header, expected) in cases {
            let req = TestRequest::post()
                .uri("/webhook?channel=ABCDEF")
                .insert_header((GITHUB_SIGNATURE_HEADER, header))
                .to_http_request();

            assert_eq!(
                authenticate(&config(SECRET), &req, BODY),
                Err(expected),
                "{header}"
            );
        }
    }

    #[test]
    fn test_signature_covers_exact_body() {
        let req = TestRequest::post()
            .uri("/webhook?channel=ABCDEF")
            .insert_header((GITHUB_SIGNATURE_HEADER, signature()))
            .to_http_request();

        assert_eq!(
            authenticate(&config(SECRET), &req, b"Hello, World! "),
            Err(RequestError::InvalidSignature)
        );
    }

    #[test]
    fn test_no_secret_skips_signature() {
        let req = TestRequest::post()
            .uri("/webhook?channel=ABCDEF")
            .to_http_request();

        let request = authenticate(&config(""), &req, BODY).unwrap();
        assert_eq!(request.event_type, EventType::Unknown);
        assert_eq!(request.event_name, None);
    }

    #[test]
    fn test_missing_or_empty_channel() {
        for uri in ["/webhook", "/webhook?channel=", "/webhook?chan=ABCDEF"] {
            let req = TestRequest::post()
                .uri(uri)
                .insert_header((GITHUB_SIGNATURE_HEADER, signature()))
                .to_http_request();

            assert_eq!(
                authenticate(&config(SECRET), &req, BODY),
                Err(RequestError::MissingChannel),
                "{uri}"
            );
        }
    }
}
