use ghnotify_chat_interface::SenderError;

#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum HttpSenderError {
    #[error(transparent)]
    HttpError { source: reqwest::Error },

    #[error("Invalid chat API root URL '{url}': {reason}")]
    InvalidRootUrl { url: String, reason: String },

    #[error("Missing configuration: AccessToken")]
    MissingAccessToken,

    #[error("Invalid access token header value")]
    InvalidAccessToken,

    #[error("Chat API answered with status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },
}

impl From<reqwest::Error> for HttpSenderError {
    fn from(e: reqwest::Error) -> Self {
        HttpSenderError::HttpError { source: e }
    }
}

impl From<HttpSenderError> for SenderError {
    fn from(e: HttpSenderError) -> Self {
        match e {
            HttpSenderError::UnexpectedStatus { status, body } => {
                SenderError::UnexpectedStatus { status, body }
            }
            e => SenderError::ImplementationError { source: e.into() },
        }
    }
}
