use serde::{Deserialize, Serialize};

/// GitHub User.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhUser {
    /// Username.
    pub login: Option<String>,
    /// Profile URL.
    pub html_url: Option<String>,
}
