use serde::{Deserialize, Serialize};

/// GitHub Repository.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhRepository {
    /// Full name, as `owner/name`.
    pub full_name: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
}
