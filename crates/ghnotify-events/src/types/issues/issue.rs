use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Issue.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhIssue {
    /// Number.
    pub number: Option<u64>,
    /// Title.
    pub title: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
    /// Body.
    pub body: Option<String>,
    /// Author.
    pub user: Option<GhUser>,
}
