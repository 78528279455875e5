use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Issue comment.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhIssueComment {
    /// Web URL.
    pub html_url: Option<String>,
    /// Body.
    pub body: Option<String>,
    /// Author.
    pub user: Option<GhUser>,
}
