use serde::{Deserialize, Serialize};

use crate::types::common::GhUser;

/// GitHub Pull request review comment.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPullRequestReviewComment {
    /// Web URL.
    pub html_url: Option<String>,
    /// Body.
    pub body: Option<String>,
    /// Author.
    pub user: Option<GhUser>,
}
