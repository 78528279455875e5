use serde::{Deserialize, Serialize};

use crate::types::common::{GhTeam, GhUser};

/// GitHub Pull request.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPullRequest {
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
    /// Pending reviewers.
    pub requested_reviewers: Option<Vec<GhUser>>,
    /// Pending team reviewers.
    pub requested_teams: Option<Vec<GhTeam>>,
}
