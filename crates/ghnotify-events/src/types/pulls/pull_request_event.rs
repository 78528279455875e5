use serde::{Deserialize, Serialize};

use super::GhPullRequest;
use crate::types::common::{GhRepository, GhTeam, GhUser};

/// GitHub Pull request event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPullRequestEvent {
    /// Action.
    pub action: Option<String>,
    /// Pull request.
    pub pull_request: Option<GhPullRequest>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
    /// Reviewer targeted by a `review_requested` action.
    pub requested_reviewer: Option<GhUser>,
    /// Team targeted by a `review_requested` action.
    pub requested_team: Option<GhTeam>,
}
