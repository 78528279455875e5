use serde::{Deserialize, Serialize};

use super::{GhPullRequest, GhPullRequestReviewComment};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Pull request review comment event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPullRequestReviewCommentEvent {
    /// Action.
    pub action: Option<String>,
    /// Comment.
    pub comment: Option<GhPullRequestReviewComment>,
    /// Pull request.
    pub pull_request: Option<GhPullRequest>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
