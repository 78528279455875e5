use serde::{Deserialize, Serialize};

use super::{GhIssue, GhIssueComment};
use crate::types::common::{GhRepository, GhUser};

/// GitHub Issue comment event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhIssueCommentEvent {
    /// Action.
    pub action: Option<String>,
    /// Issue.
    pub issue: Option<GhIssue>,
    /// Comment.
    pub comment: Option<GhIssueComment>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
