use serde::{Deserialize, Serialize};

use super::GhIssue;
use crate::types::common::{GhRepository, GhUser};

/// GitHub Issues event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhIssuesEvent {
    /// Action.
    pub action: Option<String>,
    /// Issue.
    pub issue: Option<GhIssue>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
