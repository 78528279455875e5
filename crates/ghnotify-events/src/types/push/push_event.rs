use serde::{Deserialize, Serialize};

use super::GhCommit;
use crate::types::common::{GhRepository, GhUser};

/// GitHub Push event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPushEvent {
    /// Full reference, as `refs/heads/<branch>`.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Compare URL.
    pub compare: Option<String>,
    /// Pushed commits.
    pub commits: Option<Vec<GhCommit>>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}

impl GhPushEvent {
    /// Short branch name, i.e. the last segment of the reference.
    pub fn branch_name(&self) -> Option<&str> {
        self.reference
            .as_deref()
            .and_then(|reference| reference.rsplit('/').next())
    }
}
