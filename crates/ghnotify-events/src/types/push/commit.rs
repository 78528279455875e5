use serde::{Deserialize, Serialize};

use super::GhCommitUser;

/// GitHub Commit, as found in push events.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhCommit {
    /// Hash.
    pub id: Option<String>,
    /// Message.
    pub message: Option<String>,
    /// Web URL.
    pub url: Option<String>,
    /// Author.
    pub author: Option<GhCommitUser>,
}
