use serde::{Deserialize, Serialize};

use crate::types::common::{GhRepository, GhUser};

/// GitHub Create event (branch or tag).
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhCreateEvent {
    /// Reference name.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Reference type (`branch` or `tag`).
    pub ref_type: Option<String>,
    /// Repository description.
    pub description: Option<String>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
