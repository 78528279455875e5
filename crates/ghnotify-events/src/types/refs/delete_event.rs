use serde::{Deserialize, Serialize};

use crate::types::common::{GhRepository, GhUser};

/// GitHub Delete event (branch or tag).
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhDeleteEvent {
    /// Reference name.
    #[serde(rename = "ref")]
    pub reference: Option<String>,
    /// Reference type (`branch` or `tag`).
    pub ref_type: Option<String>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
