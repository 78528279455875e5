use serde::{Deserialize, Serialize};

use crate::types::common::{GhRepository, GhUser};

/// GitHub Ping event.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhPingEvent {
    /// Zen text.
    pub zen: Option<String>,
    /// Hook ID.
    pub hook_id: Option<u64>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
