use serde::{Deserialize, Serialize};

use crate::types::common::{GhRepository, GhUser};

/// Fields shared by every GitHub event, used for unsupported events.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhGenericEvent {
    /// Action.
    pub action: Option<String>,
    /// Repository.
    pub repository: Option<GhRepository>,
    /// Sender.
    pub sender: Option<GhUser>,
}
