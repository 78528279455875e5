use serde::{Deserialize, Serialize};

/// GitHub Team.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhTeam {
    /// Name.
    pub name: Option<String>,
    /// Web URL.
    pub html_url: Option<String>,
}
