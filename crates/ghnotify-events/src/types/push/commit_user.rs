use serde::{Deserialize, Serialize};

/// GitHub Commit user.
#[derive(Debug, Deserialize, Serialize, Default, Clone, PartialEq, Eq)]
pub struct GhCommitUser {
    /// Name.
    pub name: Option<String>,
    /// Email.
    pub email: Option<String>,
    /// GitHub username, when the email is linked to an account.
    pub username: Option<String>,
}
