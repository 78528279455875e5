mod commit;
mod commit_user;
mod push_event;

pub use commit::GhCommit;
pub use commit_user::GhCommitUser;
pub use push_event::GhPushEvent;
