mod issue;
mod issue_comment;
mod issue_comment_event;
mod issues_event;

pub use issue::GhIssue;
pub use issue_comment::GhIssueComment;
pub use issue_comment_event::GhIssueCommentEvent;
pub use issues_event::GhIssuesEvent;
