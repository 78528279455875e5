mod pull_request;
mod pull_request_event;
mod review_comment;
mod review_comment_event;

pub use pull_request::GhPullRequest;
pub use pull_request_event::GhPullRequestEvent;
pub use review_comment::GhPullRequestReviewComment;
pub use review_comment_event::GhPullRequestReviewCommentEvent;
