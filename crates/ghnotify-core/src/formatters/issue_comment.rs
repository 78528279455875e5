use ghnotify_events::types::issues::GhIssueCommentEvent;

use super::{account_link, repository_line};
use crate::{errors::Required, markdown, Result};

pub(crate) fn format_issue_comment(event: &GhIssueCommentEvent) -> Result<Option<String>> {
    let action = event.action.as_deref().required("action")?;
    let issue = event.issue.as_ref().required("issue")?;
    let comment = event.comment.as_ref().required("comment")?;

    // Hooks can be delivered without a sender, the comment author is the next best thing.
    let (author, author_field) = match &event.sender {
        Some(sender) => (Some(sender), "sender"),
        None => (comment.user.as_ref(), "comment.user"),
    };

    let description = format!(
        "New comment {} by {} on issue {}.",
        markdown::action_name(action),
        account_link(author, author_field)?,
        markdown::issue_link(
            issue.number.required("issue.number")?,
            issue.title.as_deref().required("issue.title")?,
            comment.html_url.as_deref().required("comment.html_url")?,
        )
    );

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        markdown::block_quote(comment.body.as_deref()),
    )))
}
