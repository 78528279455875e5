use ghnotify_events::types::issues::GhIssuesEvent;

use super::{account_link, repository_line};
use crate::{errors::Required, markdown, Result};

pub(crate) fn format_issues(event: &GhIssuesEvent) -> Result<Option<String>> {
    let action = event.action.as_deref().required("action")?;
    if action == "labeled" {
        return Ok(None);
    }

    let issue = event.issue.as_ref().required("issue")?;
    let description = format!(
        "The issue {} {} by {}.",
        markdown::issue_link(
            issue.number.required("issue.number")?,
            issue.title.as_deref().required("issue.title")?,
            issue.html_url.as_deref().required("issue.html_url")?,
        ),
        markdown::action_name(action),
        account_link(issue.user.as_ref(), "issue.user")?
    );

    let details = if action == "opened" {
        markdown::block_quote(issue.body.as_deref())
    } else {
        None
    };

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        details,
    )))
}
