use ghnotify_events::types::pulls::{GhPullRequestEvent, GhPullRequestReviewCommentEvent};

use super::{account_link, repository_line};
use crate::{errors::Required, markdown, Result};

pub(crate) fn format_pull_request(event: &GhPullRequestEvent) -> Result<Option<String>> {
    let action = event.action.as_deref().required("action")?;
    let pull_request = event.pull_request.as_ref().required("pull_request")?;

    let phrase = if action == "review_requested" {
        match markdown::reviewer_list(&requested_reviewers(event)) {
            Some(reviewers) => format!("requested review {reviewers}"),
            None => "requested review".to_string(),
        }
    } else {
        markdown::action_name(action)
    };

    let description = format!(
        "The pull request {} {} by {}.",
        markdown::issue_link(
            pull_request.number.required("pull_request.number")?,
            pull_request
                .title
                .as_deref()
                .required("pull_request.title")?,
            pull_request
                .html_url
                .as_deref()
                .required("pull_request.html_url")?,
        ),
        phrase,
        account_link(event.sender.as_ref(), "sender")?
    );

    let details = if action == "opened" {
        markdown::block_quote(pull_request.body.as_deref())
    } else {
        None
    };

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        details,
    )))
}

/// Escaped reviewer names: pending users then pending teams, or the
/// single reviewer targeted by the event when the lists are empty.
fn requested_reviewers(event: &GhPullRequestEvent) -> Vec<String> {
    let pull_request = event.pull_request.as_ref();
    let users = pull_request
        .and_then(|pr| pr.requested_reviewers.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|user| user.login.as_deref());
    let teams = pull_request
        .and_then(|pr| pr.requested_teams.as_deref())
        .unwrap_or_default()
        .iter()
        .filter_map(|team| team.name.as_deref());

    let mut names: Vec<_> = users.chain(teams).map(markdown::escape).collect();
    if names.is_empty() {
        names = event
            .requested_reviewer
            .as_ref()
            .and_then(|user| user.login.as_deref())
            .into_iter()
            .chain(
                event
                    .requested_team
                    .as_ref()
                    .and_then(|team| team.name.as_deref()),
            )
            .map(markdown::escape)
            .collect();
    }

    names
}

pub(crate) fn format_review_comment(
    event: &GhPullRequestReviewCommentEvent,
) -> Result<Option<String>> {
    if event.action.as_deref().required("action")? != "created" {
        return Ok(None);
    }

    let pull_request = event.pull_request.as_ref().required("pull_request")?;
    let comment = event.comment.as_ref().required("comment")?;

    let description = format!(
        "New comment created by {} on pull request {}.",
        account_link(event.sender.as_ref(), "sender")?,
        markdown::issue_link(
            pull_request.number.required("pull_request.number")?,
            pull_request
                .title
                .as_deref()
                .required("pull_request.title")?,
            comment.html_url.as_deref().required("comment.html_url")?,
        )
    );

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        markdown::block_quote(comment.body.as_deref()),
    )))
}
