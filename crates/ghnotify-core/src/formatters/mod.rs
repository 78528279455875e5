//! Per-event formatters.

mod issue_comment;
mod issues;
mod ping;
mod pulls;
mod push;
mod refs;
mod unsupported;

use ghnotify_events::{
    types::common::{GhRepository, GhUser},
    EventType, GhEvent,
};
use serde_json::Value;

use crate::{errors::Required, markdown, Result};

/// Format an event into a chat message.
///
/// `Ok(None)` means the event is acknowledged without any message.
#[tracing::instrument(skip_all, fields(event_type = %event.event_type()))]
pub fn format_event(event: &GhEvent) -> Result<Option<String>> {
    let message = match event {
        GhEvent::Ping(e) => ping::format_ping(e),
        GhEvent::Issues(e) => issues::format_issues(e),
        GhEvent::Create(e) => refs::format_create(e),
        GhEvent::Delete(e) => refs::format_delete(e),
        GhEvent::Push(e) => push::format_push(e),
        GhEvent::IssueComment(e) => issue_comment::format_issue_comment(e),
        GhEvent::PullRequest(e) => pulls::format_pull_request(e),
        GhEvent::PullRequestReviewComment(e) => pulls::format_review_comment(e),
        GhEvent::Acknowledged(_) => acknowledge(),
        GhEvent::Unsupported {
            event_name,
            payload,
        } => unsupported::format_unsupported(event_name, payload),
    }?;

    if message.is_none() {
        tracing::debug!("Event acknowledged without message");
    }

    Ok(message)
}

/// Parse then format a raw JSON payload.
pub fn format_payload(
    event_type: EventType,
    event_name: Option<&str>,
    payload: &Value,
) -> Result<Option<String>> {
    let event = GhEvent::parse(event_type, event_name, payload)?;
    format_event(&event)
}

fn acknowledge() -> Result<Option<String>> {
    Ok(None)
}

fn repository_line(repository: Option<&GhRepository>) -> Result<String> {
    let repository = repository.required("repository")?;
    Ok(markdown::repository_line(
        repository
            .full_name
            .as_deref()
            .required("repository.full_name")?,
        repository
            .html_url
            .as_deref()
            .required("repository.html_url")?,
    ))
}

/// Repository line for events which may come from an organization-level hook.
fn optional_repository_line(repository: Option<&GhRepository>) -> Result<Option<String>> {
    repository
        .map(|repository| repository_line(Some(repository)))
        .transpose()
}

fn account_link(user: Option<&GhUser>, field: &str) -> Result<String> {
    let user = user.required(field)?;
    Ok(markdown::account_link(
        user.login.as_deref().required(&format!("{field}.login"))?,
        user.html_url
            .as_deref()
            .required(&format!("{field}.html_url"))?,
    ))
}
