use ghnotify_events::types::push::{GhCommit, GhPushEvent};

use super::repository_line;
use crate::{errors::Required, markdown, Result};

pub(crate) fn format_push(event: &GhPushEvent) -> Result<Option<String>> {
    let commits = event.commits.as_deref().required("commits")?;
    if commits.is_empty() {
        return Ok(None);
    }

    let branch = event.branch_name().required("ref")?;
    let description = format!(
        "{} commits pushed to branch [{}]({}).",
        commits.len(),
        markdown::escape(branch),
        event.compare.as_deref().required("compare")?
    );

    let lines = commits
        .iter()
        .enumerate()
        .map(|(idx, commit)| commit_line(idx, commit))
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        Some(lines.join("\n")),
    )))
}

fn commit_line(idx: usize, commit: &GhCommit) -> Result<String> {
    let field = |name: &str| format!("commits.{idx}.{name}");

    let author = commit.author.as_ref().required(&field("author"))?;
    let author_name = author
        .username
        .as_deref()
        .or(author.name.as_deref())
        .required(&field("author.username"))?;
    let summary = commit
        .message
        .as_deref()
        .and_then(|message| message.lines().next())
        .unwrap_or_default();

    Ok(format!(
        "{} {} - {}",
        markdown::commit_link(
            commit.id.as_deref().required(&field("id"))?,
            commit.url.as_deref().required(&field("url"))?,
        ),
        markdown::escape(summary),
        markdown::escape(author_name)
    ))
}
