use ghnotify_events::types::refs::{GhCreateEvent, GhDeleteEvent};

use super::{account_link, repository_line};
use crate::{errors::Required, markdown, Result};

pub(crate) fn format_create(event: &GhCreateEvent) -> Result<Option<String>> {
    let ref_type = event.ref_type.as_deref().required("ref_type")?;
    let reference = event.reference.as_deref().required("ref")?;

    let mut description = format!(
        "New {} {} created",
        markdown::escape(ref_type),
        markdown::code_span(reference)
    );
    if event.sender.is_some() {
        description.push_str(" by ");
        description.push_str(&account_link(event.sender.as_ref(), "sender")?);
    }
    description.push('.');

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        markdown::block_quote(event.description.as_deref()),
    )))
}

pub(crate) fn format_delete(event: &GhDeleteEvent) -> Result<Option<String>> {
    let description = format!(
        "A {} named {} was deleted by {}.",
        markdown::escape(event.ref_type.as_deref().required("ref_type")?),
        markdown::code_span(event.reference.as_deref().required("ref")?),
        account_link(event.sender.as_ref(), "sender")?
    );

    Ok(Some(markdown::compose(
        Some(repository_line(event.repository.as_ref())?),
        &description,
        None,
    )))
}
