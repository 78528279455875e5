use ghnotify_events::types::generic::GhGenericEvent;

use super::optional_repository_line;
use crate::{markdown, Result};

pub(crate) fn format_unsupported(event_name: &str, event: &GhGenericEvent) -> Result<Option<String>> {
    Ok(Some(markdown::compose(
        optional_repository_line(event.repository.as_ref())?,
        &format!("Unsupported event: {}.", markdown::code_span(event_name)),
        None,
    )))
}
