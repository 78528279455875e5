use ghnotify_events::types::ping::GhPingEvent;

use super::optional_repository_line;
use crate::{markdown, Result};

pub(crate) fn format_ping(event: &GhPingEvent) -> Result<Option<String>> {
    Ok(Some(markdown::compose(
        optional_repository_line(event.repository.as_ref())?,
        "Ping received.",
        markdown::block_quote(event.zen.as_deref()),
    )))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::formatters::tests::{repository, REPOSITORY_LINE};

    #[test]
    fn test_ping() {
        let event: GhPingEvent = serde_json::from_value(json!({
            "zen": "Keep it logically awesome.",
            "hook_id": 1234,
            "repository": repository()
        }))
        .unwrap();

        assert_eq!(
            format_ping(&event).unwrap(),
            Some(format!(
                "{REPOSITORY_LINE}\n__Ping received.__\n> Keep it logically awesome."
            ))
        );
    }

    #[test]
    fn test_ping_from_organization() {
        let event: GhPingEvent = serde_json::from_value(json!({"zen": "Design for failure."})).unwrap();

        assert_eq!(
            format_ping(&event).unwrap(),
            Some("__Ping received.__\n> Design for failure.".into())
        );
    }
}
