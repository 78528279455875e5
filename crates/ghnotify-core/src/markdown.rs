//! Markdown fragments.
//!
//! Pure helpers returning message pieces. Display text coming from payloads
//! must go through [`escape`] before being interpolated.

/// Characters escaped with a backslash in display text.
pub const METACHARACTERS: [char; 7] = ['\\', '[', ']', '(', ')', '_', '*'];

/// Backslash-escape Markdown metacharacters.
pub fn escape(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    for c in text.chars() {
        if METACHARACTERS.contains(&c) {
            output.push('\\');
        }
        output.push(c);
    }

    output
}

/// Generic link.
pub fn link(text: &str, url: &str) -> String {
    format!("[{}]({})", escape(text), url)
}

/// Bold text. The text is expected to be already escaped.
pub fn bold(text: &str) -> String {
    format!("__{text}__")
}

/// Bold repository line, as `__\[[owner/name](url)\]__`.
pub fn repository_line(full_name: &str, url: &str) -> String {
    bold(&format!("\\[{}\\]", link(full_name, url)))
}

/// Issue or pull request link, as `[#number: title](url)`.
pub fn issue_link(number: u64, title: &str, url: &str) -> String {
    format!("[#{}: {}]({})", number, escape(title), url)
}

/// Account link, as `[login](url)`.
pub fn account_link(login: &str, url: &str) -> String {
    link(login, url)
}

/// Commit link, as ``[`short hash`](url)``.
pub fn commit_link(id: &str, url: &str) -> String {
    format!("[`{}`]({})", short_hash(id), url)
}

/// First 7 characters of a commit hash.
pub fn short_hash(id: &str) -> &str {
    id.char_indices()
        .nth(7)
        .map(|(idx, _)| &id[..idx])
        .unwrap_or(id)
}

/// Inline code. Contents are kept verbatim.
pub fn code_span(text: &str) -> String {
    if text.contains('`') {
        format!("`` {text} ``")
    } else {
        format!("`{text}`")
    }
}

/// Quote each non-empty line with `> `.
///
/// Returns `None` when nothing is left to quote.
pub fn block_quote(text: Option<&str>) -> Option<String> {
    let lines: Vec<_> = text?
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
        .map(|line| format!("> {line}"))
        .collect();

    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Enumerate names as `to A, B and C`.
pub fn reviewer_list(names: &[String]) -> Option<String> {
    match names {
        [] => None,
        [single] => Some(format!("to {single}")),
        [head @ .., last] => Some(format!("to {} and {}", head.join(", "), last)),
    }
}

/// Lowercased action name, escaped (`ready_for_review` becomes `ready\_for\_review`).
pub fn action_name(action: &str) -> String {
    escape(&action.to_lowercase())
}

/// Assemble a message: optional repository line, bold description, optional details.
pub fn compose(repository_line: Option<String>, description: &str, details: Option<String>) -> String {
    repository_line
        .into_iter()
        .chain(std::iter::once(bold(description)))
        .chain(details)
        .collect::<Vec<_>>()
        .join("\n")
}
