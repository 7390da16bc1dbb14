//! Line-delimited bullet text as edited in the admin panel.

/// Parse editor text into a bullet list.
///
/// Lines are split on `\n` (a trailing `\r` is dropped with the rest of the
/// surrounding whitespace), trimmed, and empty lines are discarded. Returns
/// `None` when no non-empty line remains so that the stored list is cleared.
pub fn parse(text: &str) -> Option<Vec<String>> {
    let items: Vec<String> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    if items.is_empty() { None } else { Some(items) }
}

/// Serialize a bullet list back into editor text, one bullet per line.
pub fn to_text(items: &[String]) -> String {
    items.join("\n")
}
