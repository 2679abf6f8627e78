// src/util/text.rs

/// First non-empty line of `content`, trimmed.
///
/// # Examples
///
/// ```
/// use notepad::util::text::first_line;
///
/// assert_eq!(first_line("\n  Buy milk  \nand eggs"), "Buy milk");
/// ```
pub fn first_line(content: &str) -> &str {
    content
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty())
        .unwrap_or("")
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{kept}…")
}
