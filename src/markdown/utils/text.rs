use lazy_static::lazy_static;
use regex::Regex;

/// Reading speed used for read time estimates
pub const WORDS_PER_MINUTE: usize = 200;

lazy_static! {
    static ref HEADING_REGEX: Regex = Regex::new(r"(?m)^#{1,3}\s+").unwrap();
    static ref BOLD_REGEX: Regex = Regex::new(r"\*\*(.+?)\*\*").unwrap();
    static ref ITALIC_REGEX: Regex = Regex::new(r"_(.+?)_").unwrap();
    static ref CODE_BLOCK_REGEX: Regex = Regex::new(r"```[\s\S]*?(```|$)").unwrap();
    static ref INLINE_CODE_REGEX: Regex = Regex::new(r"`(.+?)`").unwrap();
    static ref MARKER_REGEX: Regex = Regex::new(r"(?m)^\s*([-*>]|\d+\.)\s+").unwrap();
}

/// Number of whitespace separated words
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Estimated reading time, e.g. `3 min`; never less than one minute
pub fn read_time(content: &str) -> String {
    let minutes = (word_count(content) / WORDS_PER_MINUTE).max(1);
    format!("{} min", minutes)
}

/// Strip the dialect's markup, leaving plain text
pub fn strip_markdown(text: &str) -> String {
    let text = CODE_BLOCK_REGEX.replace_all(text, "");
    let text = HEADING_REGEX.replace_all(&text, "");
    let text = MARKER_REGEX.replace_all(&text, "");
    let text = BOLD_REGEX.replace_all(&text, "$1");
    let text = ITALIC_REGEX.replace_all(&text, "$1");
    let text = INLINE_CODE_REGEX.replace_all(&text, "$1");
    text.trim().to_string()
}

/// Plain-text summary of at most `max_chars` characters, cut at a word boundary
pub fn extract_summary(markdown: &str, max_chars: usize) -> String {
    let plain = strip_markdown(markdown);
    let plain = plain.split_whitespace().collect::<Vec<_>>().join(" ");

    if plain.chars().count() <= max_chars {
        return plain;
    }

    let truncated: String = plain.chars().take(max_chars).collect();
    match truncated.rfind(' ') {
        Some(pos) => format!("{}...", &truncated[..pos]),
        None => format!("{}...", truncated),
    }
}
