//! Line classification for the markdown dialect.

/// Kind of an open list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Ordered,
    Unordered,
}

impl ListKind {
    pub fn open_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "<ol>",
            ListKind::Unordered => "<ul>",
        }
    }

    pub fn close_tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "</ol>",
            ListKind::Unordered => "</ul>",
        }
    }
}

/// What a single source line means outside of a code block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Block<'a> {
    /// A line opening or closing a fenced code block
    Fence,
    Heading { level: u8, text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    Quote(&'a str),
    Paragraph(&'a str),
    Blank,
}

const FENCE: &str = "```";

/// True when the trimmed line starts a code fence
pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// Classify one line. Dispatch order matters: headings look at the raw line,
/// everything else at the trimmed line.
pub fn classify(line: &str) -> Block<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with(FENCE) {
        return Block::Fence;
    }

    if let Some(text) = line.strip_prefix("### ") {
        return Block::Heading { level: 3, text };
    }
    // Single `#` shares the level of `##`
    if let Some(text) = line.strip_prefix("## ").or_else(|| line.strip_prefix("# ")) {
        return Block::Heading { level: 2, text };
    }

    if let Some(text) = trimmed.strip_prefix("- ").or_else(|| trimmed.strip_prefix("* ")) {
        return Block::ListItem { kind: ListKind::Unordered, text };
    }

    if let Some(text) = ordered_item_text(trimmed) {
        return Block::ListItem { kind: ListKind::Ordered, text };
    }

    if let Some(text) = trimmed.strip_prefix('>') {
        return Block::Quote(text.trim());
    }

    if trimmed.is_empty() {
        Block::Blank
    } else {
        Block::Paragraph(line)
    }
}

/// A leading digit and a later `. `; the item text follows the first `. `
fn ordered_item_text(trimmed: &str) -> Option<&str> {
    if !trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    trimmed
        .split_once(". ")
        .map(|(_, rest)| rest.trim())
}
