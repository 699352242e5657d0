//! Inline transforms applied to paragraph text.

/// Replace occurrences of `delim` left to right, alternating `open` and
/// `close`. With `whole_pairs` a trailing unmatched delimiter is left alone;
/// without it the trailing delimiter still becomes `open`.
fn pair_delimiters(text: &str, delim: &str, open: &str, close: &str, whole_pairs: bool) -> String {
    let count = text.matches(delim).count();
    let usable = if whole_pairs { count - count % 2 } else { count };
    if usable == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len() + usable * close.len());
    let mut rest = text;
    for i in 0..usable {
        let Some(pos) = rest.find(delim) else { break };
        out.push_str(&rest[..pos]);
        out.push_str(if i % 2 == 0 { open } else { close });
        rest = &rest[pos + delim.len()..];
    }
    out.push_str(rest);
    out
}

/// Bold (`**`), then italic (`_`), then inline code (`` ` ``), in that order
pub fn apply_inline(text: &str) -> String {
    let text = pair_delimiters(text, "**", "<strong>", "</strong>", false);
    let text = pair_delimiters(&text, "_", "<em>", "</em>", true);
    pair_delimiters(&text, "`", "<code>", "</code>", true)
}
