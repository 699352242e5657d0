//! Post slugs.
//!
//! A slug is the lowercased title with every character that is neither
//! alphanumeric nor whitespace dropped, and the remaining words joined by a
//! single `-`. Uniqueness is not checked here; see `Document::add_post`.

/// Derive a URL-safe slug from a post title.
///
/// Returns an empty string for blank or all-punctuation titles.
pub fn slugify(title: &str) -> String {
    let kept: String = title
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    kept.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Append `-2`, `-3`, ... to `base` until `taken` reports the candidate as free
pub fn disambiguate<F>(base: &str, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !taken(base) {
        return base.to_string();
    }

    let mut n = 2;
    loop {
        let candidate = format!("{}-{}", base, n);
        if !taken(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_slug() {
        assert_eq!(slugify("Hello, World!"), "hello-world");
        assert_eq!(slugify("Hello, World!"), slugify("Hello, World!"));
    }

    #[test]
    fn test_blank_and_punctuation_titles() {
        assert_eq!(slugify("  "), "");
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("?!... ---"), "");
    }

    #[test]
    fn test_whitespace_runs_collapse() {
        assert_eq!(slugify("  Breaking   the\tweb \n today "), "breaking-the-web-today");
    }

    #[test]
    fn test_symbols_dropped_without_substitution() {
        assert_eq!(slugify("C++ & Rust: 2024 🚀 Edition"), "c-rust-2024-edition");
        assert_eq!(slugify("don't-stop"), "dontstop");
    }

    #[test]
    fn test_unicode_letters_survive() {
        assert_eq!(slugify("Café Über"), "café-über");
    }

    #[test]
    fn test_disambiguate() {
        let existing = ["intro", "intro-2"];
        assert_eq!(disambiguate("intro", |s| existing.contains(&s)), "intro-3");
        assert_eq!(disambiguate("fresh", |s| existing.contains(&s)), "fresh");
    }
}
