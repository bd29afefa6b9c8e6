//! Plain-text preview derivation for note content.
//!
//! # Responsibility
//! - Reduce lightweight-markup note content to a short list preview.
//!
//! # Invariants
//! - Pure projection, derived on read; never stored with the record.

use once_cell::sync::Lazy;
use regex::Regex;

const PREVIEW_MAX_CHARS: usize = 100;

static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"[\*_`#>~\-\[\]\(\)!]+"#).expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Derives a one-line preview from note content.
///
/// Rules: links reduced to their text, markdown symbols removed,
/// whitespace collapsed, first 100 chars retained. Returns `None` when
/// nothing printable remains.
pub fn derive_preview(content: &str) -> Option<String> {
    let without_links = MARKDOWN_LINK_RE.replace_all(content, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&without_links, " ");
    let normalized = WHITESPACE_RE.replace_all(&without_symbols, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::derive_preview;

    #[test]
    fn preview_strips_markdown_symbols_and_limits_length() {
        let source = "# Git stash\n\n- [docs](https://git-scm.com)\n**use** `git stash`";
        let text = derive_preview(source).expect("preview should exist");
        assert!(!text.contains('#'));
        assert!(!text.contains('*'));
        assert!(text.contains("docs"));
        assert!(text.chars().count() <= 100);
    }

    #[test]
    fn preview_of_blank_content_is_none() {
        assert_eq!(derive_preview("  \n\t"), None);
    }
}
