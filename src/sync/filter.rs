//! Word filtering for display
//!
//! Transcript tokens from the speech service may carry bracketed audio
//! markup (e.g. `[laugh]`) that steers expressive synthesis but is not
//! meant to be shown as readable text.

use std::sync::LazyLock;

use regex::Regex;

use super::timeline::TimestampEntry;

/// Well-formed bracketed spans: `[` through the next `]`, brackets included.
static MARKUP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[[^\]]*\]").expect("markup pattern is valid"));

/// Strip every well-formed `[...]` span from a token and trim whitespace.
///
/// Unbalanced brackets are left untouched; only complete spans are removed.
#[must_use]
pub fn filter_markup(token: &str) -> String {
    MARKUP.replace_all(token, "").trim().to_string()
}

/// Whether a token starts with sentence punctuation.
///
/// A rendering layer uses this to skip the separating space before such a
/// token; the filter itself renders nothing.
#[must_use]
pub fn is_punctuation_leading(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
}

/// One renderable word derived from a timestamp entry.
///
/// Markup-only entries produce no display token, so display indices are
/// contiguous while source indices may have holes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayToken {
    /// Filtered text, never empty
    pub text: String,
    /// Position among display tokens only
    pub display_index: usize,
    /// Position in the raw timestamp sequence
    pub source_index: usize,
}

/// Derive the display-token sequence for a timestamp sequence.
///
/// Deterministic and stable: identical input always yields identical output.
#[must_use]
pub fn build_display_index(entries: &[TimestampEntry]) -> Vec<DisplayToken> {
    let mut tokens = Vec::with_capacity(entries.len());
    for (source_index, entry) in entries.iter().enumerate() {
        let text = filter_markup(&entry.word);
        if text.is_empty() {
            continue;
        }
        tokens.push(DisplayToken {
            text,
            display_index: tokens.len(),
            source_index,
        });
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str) -> TimestampEntry {
        TimestampEntry {
            word: word.to_string(),
            start_seconds: 0.0,
            end_seconds: 0.0,
        }
    }

    #[test]
    fn test_filter_strips_markup() {
        assert_eq!(filter_markup("hello [laugh] world"), "hello  world");
        assert_eq!(filter_markup("[sigh]"), "");
        assert_eq!(filter_markup("plain"), "plain");
    }

    #[test]
    fn test_filter_strips_multiple_spans() {
        assert_eq!(filter_markup("[a]x[b]y[c]"), "xy");
    }

    #[test]
    fn test_filter_preserves_unbalanced_brackets() {
        assert_eq!(filter_markup("half[open"), "half[open");
        assert_eq!(filter_markup("close]d"), "close]d");
    }

    #[test]
    fn test_punctuation_leading() {
        assert!(is_punctuation_leading(", and"));
        assert!(is_punctuation_leading("!"));
        assert!(!is_punctuation_leading("word"));
        assert!(!is_punctuation_leading(""));
    }

    #[test]
    fn test_display_index_skips_markup_only_entries() {
        let entries = vec![entry("one"), entry("[laugh]"), entry("two")];
        let tokens = build_display_index(&entries);

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].text, "one");
        assert_eq!(tokens[0].display_index, 0);
        assert_eq!(tokens[0].source_index, 0);
        assert_eq!(tokens[1].text, "two");
        assert_eq!(tokens[1].display_index, 1);
        assert_eq!(tokens[1].source_index, 2);
    }
}
