//! Text processing utilities.
//!
//! This module contains utilities for fitting service-provided text into
//! terminal cells, such as turning a multi-paragraph synopsis into a
//! one-line preview.

use regex::Regex;
use std::sync::OnceLock;

const ELLIPSIS: char = '…';

fn whitespace() -> &'static Regex {
    static WHITESPACE: OnceLock<Regex> = OnceLock::new();
    WHITESPACE.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// Replace every run of whitespace, newlines included, with one space and
/// trim both ends.
///
pub fn collapse_whitespace(text: &str) -> String {
    whitespace().replace_all(text.trim(), " ").into_owned()
}

/// Shorten text to at most `max_chars` characters, marking the cut with an
/// ellipsis.
///
pub fn ellipsize(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut shortened: String = text.chars().take(max_chars - 1).collect();
    shortened.push(ELLIPSIS);
    shortened
}

/// Single-line preview of a synopsis that fits `width` cells.
///
pub fn preview(text: &str, width: usize) -> String {
    ellipsize(&collapse_whitespace(text), width)
}

/// Join the non-empty parts with a separator, e.g. rating and runtime.
///
pub fn join_present(parts: &[&str], separator: &str) -> String {
    parts
        .iter()
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  A heist\n\n gone   wrong.\t"),
            "A heist gone wrong."
        );
        assert_eq!(collapse_whitespace(""), "");
    }

    #[test]
    fn test_ellipsize() {
        assert_eq!(ellipsize("Heat", 10), "Heat");
        assert_eq!(ellipsize("Heat", 4), "Heat");
        assert_eq!(ellipsize("The Godfather", 7), "The Go…");
        assert_eq!(ellipsize("Heat", 0), "");
    }

    #[test]
    fn test_ellipsize_counts_characters() {
        assert_eq!(ellipsize("Amélie Poulain", 6), "Améli…");
    }

    #[test]
    fn test_preview() {
        assert_eq!(preview("One\nTwo Three", 9), "One Two …");
    }

    #[test]
    fn test_join_present() {
        assert_eq!(join_present(&["PG-13", "", " 2h 50m "], " | "), "PG-13 | 2h 50m");
        assert_eq!(join_present(&["", " "], " | "), "");
    }
}
