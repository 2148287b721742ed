//! Small text helpers shared by the views and the playback queue.

use chrono::{Local, TimeZone};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Collapse every whitespace run into a single space.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").into_owned()
}

/// First `max_chars` characters of `text` with whitespace collapsed, plus an
/// ellipsis when anything was cut.
pub fn excerpt(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    let mut out = collapse_whitespace(&head);
    if text.chars().count() > max_chars {
        out.push('…');
    }
    out
}

/// Canonical form used for substring filters: NFC composed and lowercased.
pub fn search_key(text: &str) -> String {
    text.trim().nfc().collect::<String>().to_lowercase()
}

/// Local wall-clock rendering of a Unix timestamp in milliseconds.
pub fn format_timestamp(millis: i64) -> String {
    match Local.timestamp_millis_opt(millis).single() {
        Some(at) => at.format("%Y-%m-%d %H:%M").to_string(),
        None => String::new(),
    }
}

/// Current time as Unix milliseconds.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn excerpt_cuts_and_marks_long_text() {
        let text = "بِسْمِ ٱللَّهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ وَهُوَ نَصٌّ طَوِيلٌ جِدًّا";
        let out = excerpt(text, 36);
        assert!(out.ends_with('…'));
        assert_eq!(out.chars().count(), 37);
    }

    #[test]
    fn excerpt_keeps_short_text_and_collapses_spaces() {
        assert_eq!(excerpt("a  \n b", 36), "a b");
    }

    #[test]
    fn search_key_composes_and_lowercases() {
        assert_eq!(search_key("  Al-KAHF "), "al-kahf");
        assert_eq!(search_key("e\u{301}"), search_key("\u{e9}"));
    }

    #[test]
    fn out_of_range_timestamp_renders_empty() {
        assert_eq!(format_timestamp(i64::MAX), "");
        assert!(!format_timestamp(0).is_empty());
    }
}
