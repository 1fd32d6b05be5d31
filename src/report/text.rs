//! Text sanitation, measurement, and wrapping for the rendering backend.
//!
//! The backend's fonts do not guarantee glyph coverage beyond ASCII, so all
//! rendered copy passes through [`strip_non_ascii`] first. Stripping only
//! applies to the rendered copy; the underlying survey data and exports keep
//! their original text.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_ASCII: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());

/// Average glyph width as a fraction of font size, regular weight.
const CHAR_WIDTH_FACTOR: f64 = 0.52;
/// Bold glyphs run slightly wider.
const BOLD_CHAR_WIDTH_FACTOR: f64 = 0.56;

/// Line height as a multiple of font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.55;

/// Remove all non-ASCII characters and trim the result.
pub fn strip_non_ascii(text: &str) -> String {
    NON_ASCII.replace_all(text, "").trim().to_string()
}

/// Estimated rendered width of `text` in points.
///
/// Deliberately an estimate from an average per-character width rather than
/// glyph metrics, so measurement is deterministic and font-free.
pub fn estimated_width(text: &str, size: f64, bold: bool) -> f64 {
    let factor = if bold {
        BOLD_CHAR_WIDTH_FACTOR
    } else {
        CHAR_WIDTH_FACTOR
    };
    text.chars().count() as f64 * size * factor
}

/// Greedy word wrap to a target width, using the estimated
/// characters-per-line for the font size.
pub fn wrap_to_width(text: &str, max_width: f64, size: f64) -> Vec<String> {
    let chars_per_line = ((max_width / (size * CHAR_WIDTH_FACTOR)) as usize).max(1);
    wrap_to_chars(text, chars_per_line)
}

/// Greedy word wrap to a fixed character budget per line.
pub fn wrap_to_chars(text: &str, chars_per_line: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= chars_per_line {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Truncate a display value to a character budget.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_non_ascii_removes_emoji() {
        assert_eq!(strip_non_ascii("🍭 Sweet Seeker"), "Sweet Seeker");
        assert_eq!(strip_non_ascii("plain text"), "plain text");
    }

    #[test]
    fn test_strip_non_ascii_collapses_to_empty() {
        assert_eq!(strip_non_ascii("🍜🍋"), "");
    }

    #[test]
    fn test_wrap_keeps_words_whole() {
        let lines = wrap_to_chars("the quick brown fox jumps over the lazy dog", 15);
        assert!(lines.iter().all(|l| l.chars().count() <= 15));
        let rejoined = lines.join(" ");
        assert_eq!(rejoined, "the quick brown fox jumps over the lazy dog");
    }

    #[test]
    fn test_wrap_single_long_word() {
        let lines = wrap_to_chars("antidisestablishmentarianism", 10);
        assert_eq!(lines.len(), 1);
    }

    #[test]
    fn test_estimated_width_scales_with_length() {
        let short = estimated_width("abc", 10.0, false);
        let long = estimated_width("abcdef", 10.0, false);
        assert!((long - 2.0 * short).abs() < 1e-9);
        assert!(estimated_width("abc", 10.0, true) > short);
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
        assert_eq!(truncate_chars("hi", 5), "hi");
    }
}
