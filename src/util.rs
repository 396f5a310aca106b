//! Shared utility functions

use unicode_width::UnicodeWidthChar;

/// Count whitespace-separated words, matching `text.split(/\s+/)` semantics
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Count characters (Unicode scalar values, not bytes)
pub fn char_count(text: &str) -> usize {
    text.chars().count()
}

/// Counter line shown under displayed content: "N words • M characters"
pub fn counter_line(text: &str) -> String {
    format!(
        "{} words \u{2022} {} characters",
        word_count(text),
        char_count(text)
    )
}

/// Truncate a string to at most `max_cols` terminal columns.
///
/// Uses display width, not byte length, so emojis and CJK characters
/// never push a toast past its area. Appends an ellipsis when truncated.
pub fn truncate_to_width(s: &str, max_cols: usize) -> String {
    let total: usize = s.chars().filter_map(|c| c.width()).sum();
    if total <= max_cols {
        return s.to_string();
    }

    let budget = max_cols.saturating_sub(1); // room for the ellipsis
    let mut cols = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if cols + w > budget {
            break;
        }
        cols += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(word_count("Be  yourself.\n Everyone else"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("   "), 0);
    }

    #[test]
    fn test_char_count_is_scalar_values() {
        assert_eq!(char_count("café"), 4);
        assert_eq!(char_count("日本語"), 3);
    }

    #[test]
    fn test_counter_line_format() {
        assert_eq!(counter_line("Be yourself."), "2 words \u{2022} 12 characters");
    }

    #[test]
    fn test_truncate_short_string_unchanged() {
        assert_eq!(truncate_to_width("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_respects_display_width() {
        // Each CJK char is 2 columns wide
        let s = "日本語テスト";
        let out = truncate_to_width(s, 7);
        assert!(out.ends_with('\u{2026}'));
        // 3 chars (6 cols) + ellipsis (1 col) fits in 7
        assert_eq!(out, "日本語\u{2026}");
    }
}
