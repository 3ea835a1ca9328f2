//! Greedy word wrapping for plain-text bodies, measured in terminal columns

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Fill `text` into lines of at most `width` display columns
///
/// Runs of whitespace, newlines included, collapse to a single space.
/// Words wider than `width` are split into pieces that fit. Wide glyphs
/// (CJK, most emoji) count as two columns.
pub fn wrap_text(text: &str, width: usize) -> String {
    let width = width.max(1);
    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in text.split_whitespace() {
        for piece in split_wide_word(word, width) {
            let piece_width = piece.width();
            if line_width > 0 && line_width + 1 + piece_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(piece);
            line_width += piece_width;
        }
    }

    if line_width > 0 || !line.is_empty() {
        lines.push(line);
    }

    lines.join("\n")
}

/// Break a word into pieces of at most `width` columns
///
/// A single glyph wider than `width` still gets its own piece.
fn split_wide_word(word: &str, width: usize) -> Vec<&str> {
    if word.width() <= width {
        return vec![word];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut current = 0;

    for (offset, ch) in word.char_indices() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current > 0 && current + ch_width > width {
            pieces.push(&word[start..offset]);
            start = offset;
            current = 0;
        }
        current += ch_width;
    }
    pieces.push(&word[start..]);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_columns(wrapped: &str) -> usize {
        wrapped.lines().map(UnicodeWidthStr::width).max().unwrap_or(0)
    }

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(wrap_text("See [1].", 80), "See [1].");
    }

    #[test]
    fn test_wraps_at_width() {
        let wrapped = wrap_text("the quick brown fox jumps over the lazy dog", 15);
        assert_eq!(wrapped, "the quick brown\nfox jumps over\nthe lazy dog");
        assert!(max_columns(&wrapped) <= 15);
    }

    #[test]
    fn test_collapses_whitespace_and_newlines() {
        assert_eq!(wrap_text("one\n\ntwo   three\tfour", 80), "one two three four");
    }

    #[test]
    fn test_breaks_long_words() {
        assert_eq!(wrap_text("abcdefghij xy", 4), "abcd\nefgh\nij\nxy");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(wrap_text("", 80), "");
        assert_eq!(wrap_text("   \n ", 80), "");
    }

    #[test]
    fn test_counts_columns_not_bytes() {
        assert_eq!(wrap_text("ééé ééé", 7), "ééé ééé");
        assert_eq!(wrap_text("ééé ééé", 6), "ééé\nééé");
    }

    #[test]
    fn test_cjk_words_stay_within_columns() {
        let word = "漢".repeat(30);
        let wrapped = wrap_text(&format!("{} {}", word, word), 80);

        // Each word is 60 columns, so they cannot share an 80-column line
        assert_eq!(wrapped.lines().count(), 2);
        assert!(max_columns(&wrapped) <= 80);
    }

    #[test]
    fn test_long_cjk_word_is_split_by_columns() {
        let wrapped = wrap_text(&"字".repeat(50), 80);
        let lines: Vec<&str> = wrapped.lines().collect();
        assert_eq!(lines, vec!["字".repeat(40), "字".repeat(10)]);
    }

    #[test]
    fn test_emoji_counted_as_wide() {
        let text = "🤖🤖🤖 👤👤👤 ok";
        let wrapped = wrap_text(text, 10);
        assert_eq!(wrapped, "🤖🤖🤖\n👤👤👤 ok");
        assert!(max_columns(&wrapped) <= 10);
    }

    #[test]
    fn test_mixed_text_never_exceeds_width() {
        let text = "Tokyo 東京 is large 大きい city 🌆 with many 人々 and trains 電車 everywhere "
            .repeat(6);
        let wrapped = wrap_text(&text, 80);
        assert!(wrapped.lines().count() > 1);
        assert!(max_columns(&wrapped) <= 80);
    }

    #[test]
    fn test_glyph_wider_than_width_gets_own_line() {
        assert_eq!(wrap_text("漢a", 1), "漢\na");
    }

    #[test]
    fn test_zero_width_does_not_loop() {
        assert_eq!(wrap_text("ab", 0), "a\nb");
    }
}
