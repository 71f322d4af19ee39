//! Display-width aware clipping and padding.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width of `text` in terminal columns.
pub(crate) fn width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Longest prefix of `text` that fits in `max` columns, and its width.
///
/// Never splits a grapheme cluster.
pub(crate) fn clip(text: &str, max: usize) -> (&str, usize) {
    let mut used = 0;
    for (offset, grapheme) in text.grapheme_indices(true) {
        let w = UnicodeWidthStr::width(grapheme);
        if used + w > max {
            return (&text[..offset], used);
        }
        used += w;
    }
    (text, used)
}

/// `text` clipped to `columns` and right-padded with spaces to exactly that width.
pub(crate) fn fit(text: &str, columns: u16) -> String {
    let columns = usize::from(columns);
    let (clipped, used) = clip(text, columns);
    let mut line = String::with_capacity(clipped.len() + columns - used);
    line.push_str(clipped);
    line.extend(std::iter::repeat(' ').take(columns - used));
    line
}

/// `count` copies of `glyph`.
pub(crate) fn repeat(glyph: char, count: usize) -> String {
    std::iter::repeat(glyph).take(count).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_ascii() {
        assert_eq!(clip("hello", 3), ("hel", 3));
        assert_eq!(clip("hi", 5), ("hi", 2));
    }

    #[test]
    fn test_clip_wide_never_splits() {
        assert_eq!(clip("日本", 3), ("日", 2));
    }

    #[test]
    fn test_fit_pads_and_clips() {
        assert_eq!(fit("ab", 4), "ab  ");
        assert_eq!(fit("abcdef", 4), "abcd");
        assert_eq!(fit("", 2), "  ");
        assert_eq!(fit("日本", 3), "日 ");
    }

    #[test]
    fn test_repeat() {
        assert_eq!(repeat('─', 3), "───");
        assert_eq!(repeat('x', 0), "");
    }
}
