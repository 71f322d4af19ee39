//! Block, braille and box-drawing glyph tables.
//!
//! All lookups are direct array indexing; callers clamp their index to the
//! table length.

/// Left-anchored horizontal eighths, thinnest first: ▏▎▍▌▋▊▉█
pub const HBAR: [char; 8] = ['▏', '▎', '▍', '▌', '▋', '▊', '▉', '█'];

/// Bottom-anchored vertical eighths, thinnest first: ▁▂▃▄▅▆▇█
pub const VBAR: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Full block.
pub const FULL: char = '█';

/// Base of the Unicode braille block (no dots raised).
pub const BRAILLE_BASE: u32 = 0x2800;

/// Left-column braille dots, top to bottom.
pub const BRAILLE_LEFT: [u32; 4] = [0x01, 0x02, 0x04, 0x40];

/// Right-column braille dots, top to bottom.
pub const BRAILLE_RIGHT: [u32; 4] = [0x08, 0x10, 0x20, 0x80];

/// Left-column dots accumulated by filled charts, bottom-most of the top three first.
pub const BRAILLE_FILL_LEFT: [u32; 3] = [0x04, 0x02, 0x01];

/// Right-column counterpart of [`BRAILLE_FILL_LEFT`].
pub const BRAILLE_FILL_RIGHT: [u32; 3] = [0x20, 0x10, 0x08];

/// Box-drawing set used for tile borders: ┌─┐│└─┘
pub mod border {
    /// Top-left corner
    pub const TOP_LEFT: char = '┌';
    /// Top-right corner
    pub const TOP_RIGHT: char = '┐';
    /// Bottom-left corner
    pub const BOTTOM_LEFT: char = '└';
    /// Bottom-right corner
    pub const BOTTOM_RIGHT: char = '┘';
    /// Horizontal edge
    pub const HORIZONTAL: char = '─';
    /// Vertical edge
    pub const VERTICAL: char = '│';
}

/// Glyph for `mask` raised dots. A zero mask is the blank braille cell.
#[must_use]
pub fn braille(mask: u32) -> char {
    char::from_u32(BRAILLE_BASE | (mask & 0xFF)).unwrap_or(' ')
}

/// Horizontal partial glyph for `index`, clamped to the table.
#[must_use]
pub fn hbar(index: usize) -> char {
    HBAR[index.min(HBAR.len() - 1)]
}

/// Vertical partial glyph for `index`, clamped to the table.
#[must_use]
pub fn vbar(index: usize) -> char {
    VBAR[index.min(VBAR.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bars_end_with_full_block() {
        assert_eq!(HBAR[7], FULL);
        assert_eq!(VBAR[7], FULL);
    }

    #[test]
    fn test_bar_lookup_clamps() {
        assert_eq!(hbar(99), FULL);
        assert_eq!(vbar(0), '▁');
    }

    #[test]
    fn test_braille_masks() {
        assert_eq!(braille(0), '\u{2800}');
        assert_eq!(braille(0xFF), '⣿');
        let left: u32 = BRAILLE_LEFT.iter().sum();
        let right: u32 = BRAILLE_RIGHT.iter().sum();
        assert_eq!(left | right, 0xFF);
        assert_eq!(left & right, 0);
    }

    #[test]
    fn test_fill_masks_are_top_three_dots() {
        assert_eq!(BRAILLE_FILL_LEFT.iter().sum::<u32>(), 0x07);
        assert_eq!(BRAILLE_FILL_RIGHT.iter().sum::<u32>(), 0x38);
    }
}
