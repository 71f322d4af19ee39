//! In-memory surface.
//!
//! Uses `CompactString` to inline small strings (≤24 bytes), so a cell holding
//! a block or braille glyph never allocates.

use super::{Acquire, Surface};
use crate::config::DisplayConfig;
use crate::error::TuiError;
use compact_str::CompactString;
use tiledash_core::Rgb;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A single grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    /// The grapheme shown in this cell. Empty for the right half of a wide one.
    pub symbol: CompactString,
    /// Foreground color, `None` for the terminal default.
    pub fg: Option<Rgb>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            fg: None,
        }
    }
}

impl Cell {
    /// True for the trailing half of a double-width grapheme.
    #[must_use]
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    fn update(&mut self, symbol: &str, fg: Option<Rgb>) {
        self.symbol.clear();
        self.symbol.push_str(symbol);
        self.fg = fg;
    }
}

/// A grid of [`Cell`]s that records everything drawn on it.
#[derive(Debug, Clone)]
pub struct CellBuffer {
    cells: Vec<Cell>,
    width: u16,
    height: u16,
    cursor: (u16, u16),
    fg: Option<Rgb>,
    presented: usize,
}

impl CellBuffer {
    /// Create a blank buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let size = usize::from(width) * usize::from(height);
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
            cursor: (0, 0),
            fg: None,
            presented: 0,
        }
    }

    fn index(&self, row: u16, col: u16) -> Option<usize> {
        (row < self.height && col < self.width)
            .then(|| usize::from(row) * usize::from(self.width) + usize::from(col))
    }

    /// Cell at `(row, col)`.
    #[must_use]
    pub fn cell(&self, row: u16, col: u16) -> Option<&Cell> {
        self.index(row, col).map(|i| &self.cells[i])
    }

    /// Symbol at `(row, col)`, or `""` outside the grid.
    #[must_use]
    pub fn symbol(&self, row: u16, col: u16) -> &str {
        self.cell(row, col).map_or("", |c| c.symbol.as_str())
    }

    /// Foreground color at `(row, col)`.
    #[must_use]
    pub fn fg(&self, row: u16, col: u16) -> Option<Rgb> {
        self.cell(row, col).and_then(|c| c.fg)
    }

    /// The text of one row.
    #[must_use]
    pub fn row_text(&self, row: u16) -> String {
        if row >= self.height {
            return String::new();
        }
        let start = usize::from(row) * usize::from(self.width);
        self.cells[start..start + usize::from(self.width)]
            .iter()
            .map(|c| c.symbol.as_str())
            .collect()
    }

    /// Every row's text, top to bottom.
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        (0..self.height).map(|row| self.row_text(row)).collect()
    }

    /// Current cursor position as `(row, col)`.
    #[must_use]
    pub const fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    /// Color that the next print will use.
    #[must_use]
    pub const fn current_fg(&self) -> Option<Rgb> {
        self.fg
    }

    /// How many frames have been presented.
    #[must_use]
    pub const fn presented(&self) -> usize {
        self.presented
    }

    /// Reset every cell to a blank.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.update(" ", None);
        }
    }

    /// Resize the grid, clearing its content.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.cells.clear();
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }
}

impl Surface for CellBuffer {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn move_to(&mut self, row: u16, col: u16) {
        self.cursor = (row, col);
    }

    fn set_fg(&mut self, color: Rgb) {
        self.fg = Some(color);
    }

    fn print(&mut self, text: &str) {
        let (row, mut col) = self.cursor;
        for grapheme in text.graphemes(true) {
            let width = UnicodeWidthStr::width(grapheme) as u16;
            if width == 0 {
                continue;
            }
            if col.saturating_add(width) <= self.width {
                if let Some(i) = self.index(row, col) {
                    self.cells[i].update(grapheme, self.fg);
                    for k in 1..width {
                        if let Some(j) = self.index(row, col + k) {
                            self.cells[j].update("", self.fg);
                        }
                    }
                }
            }
            col = col.saturating_add(width);
        }
        self.cursor = (row, col);
    }

    fn reset_color(&mut self) {
        self.fg = None;
    }

    fn present(&mut self) -> Result<(), TuiError> {
        self.presented += 1;
        Ok(())
    }
}

impl Acquire for CellBuffer {
    fn acquire(config: &DisplayConfig) -> Result<Self, TuiError> {
        let (width, height) = config.fallback_size;
        Ok(Self::new(width, height))
    }
}
