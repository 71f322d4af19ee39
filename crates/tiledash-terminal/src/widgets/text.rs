//! Static multi-line text.

use crate::measure;
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{Rect, StyleChain};

/// A block of text. Shows the last lines that fit, top-aligned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Text {
    text: String,
}

impl Text {
    /// Create a text widget.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl Render for Text {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let lines: Vec<&str> = self.text.lines().collect();
        let skip = lines.len().saturating_sub(usize::from(area.height));
        let mut visible = lines[skip..].iter();

        surface.set_fg(style.text());
        for row in area.row..area.bottom() {
            let line = visible.next().copied().unwrap_or("");
            surface.move_to(row, area.col);
            surface.print(&measure::fit(line, area.width));
        }
    }

    fn kind(&self) -> &'static str {
        "text"
    }
}
