//! Scrolling log pane.

use super::LOG_CAPACITY;
use crate::measure;
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{interpolate, History, Rect, StyleChain};

/// The most recent lines of a log, newest at the bottom.
#[derive(Debug, Clone, PartialEq)]
pub struct Log {
    lines: History<String>,
    gradient: bool,
}

impl Default for Log {
    fn default() -> Self {
        Self::new()
    }
}

impl Log {
    /// An empty log keeping the last 50 lines.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: History::new(LOG_CAPACITY),
            gradient: false,
        }
    }

    /// Color rows with the high-to-low gradient instead of the text color.
    #[must_use]
    pub fn with_gradient(mut self, gradient: bool) -> Self {
        self.gradient = gradient;
        self
    }

    /// Add a line at the bottom, dropping the oldest once full.
    pub fn append(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// Stored lines, oldest first.
    #[must_use]
    pub const fn lines(&self) -> &History<String> {
        &self.lines
    }
}

impl Render for Log {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let height = usize::from(area.height);
        let window = self.lines.recent(height);
        let (text, high, low) = (style.text(), style.high(), style.low());

        for (dx, row) in (area.row..area.bottom()).enumerate() {
            let line = window.get(dx).map_or("", String::as_str);
            let color = if self.gradient {
                interpolate(high, low, height, dx)
            } else {
                text
            };
            surface.set_fg(color);
            surface.move_to(row, area.col);
            surface.print(&measure::fit(line, area.width));
        }
    }

    fn kind(&self) -> &'static str {
        "log"
    }
}
