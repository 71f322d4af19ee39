//! Horizontal filled chart: one column per sample, newest on the right.

use super::symbols::{vbar, FULL};
use super::{percent, split_fraction, HCHART_CAPACITY};
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{History, Rect, StyleChain};

/// An area chart over the most recent samples, filled from the bottom up.
#[derive(Debug, Clone, PartialEq)]
pub struct HChart {
    samples: History<f64>,
}

impl Default for HChart {
    fn default() -> Self {
        Self::new()
    }
}

impl HChart {
    /// An empty chart keeping the last 500 samples.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: History::new(HCHART_CAPACITY),
        }
    }

    /// Record a sample in `[0, 100]`.
    pub fn append(&mut self, sample: impl Into<f64>) {
        self.samples.push(sample.into());
    }

    /// Recorded samples, oldest first.
    #[must_use]
    pub const fn history(&self) -> &History<f64> {
        &self.samples
    }
}

/// Glyph for row `dx` of a column whose level sits `q` rows below the top.
fn column_cell(dx: usize, q: f64) -> char {
    let (top, frac) = split_fraction(q);
    if dx < top {
        ' '
    } else if dx == top {
        vbar(7 - ((frac * 8.0) as usize).min(7))
    } else {
        FULL
    }
}

impl Render for HChart {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let height = usize::from(area.height);
        let window = self.samples.recent(usize::from(area.width));
        let levels: Vec<Option<f64>> = (0..window.len())
            .map(|dy| window.get(dy).map(|&s| (1.0 - percent(s) / 100.0) * height as f64))
            .collect();

        surface.set_fg(style.text());
        let mut line = String::with_capacity(levels.len() * 3);
        for dx in 0..height {
            line.clear();
            line.extend(levels.iter().map(|level| level.map_or(' ', |q| column_cell(dx, q))));
            surface.move_to(area.row + dx as u16, area.col);
            surface.print(&line);
        }
    }

    fn kind(&self) -> &'static str {
        "hchart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CellBuffer;
    use tiledash_core::TileColors;

    fn draw(chart: &HChart, width: u16, height: u16) -> CellBuffer {
        let mut buf = CellBuffer::new(width, height);
        let colors = TileColors::new();
        chart.render(&mut buf, Rect::new(0, 0, width, height), &StyleChain::root(&colors));
        buf
    }

    #[test]
    fn test_column_cell_levels() {
        // q = 1.5: row 0 blank, row 1 half block, row 2 full
        assert_eq!(column_cell(0, 1.5), ' ');
        assert_eq!(column_cell(1, 1.5), '▄');
        assert_eq!(column_cell(2, 1.5), '█');
        // exact row boundary draws a full glyph on that row
        assert_eq!(column_cell(2, 2.0), '█');
    }

    #[test]
    fn test_newest_sample_on_the_right() {
        let mut chart = HChart::new();
        chart.append(100);
        chart.append(50);
        let buf = draw(&chart, 4, 2);
        // 50% of 2 rows: q = 1.0
        assert_eq!(buf.lines(), vec!["  █ ", "  ██"]);
    }

    #[test]
    fn test_missing_samples_blank() {
        let chart = HChart::new();
        let buf = draw(&chart, 3, 2);
        assert_eq!(buf.lines(), vec!["   ", "   "]);
    }

    #[test]
    fn test_zero_sample_draws_nothing_above_floor() {
        let mut chart = HChart::new();
        chart.append(0);
        let buf = draw(&chart, 1, 3);
        // q = 3.0 lies below the last row
        assert_eq!(buf.lines(), vec![" ", " ", " "]);
    }

    #[test]
    fn test_window_scrolls() {
        let mut chart = HChart::new();
        for v in [100, 100, 100, 0, 0] {
            chart.append(v);
        }
        let buf = draw(&chart, 3, 1);
        assert_eq!(buf.row_text(0), "█  ");
    }

    #[test]
    fn test_text_color() {
        let mut chart = HChart::new();
        chart.append(100);
        let buf = draw(&chart, 1, 1);
        assert_eq!(buf.fg(0, 0), Some(tiledash_core::Rgb::DEFAULT_GRAY));
    }

    #[test]
    fn test_capacity() {
        let mut chart = HChart::new();
        for i in 0..600 {
            chart.append(f64::from(i % 100));
        }
        assert_eq!(chart.history().len(), 500);
    }
}
