//! Vertical chart: one horizontal bar per sample, scrolling upward.

use super::symbols::{hbar, FULL};
use super::{percent, split_fraction, VCHART_CAPACITY};
use crate::measure;
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{History, Rect, StyleChain};

/// A chart of the last 50 samples, one per row.
///
/// Rows are addressed against the full 50-slot buffer: the bottom row of the
/// area shows buffer position 49, the row above it 48, and so on. Until the
/// buffer has filled that far the rows stay blank.
#[derive(Debug, Clone, PartialEq)]
pub struct VChart {
    samples: History<f64>,
}

impl Default for VChart {
    fn default() -> Self {
        Self::new()
    }
}

impl VChart {
    /// An empty chart.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: History::new(VCHART_CAPACITY),
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

    fn bar(sample: f64, width: usize) -> String {
        let (whole, frac) = split_fraction(percent(sample) * width as f64 / 100.0);
        if whole >= width {
            return measure::repeat(FULL, width);
        }
        let mut bar = measure::repeat(FULL, whole);
        bar.push(hbar((frac * 8.0) as usize));
        bar.extend(std::iter::repeat(' ').take(width - whole - 1));
        bar
    }
}

impl Render for VChart {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let height = usize::from(area.height);
        let width = usize::from(area.width);
        let blank = " ".repeat(width);

        surface.set_fg(style.text());
        for dx in 0..height {
            let sample = (VCHART_CAPACITY + dx)
                .checked_sub(height)
                .and_then(|index| self.samples.get(index));
            surface.move_to(area.row + dx as u16, area.col);
            match sample {
                Some(&sample) => surface.print(&Self::bar(sample, width)),
                None => surface.print(&blank),
            }
        }
    }

    fn kind(&self) -> &'static str {
        "vchart"
    }
}
