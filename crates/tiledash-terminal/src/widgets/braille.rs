//! Braille charts: two samples per cell, four dot rows per cell.
//!
//! Column `dy` of an area `w` wide shows samples `2dy` and `2dy + 1` of the
//! newest `2w`. Each sample falls `q = (1 - v / 100) * h` rows below the top;
//! `floor(q)` picks the cell row and `floor(frac(q) * 4)` the dot row.

use super::symbols::{braille, BRAILLE_FILL_LEFT, BRAILLE_FILL_RIGHT, BRAILLE_LEFT, BRAILLE_RIGHT};
use super::{percent, split_fraction, HCHART_CAPACITY};
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{History, Rect, StyleChain};

/// Braille cell with one dot raised in each column: `left` and `right` are
/// dot rows `0..4` from the top, `None` leaves that column empty.
///
/// ```
/// use tiledash_terminal::widgets::braille_dots;
///
/// assert_eq!(braille_dots(Some(0), None), '⠁');
/// assert_eq!(braille_dots(Some(3), Some(3)), '⣀');
/// ```
#[must_use]
pub fn braille_dots(left: Option<usize>, right: Option<usize>) -> char {
    let left = left.map_or(0, |i| BRAILLE_LEFT[i.min(3)]);
    let right = right.map_or(0, |i| BRAILLE_RIGHT[i.min(3)]);
    braille(left | right)
}

/// Braille cell with the lowest `left` and `right` of the top three dot rows
/// raised in each column (counts `0..=3`).
#[must_use]
pub fn filled_braille(left: usize, right: usize) -> char {
    let left = BRAILLE_FILL_LEFT[..left.min(3)].iter().fold(0, |m, d| m | d);
    let right = BRAILLE_FILL_RIGHT[..right.min(3)].iter().fold(0, |m, d| m | d);
    braille(left | right)
}

/// Levels (`q`) of the sample pairs behind each column, `None` where either
/// sample is missing.
fn pair_levels(samples: &History<f64>, area: Rect) -> Vec<Option<(f64, f64)>> {
    let height = f64::from(area.height);
    let level = |s: f64| (1.0 - percent(s) / 100.0) * height;
    let window = samples.recent(usize::from(area.width) * 2);
    (0..usize::from(area.width))
        .map(|dy| {
            let left = window.get(2 * dy)?;
            let right = window.get(2 * dy + 1)?;
            Some((level(*left), level(*right)))
        })
        .collect()
}

fn draw_cells(
    surface: &mut dyn Surface,
    area: Rect,
    style: &StyleChain<'_>,
    levels: &[Option<(f64, f64)>],
    cell: impl Fn(usize, f64, f64) -> char,
) {
    surface.set_fg(style.text());
    let mut line = String::with_capacity(levels.len() * 3);
    for dx in 0..usize::from(area.height) {
        line.clear();
        line.extend(levels.iter().map(|pair| pair.map_or(' ', |(l, r)| cell(dx, l, r))));
        surface.move_to(area.row + dx as u16, area.col);
        surface.print(&line);
    }
}

/// Dot row of a sample at level `q` if it falls in cell row `dx`.
fn dot_row(dx: usize, q: f64) -> Option<usize> {
    let (row, frac) = split_fraction(q);
    (row == dx).then(|| (frac * 4.0) as usize)
}

/// Dots to raise for a sample at level `q` in cell row `dx` of a filled chart.
fn fill_count(dx: usize, q: f64) -> usize {
    let (row, frac) = split_fraction(q);
    if row == dx {
        3 - ((frac * 4.0) as usize).min(3)
    } else if dx as f64 > q {
        3
    } else {
        0
    }
}

/// A line chart drawn with single braille dots.
#[derive(Debug, Clone, PartialEq)]
pub struct HBrailleChart {
    samples: History<f64>,
}

impl Default for HBrailleChart {
    fn default() -> Self {
        Self::new()
    }
}

impl HBrailleChart {
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

impl Render for HBrailleChart {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let levels = pair_levels(&self.samples, area);
        draw_cells(surface, area, style, &levels, |dx, l, r| {
            match (dot_row(dx, l), dot_row(dx, r)) {
                (None, None) => ' ',
                (left, right) => braille_dots(left, right),
            }
        });
    }

    fn kind(&self) -> &'static str {
        "hbraille"
    }
}

/// An area chart drawn with braille dots, filled below the line.
#[derive(Debug, Clone, PartialEq)]
pub struct HBrailleFilledChart {
    samples: History<f64>,
}

impl Default for HBrailleFilledChart {
    fn default() -> Self {
        Self::new()
    }
}

impl HBrailleFilledChart {
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

impl Render for HBrailleFilledChart {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let levels = pair_levels(&self.samples, area);
        draw_cells(surface, area, style, &levels, |dx, l, r| {
            filled_braille(fill_count(dx, l), fill_count(dx, r))
        });
    }

    fn kind(&self) -> &'static str {
        "hbraille_filled"
    }
}
