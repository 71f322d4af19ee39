//! Vertical gauges.
//!
//! All three variants share the same bar shape and differ only in how rows
//! are colored. The bar height is `h * value / 100.5` rows, counted in
//! eighths from the bottom.

use super::symbols::{vbar, FULL};
use super::{percent, split_fraction};
use crate::measure;
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{interpolate, Rect, Rgb, StyleChain};

/// Draw a bottom-anchored bar for `value`, coloring row `dx` (counted from
/// the bottom) with `color(dx)`.
fn draw_bar(surface: &mut dyn Surface, area: Rect, value: f64, color: impl Fn(usize) -> Rgb) {
    let height = usize::from(area.height);
    let (whole, frac) = split_fraction(height as f64 * percent(value) / 100.5);
    let width = usize::from(area.width);
    let full = measure::repeat(FULL, width);
    let blank = " ".repeat(width);

    for dx in 0..height {
        let row = area.row + (height - dx - 1) as u16;
        surface.move_to(row, area.col);
        surface.set_fg(color(dx));
        if dx < whole {
            surface.print(&full);
        } else if dx == whole {
            surface.print(&measure::repeat(vbar((frac * 8.0) as usize), width));
        } else {
            surface.print(&blank);
        }
    }
}

/// A vertical bar colored with the high-to-low gradient, bottom row high.
#[derive(Debug, Clone, PartialEq)]
pub struct VGauge {
    value: f64,
}

impl Default for VGauge {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl VGauge {
    /// Create a gauge at `value` percent.
    #[must_use]
    pub fn new(value: impl Into<f64>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Update the value.
    pub fn set_value(&mut self, value: impl Into<f64>) {
        self.value = value.into();
    }
}

impl Render for VGauge {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let (high, low) = (style.high(), style.low());
        let steps = usize::from(area.height);
        draw_bar(surface, area, self.value, |dx| interpolate(high, low, steps, dx));
    }

    fn kind(&self) -> &'static str {
        "vgauge"
    }
}

/// A vertical bar in one color picked from threshold ranges.
///
/// ```
/// use tiledash_terminal::widgets::ColorRangeVGauge;
/// use tiledash_terminal::Rgb;
///
/// let green = Rgb::new(0, 200, 0);
/// let red = Rgb::new(200, 0, 0);
/// let gauge = ColorRangeVGauge::new(30, vec![(50.0, green), (100.0, red)]);
/// assert_eq!(gauge.color_for(&Rgb::DEFAULT_GRAY), green);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ColorRangeVGauge {
    value: f64,
    /// `(threshold, color)` pairs in ascending threshold order.
    colormap: Vec<(f64, Rgb)>,
}

impl ColorRangeVGauge {
    /// Create a gauge with an ascending colormap.
    #[must_use]
    pub fn new(value: impl Into<f64>, colormap: Vec<(f64, Rgb)>) -> Self {
        Self {
            value: value.into(),
            colormap,
        }
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Update the value.
    pub fn set_value(&mut self, value: impl Into<f64>) {
        self.value = value.into();
    }

    /// Threshold table.
    #[must_use]
    pub fn colormap(&self) -> &[(f64, Rgb)] {
        &self.colormap
    }

    /// Replace the threshold table.
    pub fn set_colormap(&mut self, colormap: Vec<(f64, Rgb)>) {
        self.colormap = colormap;
    }

    /// Color of the first threshold above the value, else the last entry,
    /// else `fallback`.
    #[must_use]
    pub fn color_for(&self, fallback: &Rgb) -> Rgb {
        let value = percent(self.value);
        self.colormap
            .iter()
            .find(|(threshold, _)| *threshold > value)
            .or_else(|| self.colormap.last())
            .map_or(*fallback, |(_, color)| *color)
    }
}

impl Render for ColorRangeVGauge {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let color = self.color_for(&style.text());
        draw_bar(surface, area, self.value, |_| color);
    }

    fn kind(&self) -> &'static str {
        "color_range_vgauge"
    }
}

/// A vertical bar in one color that slides along a gradient with the value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorGradientVGauge {
    value: f64,
    from: Option<Rgb>,
    to: Option<Rgb>,
}

impl ColorGradientVGauge {
    /// Create a gauge at `value` percent, graded from the tile's low color
    /// at 0 to its high color at 100.
    #[must_use]
    pub fn new(value: impl Into<f64>) -> Self {
        Self {
            value: value.into(),
            from: None,
            to: None,
        }
    }

    /// Use explicit gradient endpoints instead of the tile colors.
    #[must_use]
    pub const fn with_gradient(mut self, from: Rgb, to: Rgb) -> Self {
        self.from = Some(from);
        self.to = Some(to);
        self
    }

    /// Current value.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Update the value.
    pub fn set_value(&mut self, value: impl Into<f64>) {
        self.value = value.into();
    }

    /// Bar color given the resolved low and high colors.
    #[must_use]
    pub fn color_for(&self, low: Rgb, high: Rgb) -> Rgb {
        let from = self.from.unwrap_or(low);
        let to = self.to.unwrap_or(high);
        interpolate(from, to, 101, percent(self.value).round() as usize)
    }
}

impl Render for ColorGradientVGauge {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let color = self.color_for(style.low(), style.high());
        draw_bar(surface, area, self.value, |_| color);
    }

    fn kind(&self) -> &'static str {
        "color_gradient_vgauge"
    }
}
