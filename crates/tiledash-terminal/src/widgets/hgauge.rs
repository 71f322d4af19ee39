//! Horizontal gauge with eighth-cell resolution.
//!
//! ```text
//! <------------------------- width ------------------------->
//! <- label + 1 -><-- full cells --><partial><---- filler ---->
//! ```

use super::symbols::{hbar, FULL, HBAR};
use super::{percent, split_fraction};
use crate::measure;
use crate::surface::Surface;
use crate::tile::Render;
use tiledash_core::{interpolate, Rect, Rgb, StyleChain};

/// A horizontal bar showing a value in `[0, 100]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HGauge {
    value: f64,
    label: Option<String>,
}

impl Default for HGauge {
    fn default() -> Self {
        Self::new(100.0)
    }
}

impl HGauge {
    /// Create a gauge at `value` percent.
    #[must_use]
    pub fn new(value: impl Into<f64>) -> Self {
        Self {
            value: value.into(),
            label: None,
        }
    }

    /// Show `label` left of the bar, vertically centered.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Current value as set; clamped to `[0, 100]` only when drawn.
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Update the value.
    pub fn set_value(&mut self, value: impl Into<f64>) {
        self.value = value.into();
    }

    /// Label, if any.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Replace the label.
    pub fn set_label(&mut self, label: Option<String>) {
        self.label = label;
    }

    /// Colored cells of one bar row for `usable` columns.
    fn segments(bar_width: f64, usable: usize, high: Rgb, low: Rgb, text: Rgb) -> Vec<(Rgb, String)> {
        let (whole, frac) = split_fraction(bar_width);
        let full = whole.min(usable);
        let partial = full < usable;
        let filler = if partial { usable - full - 1 } else { 0 };
        let steps = full + filler;

        let mut segments: Vec<(Rgb, String)> = Vec::with_capacity(full + 2);
        for pos in 0..full {
            let color = interpolate(high, low, steps, pos);
            match segments.last_mut() {
                Some((last, run)) if *last == color => run.push(FULL),
                _ => segments.push((color, FULL.to_string())),
            }
        }
        if partial {
            let color = interpolate(high, low, steps, full.saturating_sub(1));
            let glyph = hbar((frac * 7.0) as usize);
            match segments.last_mut() {
                Some((last, run)) if *last == color => run.push(glyph),
                _ => segments.push((color, glyph.to_string())),
            }
            if filler > 0 {
                segments.push((text, measure::repeat(HBAR[0], filler)));
            }
        }
        segments
    }
}

impl Render for HGauge {
    fn render(&self, surface: &mut dyn Surface, area: Rect, style: &StyleChain<'_>) {
        let width = usize::from(area.width);
        let value = percent(self.value);
        let text = style.text();
        let label = self.label.as_deref().filter(|l| !l.is_empty());

        let label_width = label.map_or(0, |l| measure::width(l));
        if label.is_some() && label_width + 1 >= width {
            // no room for a bar: clipped label on the center row only
            let center = area.row + area.height / 2;
            surface.set_fg(text);
            for row in area.row..area.bottom() {
                let line = if row == center { label.unwrap_or("") } else { "" };
                surface.move_to(row, area.col);
                surface.print(&measure::fit(line, area.width));
            }
            return;
        }

        let usable = match label {
            Some(_) => width - label_width - 1,
            None => width,
        };
        let bar_width = usable as f64 * value / 100.0;
        let segments = Self::segments(bar_width, usable, style.high(), style.low(), text);

        let center = area.row + area.height / 2;
        let blank_label = " ".repeat(label_width + 1);
        for row in area.row..area.bottom() {
            surface.move_to(row, area.col);
            if let Some(label) = label {
                surface.set_fg(text);
                if row == center {
                    surface.print(label);
                    surface.print(" ");
                } else {
                    surface.print(&blank_label);
                }
            }
            for (color, run) in &segments {
                surface.set_fg(*color);
                surface.print(run);
            }
        }
    }

    fn kind(&self) -> &'static str {
        "hgauge"
    }
}
