//! Leaf renderers.
//!
//! Each widget maps a value or a sample history to glyphs inside the area its
//! tile leaves after border and title. Widgets never fail: missing samples
//! render as blank cells and out-of-range values are clamped.

mod braille;
mod hchart;
mod hgauge;
mod log;
pub mod symbols;
mod text;
mod vchart;
mod vgauge;

pub use braille::{braille_dots, filled_braille, HBrailleChart, HBrailleFilledChart};
pub use hchart::HChart;
pub use hgauge::HGauge;
pub use log::Log;
pub use text::Text;
pub use vchart::VChart;
pub use vgauge::{ColorGradientVGauge, ColorRangeVGauge, VGauge};

/// Samples kept by [`VChart`].
pub const VCHART_CAPACITY: usize = 50;

/// Samples kept by [`HChart`] and the braille charts.
pub const HCHART_CAPACITY: usize = 500;

/// Lines kept by [`Log`].
pub const LOG_CAPACITY: usize = 50;

/// Clamp a percentage into `[0, 100]`; NaN counts as 0.
pub(crate) fn percent(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

/// Integer and fractional parts of a non-negative value.
pub(crate) fn split_fraction(value: f64) -> (usize, f64) {
    let whole = value.floor();
    (whole as usize, value - whole)
}
