//! RGB colors, HSV conversion and gradient interpolation.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Legacy 8-color ANSI palette, indexed 0-7.
const ANSI_PALETTE: [(u8, u8, u8); 8] = [
    (0, 0, 0),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (0, 0, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

/// An opaque 24-bit color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Neutral gray synthesized by the root tile when no color is configured.
    pub const DEFAULT_GRAY: Self = Self::new(128, 128, 128);
    /// White
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a color from its three channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (hex RGB) or `*HHSSVV` (hex HSV, each channel 00-FF).
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] for any other input.
    pub fn parse(color: &str) -> Result<Self, ColorError> {
        if let Some(digits) = color.strip_prefix('#') {
            let [r, g, b] = hex_triplet(digits).ok_or_else(|| invalid(color))?;
            return Ok(Self::new(r, g, b));
        }

        if let Some(digits) = color.strip_prefix('*') {
            let [h, s, v] = hex_triplet(digits).ok_or_else(|| invalid(color))?;
            return Ok(Self::from_hsv(
                f64::from(h) / 255.0,
                f64::from(s) / 255.0,
                f64::from(v) / 255.0,
            ));
        }

        Err(invalid(color))
    }

    /// Create a color from HSV floats in [0, 1].
    ///
    /// Channels are truncated, not rounded, when scaled to 0-255.
    #[must_use]
    pub fn from_hsv(h: f64, s: f64, v: f64) -> Self {
        let (r, g, b) = hsv_to_rgb(h, s.clamp(0.0, 1.0), v.clamp(0.0, 1.0));
        Self::new((r * 255.0) as u8, (g * 255.0) as u8, (b * 255.0) as u8)
    }

    /// Look up one of the 8 legacy ANSI colors.
    ///
    /// Indexed colors are deprecated in favour of RGB values.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidFormat`] if `index > 7`.
    pub fn from_ansi(index: u8) -> Result<Self, ColorError> {
        let &(r, g, b) = ANSI_PALETTE
            .get(usize::from(index))
            .ok_or_else(|| ColorError::InvalidFormat(format!("ansi index {index}")))?;
        tracing::warn!(index, "ANSI colors are deprecated, use RGB values");
        Ok(Self::new(r, g, b))
    }

    /// Convert to HSV floats in [0, 1].
    #[must_use]
    pub fn to_hsv(self) -> (f64, f64, f64) {
        rgb_to_hsv(
            f64::from(self.r) / 255.0,
            f64::from(self.g) / 255.0,
            f64::from(self.b) / 255.0,
        )
    }

    /// Channels as a tuple.
    #[must_use]
    pub const fn channels(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::DEFAULT_GRAY
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Interpolate between two colors in HSV space.
///
/// Step `pos` of a `steps`-long gradient: `pos == 0` yields `high` and
/// `pos == steps - 1` yields `low`. H, S and V are interpolated independently.
/// A single-step (or empty) gradient is just `high`.
#[must_use]
pub fn interpolate(high: Rgb, low: Rgb, steps: usize, pos: usize) -> Rgb {
    if steps <= 1 {
        return high;
    }
    let pos = pos.min(steps - 1);
    let k = pos as f64 / (steps - 1) as f64;

    let (h0, s0, v0) = high.to_hsv();
    let (h1, s1, v1) = low.to_hsv();
    let (r, g, b) = hsv_to_rgb(
        h0 + (h1 - h0) * k,
        s0 + (s1 - s0) * k,
        v0 + (v1 - v0) * k,
    );

    Rgb::new(to_channel(r), to_channel(g), to_channel(b))
}

fn to_channel(c: f64) -> u8 {
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}

fn invalid(color: &str) -> ColorError {
    ColorError::InvalidFormat(color.to_string())
}

/// Exactly six hex digits, as three bytes.
fn hex_triplet(digits: &str) -> Option<[u8; 3]> {
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
    Some([byte(0)?, byte(2)?, byte(4)?])
}

/// RGB floats in [0, 1] to HSV floats in [0, 1].
#[must_use]
pub fn rgb_to_hsv(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;
    if max == min {
        return (0.0, 0.0, v);
    }
    let delta = max - min;
    let s = delta / max;
    let rc = (max - r) / delta;
    let gc = (max - g) / delta;
    let bc = (max - b) / delta;
    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };
    ((h / 6.0).rem_euclid(1.0), s, v)
}

/// HSV floats in [0, 1] to RGB floats in [0, 1].
#[must_use]
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }
    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}
