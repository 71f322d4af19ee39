//! Terminal color capability detection and [`Rgb`] conversion.

use crossterm::style::Color as CrosstermColor;
use serde::Deserialize;
use std::str::FromStr;
use tiledash_core::Rgb;

/// How many colors the terminal can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// 24-bit color (COLORTERM=truecolor or 24bit).
    #[default]
    TrueColor,
    /// xterm 256-color palette.
    #[serde(rename = "256")]
    Color256,
    /// 16 ANSI colors.
    #[serde(rename = "16")]
    Color16,
    /// No color at all.
    Mono,
}

impl ColorMode {
    /// Detect from `COLORTERM` and `TERM`.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_with_env(
            std::env::var("COLORTERM").ok().as_deref(),
            std::env::var("TERM").ok().as_deref(),
        )
    }

    /// Detection from explicit variable values.
    #[must_use]
    pub fn detect_with_env(colorterm: Option<&str>, term: Option<&str>) -> Self {
        if matches!(colorterm, Some("truecolor" | "24bit")) {
            return Self::TrueColor;
        }

        match term {
            Some(t) if t.contains("256color") => Self::Color256,
            Some("dumb") | None => Self::Mono,
            Some(_) => Self::Color16,
        }
    }

    /// Map an [`Rgb`] to the closest color this mode can show.
    ///
    /// `Mono` maps every color to `Reset` so the terminal default is used.
    #[must_use]
    pub fn to_crossterm(self, color: Rgb) -> CrosstermColor {
        let (r, g, b) = color.channels();
        match self {
            Self::TrueColor => CrosstermColor::Rgb { r, g, b },
            Self::Color256 => CrosstermColor::AnsiValue(rgb_to_256(r, g, b)),
            Self::Color16 => rgb_to_16(r, g, b),
            Self::Mono => CrosstermColor::Reset,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "truecolor" | "24bit" => Ok(Self::TrueColor),
            "256" => Ok(Self::Color256),
            "16" => Ok(Self::Color16),
            "mono" | "none" => Ok(Self::Mono),
            other => Err(format!("unknown color mode {other:?}")),
        }
    }
}

/// Index into the xterm 256-color palette.
fn rgb_to_256(r: u8, g: u8, b: u8) -> u8 {
    if r == g && g == b {
        // 24-step gray ramp at 232..=255, with the cube's corners for the extremes
        return match r {
            0..=7 => 16,
            249..=255 => 231,
            v => 232 + ((v - 8) / 10).min(23),
        };
    }
    let level = |c: u8| ((u16::from(c) * 5 + 127) / 255) as u8;
    16 + 36 * level(r) + 6 * level(g) + level(b)
}

/// Nearest of the 16 ANSI colors, picking the bright variant for light colors.
fn rgb_to_16(r: u8, g: u8, b: u8) -> CrosstermColor {
    let luma = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    let bright = luma > 127;
    let half = r.max(g).max(b) / 2;

    match (r > half, g > half, b > half, bright) {
        (false, false, false, false) => CrosstermColor::Black,
        (false, false, false, true) => CrosstermColor::DarkGrey,
        (true, false, false, false) => CrosstermColor::DarkRed,
        (true, false, false, true) => CrosstermColor::Red,
        (false, true, false, false) => CrosstermColor::DarkGreen,
        (false, true, false, true) => CrosstermColor::Green,
        (true, true, false, false) => CrosstermColor::DarkYellow,
        (true, true, false, true) => CrosstermColor::Yellow,
        (false, false, true, false) => CrosstermColor::DarkBlue,
        (false, false, true, true) => CrosstermColor::Blue,
        (true, false, true, false) => CrosstermColor::DarkMagenta,
        (true, false, true, true) => CrosstermColor::Magenta,
        (false, true, true, false) => CrosstermColor::DarkCyan,
        (false, true, true, true) => CrosstermColor::Cyan,
        (true, true, true, false) => CrosstermColor::Grey,
        (true, true, true, true) => CrosstermColor::White,
    }
}
