//! Display configuration.

use crate::color::ColorMode;
use serde::Deserialize;

/// Environment variable that forces a [`ColorMode`].
pub const COLOR_ENV: &str = "TILEDASH_COLOR";

/// How a dashboard maps onto the terminal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Color mode (auto-detected if not specified).
    pub color_mode: Option<ColorMode>,
    /// Rows left untouched at the bottom of the terminal.
    pub reserved_rows: u16,
    /// Row, counted from the bottom, where the cursor is parked after a frame.
    pub park_offset: u16,
    /// `(width, height)` used when the terminal size cannot be queried.
    pub fallback_size: (u16, u16),
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            color_mode: None,
            reserved_rows: 1,
            park_offset: 3,
            fallback_size: (80, 24),
        }
    }
}

impl DisplayConfig {
    /// Defaults, with the color mode taken from `TILEDASH_COLOR` when it is set
    /// to a known mode.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_env_color(std::env::var(COLOR_ENV).ok().as_deref())
    }

    fn with_env_color(mut self, value: Option<&str>) -> Self {
        if let Some(value) = value {
            match value.parse::<ColorMode>() {
                Ok(mode) => self.color_mode = Some(mode),
                Err(err) => tracing::warn!(%err, "ignoring {COLOR_ENV}"),
            }
        }
        self
    }

    /// Force a color mode.
    #[must_use]
    pub const fn with_color_mode(mut self, mode: ColorMode) -> Self {
        self.color_mode = Some(mode);
        self
    }

    /// Rows left untouched at the bottom.
    #[must_use]
    pub const fn with_reserved_rows(mut self, rows: u16) -> Self {
        self.reserved_rows = rows;
        self
    }

    /// Cursor parking row, counted from the bottom.
    #[must_use]
    pub const fn with_park_offset(mut self, offset: u16) -> Self {
        self.park_offset = offset;
        self
    }

    /// Size used when the terminal cannot be queried.
    #[must_use]
    pub const fn with_fallback_size(mut self, width: u16, height: u16) -> Self {
        self.fallback_size = (width, height);
        self
    }

    /// The configured color mode, or the detected one.
    #[must_use]
    pub fn resolved_color_mode(&self) -> ColorMode {
        self.color_mode.unwrap_or_else(ColorMode::detect)
    }
}
