//! Error types for tiledash-core.

use thiserror::Error;

/// Errors raised while parsing or naming colors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// Not `#RRGGBB`, not `*HHSSVV`, or an ANSI index outside 0-7.
    #[error("invalid color format: {0:?}")]
    InvalidFormat(String),

    /// Unknown color slot name.
    #[error("invalid color name: {0:?} (expected text_color, border_color, color_high or color_low)")]
    InvalidName(String),
}
