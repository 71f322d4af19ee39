//! Error types for tiledash-terminal.

use thiserror::Error;
use tiledash_core::ColorError;

/// Errors that can occur while configuring or presenting a dashboard.
#[derive(Debug, Error)]
pub enum TuiError {
    /// I/O error writing the frame, querying the size or entering a session.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid color name or value.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// No usable terminal size could be determined.
    #[error("Terminal not available")]
    TerminalNotAvailable,
}
