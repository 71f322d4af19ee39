//! Drawing surfaces.
//!
//! Every tile renders through the [`Surface`] trait: a cursor, a foreground
//! color and text. [`TerminalSurface`] turns those calls into crossterm
//! commands, [`CellBuffer`] records them into a grid for tests and snapshots.

mod cell_buffer;
mod terminal;

pub use cell_buffer::{Cell, CellBuffer};
pub use terminal::TerminalSurface;

use crate::config::DisplayConfig;
use crate::error::TuiError;
use tiledash_core::Rgb;

/// A grid of character cells that can be drawn on.
///
/// Drawing calls never fail; the first error of a frame is reported by
/// [`Surface::present`].
pub trait Surface {
    /// Width in columns.
    fn width(&self) -> u16;

    /// Height in rows.
    fn height(&self) -> u16;

    /// Start a new frame. Terminal-backed surfaces re-read their size here.
    fn begin_frame(&mut self) {}

    /// Move the cursor to `(row, col)`.
    fn move_to(&mut self, row: u16, col: u16);

    /// Foreground color for subsequent text.
    fn set_fg(&mut self, color: Rgb);

    /// Emit text at the cursor, advancing it.
    fn print(&mut self, text: &str);

    /// Go back to the terminal's default color.
    fn reset_color(&mut self);

    /// Flush the frame.
    fn present(&mut self) -> Result<(), TuiError>;
}

/// Surfaces a dashboard can open on its own the first time it is displayed.
pub trait Acquire: Surface + Sized {
    /// Open the surface.
    fn acquire(config: &DisplayConfig) -> Result<Self, TuiError>;
}
