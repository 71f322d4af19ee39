//! Tile-based terminal dashboards.
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::doc_markdown)]
//!
//! A dashboard is a tree of [`Tile`]s. Split tiles divide their rectangle
//! evenly between children (side by side with [`Tile::hsplit`], stacked with
//! [`Tile::vsplit`]); leaf tiles hold a widget that draws gauges, charts, logs
//! or text with Unicode block and braille glyphs. Every tile may carry a
//! border, a title and color overrides that its descendants inherit.
//!
//! Frames are drawn in one synchronous pass through the [`Surface`] trait and
//! flushed with a single write. [`TerminalSurface`] targets a real terminal
//! through crossterm; [`CellBuffer`] records frames for tests.
//!
//! # Example
//!
//! ```
//! use tiledash_terminal::widgets::{HGauge, VChart};
//! use tiledash_terminal::{CellBuffer, Dashboard, Rgb, Tile};
//!
//! let root = Tile::hsplit([
//!     Tile::new(HGauge::new(50)).with_title("load"),
//!     Tile::new(VChart::new()).with_title("history"),
//! ])
//! .with_text_color(Rgb::new(0, 200, 0));
//!
//! let mut dash = Dashboard::new(root).with_surface(CellBuffer::new(40, 10));
//! for v in (10..=90).step_by(10) {
//!     if let Some(chart) = dash.root_mut().at_mut(&[1]).and_then(|t| t.content_mut::<VChart>()) {
//!         chart.append(v);
//!     }
//! }
//! dash.display()?;
//! # Ok::<(), tiledash_terminal::TuiError>(())
//! ```

mod color;
mod config;
mod display;
mod error;
mod measure;
mod session;
mod surface;
mod tile;
pub mod widgets;

pub use color::ColorMode;
pub use config::{DisplayConfig, COLOR_ENV};
pub use display::{render_frame, Dashboard};
pub use error::TuiError;
pub use session::{Session, SessionOptions};
pub use surface::{Acquire, Cell, CellBuffer, Surface, TerminalSurface};
pub use tile::{AsAny, Orientation, Render, Tile};

// Re-export core types for convenience
pub use tiledash_core::{
    interpolate, ColorError, ColorSlot, History, Rect, Rgb, StyleChain, TileColors, Window,
};
