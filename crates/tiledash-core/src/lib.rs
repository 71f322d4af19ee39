//! Core types for tiledash terminal dashboards.
//!
//! This crate holds everything that does not touch a terminal:
//! - Color representation: [`Rgb`], HSV conversion and [`interpolate`]
//! - Geometry: [`Rect`] with row/column splitting
//! - Sample storage: [`History`] with a "most recent N" [`Window`]
//! - Styling: [`ColorSlot`], [`TileColors`] and the [`StyleChain`] walk

mod color;
mod error;
mod geometry;
mod history;
mod style;

pub use color::{hsv_to_rgb, interpolate, rgb_to_hsv, Rgb};
pub use error::ColorError;
pub use geometry::Rect;
pub use history::{History, Window};
pub use style::{ColorSlot, StyleChain, TileColors};
