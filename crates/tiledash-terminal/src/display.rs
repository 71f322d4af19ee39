//! Frame driver.
//!
//! One frame is a single synchronous pass: size the root rect, walk the tile
//! tree, park the cursor and flush everything in one write.

use crate::config::DisplayConfig;
use crate::error::TuiError;
use crate::surface::{Acquire, Surface, TerminalSurface};
use crate::tile::Tile;
use std::io::Stdout;
use tiledash_core::Rect;

/// Draw `root` onto `surface` and present the frame.
///
/// The last `config.reserved_rows` rows are left untouched and the cursor is
/// parked `config.park_offset` rows above the bottom with the color reset.
pub fn render_frame(
    root: &mut Tile,
    surface: &mut dyn Surface,
    config: &DisplayConfig,
) -> Result<(), TuiError> {
    surface.begin_frame();
    let (width, height) = (surface.width(), surface.height());
    let span = tracing::debug_span!("render_frame", width, height);
    let _enter = span.enter();

    let area = Rect::new(0, 0, width, height.saturating_sub(config.reserved_rows));
    root.cache_root_defaults();
    root.render(surface, area, None);

    surface.move_to(height.saturating_sub(config.park_offset), 0);
    surface.reset_color();
    surface.present()
}

/// A tile tree bound to the surface it is displayed on.
///
/// The surface is opened on the first [`Dashboard::display`] unless one was
/// installed with [`Dashboard::with_surface`] or [`Dashboard::attach`].
#[derive(Debug)]
pub struct Dashboard<S: Surface = TerminalSurface<Stdout>> {
    root: Tile,
    config: DisplayConfig,
    surface: Option<S>,
}

impl<S: Surface> Dashboard<S> {
    /// Wrap `root` with the default configuration.
    #[must_use]
    pub fn new(root: Tile) -> Self {
        Self::with_config(root, DisplayConfig::default())
    }

    /// Wrap `root` with `config`.
    #[must_use]
    pub const fn with_config(root: Tile, config: DisplayConfig) -> Self {
        Self {
            root,
            config,
            surface: None,
        }
    }

    /// Display on `surface` instead of acquiring one.
    #[must_use]
    pub fn with_surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Replace the surface, returning the previous one.
    pub fn attach(&mut self, surface: S) -> Option<S> {
        self.surface.replace(surface)
    }

    /// Root tile.
    #[must_use]
    pub const fn root(&self) -> &Tile {
        &self.root
    }

    /// Root tile, for updating values between frames.
    pub fn root_mut(&mut self) -> &mut Tile {
        &mut self.root
    }

    /// Display configuration.
    #[must_use]
    pub const fn config(&self) -> &DisplayConfig {
        &self.config
    }

    /// The surface, once acquired or attached.
    #[must_use]
    pub const fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Take the surface back out.
    pub fn detach(&mut self) -> Option<S> {
        self.surface.take()
    }
}

impl<S: Acquire> Dashboard<S> {
    /// Render one frame, opening the surface first if needed.
    pub fn display(&mut self) -> Result<(), TuiError> {
        if self.surface.is_none() {
            tracing::debug!("acquiring display surface");
            self.surface = Some(S::acquire(&self.config)?);
        }
        match self.surface.as_mut() {
            Some(surface) => render_frame(&mut self.root, surface, &self.config),
            None => Err(TuiError::TerminalNotAvailable),
        }
    }
}
