//! Crossterm-backed surface.
//!
//! All drawing calls queue crossterm commands into one byte buffer per frame;
//! [`Surface::present`] hands the whole frame to the writer in a single
//! `write_all` and flushes.

use super::{Acquire, Surface};
use crate::color::ColorMode;
use crate::config::DisplayConfig;
use crate::error::TuiError;
use crossterm::cursor::MoveTo;
use crossterm::style::{Print, ResetColor, SetForegroundColor};
use crossterm::{Command, QueueableCommand};
use std::io::{self, Stdout, Write};
use tiledash_core::Rgb;

/// A surface that writes escape sequences to `W`.
#[derive(Debug)]
pub struct TerminalSurface<W: Write> {
    out: W,
    frame: Vec<u8>,
    width: u16,
    height: u16,
    color_mode: ColorMode,
    /// Size to fall back to when the terminal cannot be queried. `None` pins
    /// the size given at construction.
    fallback: Option<(u16, u16)>,
    last_fg: Option<Rgb>,
    error: Option<io::Error>,
}

impl<W: Write> TerminalSurface<W> {
    /// Open a surface sized to the current terminal.
    ///
    /// Falls back to `config.fallback_size` when the size cannot be queried.
    pub fn new(out: W, config: &DisplayConfig) -> Result<Self, TuiError> {
        let (width, height) = query_size(config.fallback_size)?;
        Ok(Self {
            out,
            frame: Vec::with_capacity(usize::from(width) * usize::from(height) * 4),
            width,
            height,
            color_mode: config.resolved_color_mode(),
            fallback: Some(config.fallback_size),
            last_fg: None,
            error: None,
        })
    }

    /// A surface with a fixed size that never queries the terminal.
    #[must_use]
    pub fn with_size(out: W, width: u16, height: u16, color_mode: ColorMode) -> Self {
        Self {
            out,
            frame: Vec::new(),
            width,
            height,
            color_mode,
            fallback: None,
            last_fg: None,
            error: None,
        }
    }

    /// Color mode in use.
    #[must_use]
    pub const fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    /// Bytes queued for the current frame.
    #[must_use]
    pub fn pending(&self) -> &[u8] {
        &self.frame
    }

    /// The underlying writer.
    #[must_use]
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// Consume the surface and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn queue(&mut self, command: impl Command) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.frame.queue(command) {
            self.error = Some(err);
        }
    }
}

fn query_size(fallback: (u16, u16)) -> Result<(u16, u16), TuiError> {
    match crossterm::terminal::size() {
        Ok((w, h)) if w > 0 && h > 0 => Ok((w, h)),
        result => {
            tracing::debug!(?result, ?fallback, "terminal size unavailable");
            if fallback.0 == 0 || fallback.1 == 0 {
                Err(TuiError::TerminalNotAvailable)
            } else {
                Ok(fallback)
            }
        }
    }
}

impl<W: Write> Surface for TerminalSurface<W> {
    fn width(&self) -> u16 {
        self.width
    }

    fn height(&self) -> u16 {
        self.height
    }

    fn begin_frame(&mut self) {
        let Some(fallback) = self.fallback else {
            return;
        };
        if let Ok((width, height)) = query_size(fallback) {
            if (width, height) != (self.width, self.height) {
                tracing::debug!(width, height, "terminal resized");
            }
            self.width = width;
            self.height = height;
        }
    }

    fn move_to(&mut self, row: u16, col: u16) {
        self.queue(MoveTo(col, row));
    }

    fn set_fg(&mut self, color: Rgb) {
        if self.last_fg == Some(color) {
            return;
        }
        self.last_fg = Some(color);
        let color = self.color_mode.to_crossterm(color);
        self.queue(SetForegroundColor(color));
    }

    fn print(&mut self, text: &str) {
        if !text.is_empty() {
            self.queue(Print(text));
        }
    }

    fn reset_color(&mut self) {
        self.last_fg = None;
        self.queue(ResetColor);
    }

    fn present(&mut self) -> Result<(), TuiError> {
        self.last_fg = None;
        if let Some(err) = self.error.take() {
            self.frame.clear();
            return Err(err.into());
        }
        let bytes = self.frame.len();
        let result = self
            .out
            .write_all(&self.frame)
            .and_then(|()| self.out.flush());
        self.frame.clear();
        result?;
        tracing::trace!(bytes, "frame presented");
        Ok(())
    }
}

impl Acquire for TerminalSurface<Stdout> {
    fn acquire(config: &DisplayConfig) -> Result<Self, TuiError> {
        Self::new(io::stdout(), config)
    }
}
