//! Scoped terminal setup.
//!
//! A [`Session`] switches to the alternate screen and hides the cursor while
//! it is alive and puts both back when dropped, including during unwinding.

use crate::error::TuiError;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute};
use std::io::{self, Stdout, Write};

/// What a [`Session`] changes on entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Draw on the alternate screen.
    pub alternate_screen: bool,
    /// Hide the cursor.
    pub hide_cursor: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            alternate_screen: true,
            hide_cursor: true,
        }
    }
}

/// RAII guard over terminal modes.
#[derive(Debug)]
pub struct Session<W: Write> {
    out: W,
    alternate_screen: bool,
    cursor_hidden: bool,
}

impl Session<Stdout> {
    /// Enter the alternate screen and hide the cursor on stdout.
    pub fn stdout() -> Result<Self, TuiError> {
        Self::enter(io::stdout(), SessionOptions::default())
    }
}

impl<W: Write> Session<W> {
    /// Apply `options` to `out`.
    ///
    /// If a later step fails, the steps already applied are undone when the
    /// partially built session is dropped.
    pub fn enter(out: W, options: SessionOptions) -> Result<Self, TuiError> {
        let mut session = Self {
            out,
            alternate_screen: false,
            cursor_hidden: false,
        };
        if options.alternate_screen {
            execute!(session.out, EnterAlternateScreen)?;
            session.alternate_screen = true;
        }
        if options.hide_cursor {
            execute!(session.out, cursor::Hide)?;
            session.cursor_hidden = true;
        }
        tracing::debug!(?options, "terminal session entered");
        Ok(session)
    }

    /// Whether the alternate screen is active.
    #[must_use]
    pub const fn is_alternate_screen(&self) -> bool {
        self.alternate_screen
    }

    /// Whether the cursor is hidden.
    #[must_use]
    pub const fn is_cursor_hidden(&self) -> bool {
        self.cursor_hidden
    }
}

impl<W: Write> Drop for Session<W> {
    fn drop(&mut self) {
        if self.cursor_hidden {
            let _ = execute!(self.out, cursor::Show);
        }
        if self.alternate_screen {
            let _ = execute!(self.out, LeaveAlternateScreen);
        }
        tracing::debug!("terminal session restored");
    }
}
