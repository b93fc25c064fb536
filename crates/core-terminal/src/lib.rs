//! Terminal session handling and frame painting.
//!
//! `TerminalBackend` is the seam between the editor and the real terminal.
//! `ScreenGuard` puts any backend into editing mode (raw input, alternate
//! screen, hidden cursor) and restores it when dropped, including during a
//! panic unwind.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle, disable_raw_mode,
        enable_raw_mode,
    },
};
use std::io::stdout;

pub mod frame;
pub mod writer;
pub use frame::{Frame, compose_frame};
pub use writer::paint;

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<()>;
    fn leave(&mut self) -> Result<()>;
    fn set_title(&mut self, title: &str) -> Result<()>;
    /// Current terminal size as (columns, rows).
    fn size(&self) -> Result<(u16, u16)>;
}

/// Backend driving the process's own terminal through crossterm.
#[derive(Debug, Default)]
pub struct CrosstermBackend {
    active: bool,
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<()> {
        if self.active {
            return Ok(());
        }
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Clear(ClearType::All), Hide)?;
        self.active = true;
        tracing::debug!(target: "runtime", "screen_entered");
        Ok(())
    }

    fn leave(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let restore = execute!(stdout(), Show, LeaveAlternateScreen);
        disable_raw_mode()?;
        restore?;
        tracing::debug!(target: "runtime", "screen_left");
        Ok(())
    }

    fn set_title(&mut self, title: &str) -> Result<()> {
        execute!(stdout(), SetTitle(title))?;
        Ok(())
    }

    fn size(&self) -> Result<(u16, u16)> {
        Ok(crossterm::terminal::size()?)
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        let _ = self.leave();
    }
}

/// Holds a backend in editing mode for the guard's lifetime.
pub struct ScreenGuard<'a, B: TerminalBackend> {
    backend: &'a mut B,
}

impl<'a, B: TerminalBackend> ScreenGuard<'a, B> {
    /// Title the window, then enter editing mode.
    pub fn enter(backend: &'a mut B, title: &str) -> Result<Self> {
        backend.set_title(title)?;
        backend.enter()?;
        Ok(Self { backend })
    }

    pub fn backend(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: TerminalBackend> Drop for ScreenGuard<'_, B> {
    fn drop(&mut self) {
        if let Err(err) = self.backend.leave() {
            tracing::error!(target: "runtime", %err, "screen_restore_failed");
        }
    }
}
