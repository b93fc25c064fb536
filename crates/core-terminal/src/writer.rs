//! Frame painting through crossterm commands.
//!
//! Commands are queued and flushed once per frame. Every row is repainted;
//! frames are small enough that no diffing is attempted. Rows arrive padded to
//! the terminal width, so no erase command is sent: after the last column is
//! written the cursor stays on that cell, and an erase would blank it.

use anyhow::Result;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::Print,
};
use std::io::Write;

use crate::Frame;

pub fn paint<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    queue!(out, Hide)?;
    for (y, row) in frame.rows.iter().enumerate() {
        let y = u16::try_from(y).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, y), Print(row))?;
    }
    let (x, y) = frame.cursor;
    queue!(out, MoveTo(x, y), Show)?;
    out.flush()?;
    tracing::trace!(
        target: "runtime",
        rows = frame.rows.len(),
        cursor_x = x,
        cursor_y = y,
        "frame_painted"
    );
    Ok(())
}
