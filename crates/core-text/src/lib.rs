//! Windowed line buffer.
//!
//! The document is stored as a stack pair around the line under edit:
//!
//! * `before` holds the lines above the current line, nearest line last.
//! * `current` is the line the cursor lives on.
//! * `after` holds the lines below the current line, nearest line last as
//!   well, so `after` iterated in reverse reads top-to-bottom.
//!
//! `before ++ [current] ++ reverse(after)` is the whole document at all times.
//! Vertical motion pops a line from one stack and pushes the old current line
//! onto the other, so no operation needs to walk the document.
//!
//! Every public operation is total: motion past the document edges clamps,
//! deleting at the document start is a no-op, and region deletion without a
//! mark does nothing. After each mutation the `Viewport` is recomputed so the
//! cursor stays inside the rendered window.

use std::path::PathBuf;

mod motion;
pub mod persist;
mod region;
pub mod viewport;

pub use persist::{LoadOutcome, WriteOutcome};
pub use region::Mark;
pub use viewport::Viewport;

/// Structural line separator. Never stored inside a `Line`.
pub const LINE_BREAK: char = '\n';

/// A single document line: one entry per code point, no line breaks.
pub type Line = Vec<char>;

/// A document position expressed as (line index from the top, column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
    pub fn origin() -> Self {
        Self { line: 0, column: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct Buffer {
    before: Vec<Line>,
    current: Line,
    after: Vec<Line>,
    cursor: usize,
    /// Column the user last chose horizontally; vertical motion aims for it.
    saved_column: usize,
    mark: Option<Mark>,
    viewport: Viewport,
    pub file_name: Option<PathBuf>,
}

impl Buffer {
    /// Empty document with a `height` x `width` window.
    pub fn new(file_name: Option<PathBuf>, height: usize, width: usize) -> Self {
        Self {
            before: Vec::new(),
            current: Line::new(),
            after: Vec::new(),
            cursor: 0,
            saved_column: 0,
            mark: None,
            viewport: Viewport::new(height, width),
            file_name,
        }
    }

    /// Build a buffer from in-memory text, cursor at the document origin.
    pub fn from_text(text: &str, height: usize, width: usize) -> Self {
        let mut buffer = Self::new(None, height, width);
        buffer.replace_text(text);
        buffer
    }

    /// Replace the whole document, resetting cursor, mark and scroll offsets.
    pub fn replace_text(&mut self, text: &str) {
        let mut lines: Vec<Line> = text
            .split(LINE_BREAK)
            .map(|record| record.chars().collect())
            .collect();
        // `split` always yields at least one record, so there is a first line.
        lines.reverse();
        self.current = lines.pop().unwrap_or_default();
        self.after = lines;
        self.before.clear();
        self.cursor = 0;
        self.saved_column = 0;
        self.mark = None;
        self.viewport.top_row = 0;
        self.viewport.top_col = 0;
    }

    // ---------------------------------------------------------------------
    // Queries
    // ---------------------------------------------------------------------

    pub fn before(&self) -> &[Line] {
        &self.before
    }

    pub fn current(&self) -> &[char] {
        &self.current
    }

    /// Lines below the cursor, nearest line LAST.
    pub fn after(&self) -> &[Line] {
        &self.after
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn saved_column(&self) -> usize {
        self.saved_column
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn mark(&self) -> Option<&Mark> {
        self.mark.as_ref()
    }

    pub fn has_mark(&self) -> bool {
        self.mark.is_some()
    }

    /// Index of the current line counted from the top of the document.
    pub fn cursor_line(&self) -> usize {
        self.before.len()
    }

    pub fn cursor_position(&self) -> Position {
        Position::new(self.cursor_line(), self.cursor)
    }

    pub fn line_count(&self) -> usize {
        self.before.len() + 1 + self.after.len()
    }

    /// Document lines top-to-bottom.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.before
            .iter()
            .map(Vec::as_slice)
            .chain(std::iter::once(self.current.as_slice()))
            .chain(self.after.iter().rev().map(Vec::as_slice))
    }

    /// Number of characters in the document, line breaks excluded.
    pub fn char_count(&self) -> usize {
        self.lines().map(<[char]>::len).sum()
    }

    /// Document text with lines joined by `LINE_BREAK`.
    pub fn to_text(&self) -> String {
        let mut out = String::with_capacity(self.char_count() + self.line_count());
        for (idx, line) in self.lines().enumerate() {
            if idx > 0 {
                out.push(LINE_BREAK);
            }
            out.extend(line.iter());
        }
        out
    }

    /// Cursor cell relative to the window origin: (row, column).
    pub fn cursor_screen_position(&self) -> (usize, usize) {
        (
            self.cursor_line().saturating_sub(self.viewport.top_row),
            self.cursor.saturating_sub(self.viewport.top_col),
        )
    }

    /// Render exactly `height` rows of exactly `width` columns.
    pub fn print_window(&self) -> String {
        let vp = &self.viewport;
        let visible_before = self.before.get(vp.top_row..).unwrap_or(&[]);
        let rows = visible_before
            .iter()
            .chain(std::iter::once(&self.current))
            .chain(self.after.iter().rev())
            .take(vp.height)
            .map(|line| vp.window_row(line))
            .chain(std::iter::repeat_with(|| vp.blank_row()))
            .take(vp.height)
            .collect::<Vec<_>>();
        rows.join("\n")
    }

    // ---------------------------------------------------------------------
    // Edits
    // ---------------------------------------------------------------------

    /// Insert one character at the cursor. `LINE_BREAK` splits the current
    /// line. An active mark is consumed by deleting its region first.
    pub fn insert(&mut self, ch: char) {
        if self.mark.is_some() {
            self.delete_region();
        }
        if ch == LINE_BREAK {
            let tail = self.current.split_off(self.cursor);
            let head = std::mem::replace(&mut self.current, tail);
            self.before.push(head);
            self.cursor = 0;
            tracing::trace!(target: "text.buffer", op = "split_line", line = self.before.len(), "edit");
        } else {
            self.current.insert(self.cursor, ch);
            self.cursor += 1;
            tracing::trace!(target: "text.buffer", op = "insert", line = self.before.len(), column = self.cursor, "edit");
        }
        self.saved_column = self.cursor;
        self.refresh_viewport();
    }

    /// Insert every character of `text` in order.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars() {
            self.insert(ch);
        }
    }

    /// Backspace. With a mark active this deletes the marked region instead.
    /// At column 0 the current line is joined onto the previous one.
    pub fn delete(&mut self) {
        if self.mark.is_some() {
            self.delete_region();
            return;
        }
        if self.cursor == 0 {
            if let Some(mut previous) = self.before.pop() {
                self.cursor = previous.len();
                previous.append(&mut self.current);
                self.current = previous;
                tracing::trace!(target: "text.buffer", op = "join_line", line = self.before.len(), column = self.cursor, "edit");
            }
        } else {
            self.current.remove(self.cursor - 1);
            self.cursor -= 1;
            tracing::trace!(target: "text.buffer", op = "delete", line = self.before.len(), column = self.cursor, "edit");
        }
        self.saved_column = self.cursor;
        self.refresh_viewport();
    }

    /// Change the window size, keeping the cursor visible.
    pub fn resize(&mut self, height: usize, width: usize) {
        self.viewport.resize(height, width);
        self.refresh_viewport();
    }

    fn refresh_viewport(&mut self) {
        self.viewport.follow_column(self.cursor);
        self.viewport.follow_row(self.before.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Line {
        s.chars().collect()
    }

    fn typed(text: &str) -> Buffer {
        let mut b = Buffer::new(None, 10, 16);
        b.insert_str(text);
        b
    }

    #[test]
    fn insert_then_delete_single_line() {
        let mut b = Buffer::new(None, 10, 16);
        b.insert('a');
        assert_eq!(b.current(), chars("a").as_slice());
        b.insert('b');
        b.insert('c');
        assert_eq!(b.current(), chars("abc").as_slice());
        b.delete();
        assert_eq!(b.current(), chars("ab").as_slice());
        b.delete();
        b.delete();
        assert!(b.current().is_empty());
        b.delete();
        assert!(b.current().is_empty(), "delete at document start is a no-op");
        assert_eq!(b.cursor(), 0);
    }

    #[test]
    fn insert_shifts_instead_of_overwriting() {
        let mut b = typed("ac");
        b.move_left();
        b.insert('b');
        assert_eq!(b.to_text(), "abc");
        assert_eq!(b.cursor(), 2);
        assert_eq!(b.saved_column(), 2);
    }

    #[test]
    fn line_break_splits_at_cursor() {
        let mut b = typed("abcd");
        b.move_left();
        b.move_left();
        b.insert(LINE_BREAK);
        assert_eq!(b.before(), &[chars("ab")]);
        assert_eq!(b.current(), chars("cd").as_slice());
        assert_eq!(b.cursor(), 0);
        assert_eq!(b.line_count(), 2);
    }

    #[test]
    fn delete_at_line_start_joins_previous() {
        let mut b = typed("ab\nc\nd");
        assert_eq!(b.current(), chars("d").as_slice());
        b.move_left();
        b.delete();
        assert_eq!(b.current(), chars("cd").as_slice());
        assert_eq!(b.cursor(), 1);
        b.move_left();
        b.delete();
        assert_eq!(b.current(), chars("abcd").as_slice());
        assert_eq!(b.cursor(), 2);
        assert!(b.before().is_empty());
    }

    #[test]
    fn edits_below_and_above_keep_document_order() {
        let mut b = typed("abcd");
        b.move_down();
        b.insert(LINE_BREAK);
        b.insert('f');
        b.move_up();
        assert_eq!(b.current(), chars("abcd").as_slice());
        while b.cursor() != 4 {
            b.move_right();
        }
        b.insert(LINE_BREAK);
        b.insert('e');
        assert_eq!(b.current(), chars("e").as_slice());
        b.move_down();
        assert_eq!(b.current(), chars("f").as_slice());
        assert_eq!(b.to_text(), "abcd\ne\nf");
    }

    #[test]
    fn after_stack_keeps_nearest_line_last() {
        let mut b = Buffer::from_text("one\ntwo\nthree", 10, 16);
        assert_eq!(b.current(), chars("one").as_slice());
        assert_eq!(b.after(), &[chars("three"), chars("two")]);
        b.move_down();
        assert_eq!(b.before(), &[chars("one")]);
        assert_eq!(b.after(), &[chars("three")]);
    }

    #[test]
    fn lines_iterate_top_to_bottom() {
        let mut b = Buffer::from_text("x\ny\nz", 10, 16);
        b.move_down();
        let lines: Vec<String> = b.lines().map(|l| l.iter().collect()).collect();
        assert_eq!(lines, vec!["x", "y", "z"]);
        assert_eq!(b.char_count(), 3);
        assert_eq!(b.cursor_position(), Position::new(1, 0));
    }

    #[test]
    fn replace_text_resets_state() {
        let mut b = typed("hello\nworld");
        b.set_mark();
        b.replace_text("fresh");
        assert_eq!(b.cursor_position(), Position::origin());
        assert!(!b.has_mark());
        assert_eq!(b.to_text(), "fresh");
        assert_eq!(b.viewport().top_row, 0);
    }
}
