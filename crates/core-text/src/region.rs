//! Selection mark and region deletion.
//!
//! A mark is a document position fixed at `set_mark` time. It stores the
//! line index (the length of `before` when it was set) and the column. Every
//! edit deletes the marked region before doing anything else, so the marked
//! line cannot change while a mark exists; region deletion therefore reads the
//! mark line straight out of the stack it is popped from.

use crate::Buffer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub line: usize,
    pub column: usize,
}

impl Buffer {
    /// Anchor a region at the cursor, replacing any existing mark.
    pub fn set_mark(&mut self) {
        let mark = Mark {
            line: self.before.len(),
            column: self.cursor,
        };
        tracing::trace!(target: "text.buffer", line = mark.line, column = mark.column, "set_mark");
        self.mark = Some(mark);
    }

    pub fn clear_mark(&mut self) {
        self.mark = None;
    }

    /// Delete the text between the mark and the cursor, then clear the mark.
    /// Returns false (and changes nothing) when no mark is set.
    ///
    /// The three placements (mark below, above, or on the cursor line) are
    /// handled as exclusive cases. The cursor ends at `min(cursor, mark
    /// column)` in every case.
    pub fn delete_region(&mut self) -> bool {
        let Some(mark) = self.mark.take() else {
            return false;
        };
        let row = self.before.len();
        if mark.line > row {
            let mut mark_line = Vec::new();
            for _ in row..mark.line {
                if let Some(line) = self.after.pop() {
                    mark_line = line;
                }
            }
            let keep_from = mark.column.min(mark_line.len());
            self.current.truncate(self.cursor);
            self.current.extend_from_slice(&mark_line[keep_from..]);
        } else if mark.line < row {
            let mut mark_line = Vec::new();
            for _ in mark.line..row {
                if let Some(line) = self.before.pop() {
                    mark_line = line;
                }
            }
            mark_line.truncate(mark.column);
            let tail = self.current.split_off(self.cursor);
            mark_line.extend(tail);
            self.current = mark_line;
        } else {
            let start = mark.column.min(self.cursor).min(self.current.len());
            let end = mark.column.max(self.cursor).min(self.current.len());
            self.current.drain(start..end);
        }
        self.cursor = self.cursor.min(mark.column).min(self.current.len());
        self.saved_column = self.cursor;
        tracing::trace!(
            target: "text.buffer",
            mark_line = mark.line,
            mark_column = mark.column,
            line = self.before.len(),
            column = self.cursor,
            "delete_region"
        );
        self.refresh_viewport();
        true
    }
}
