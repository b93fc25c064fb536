//! Cursor motion over the stack pair.
//!
//! Horizontal motion clamps to `[0, len(current)]` and records the result as
//! the saved column. Vertical motion swaps lines between `before` and
//! `after` and lands on `min(len(line), saved_column)` without touching the
//! saved column, so crossing a short line does not lose the target column.

use crate::Buffer;

impl Buffer {
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.saved_column = self.cursor;
        self.viewport.follow_column(self.cursor);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.current.len() {
            self.cursor += 1;
        }
        self.saved_column = self.cursor;
        self.viewport.follow_column(self.cursor);
    }

    /// Move to the previous line; on the first line snap to column 0.
    pub fn move_up(&mut self) {
        if let Some(line) = self.before.pop() {
            let old = std::mem::replace(&mut self.current, line);
            self.after.push(old);
            self.cursor = self.current.len().min(self.saved_column);
        } else {
            self.cursor = 0;
            self.saved_column = self.cursor;
        }
        tracing::trace!(target: "text.buffer", op = "up", line = self.before.len(), column = self.cursor, "motion");
        self.refresh_viewport();
    }

    /// Move to the next line; on the last line snap to end of line.
    pub fn move_down(&mut self) {
        if let Some(line) = self.after.pop() {
            let old = std::mem::replace(&mut self.current, line);
            self.before.push(old);
            self.cursor = self.current.len().min(self.saved_column);
        } else {
            self.cursor = self.current.len();
            self.saved_column = self.cursor;
        }
        tracing::trace!(target: "text.buffer", op = "down", line = self.before.len(), column = self.cursor, "motion");
        self.refresh_viewport();
    }
}

#[cfg(test)]
mod tests {
    use crate::Buffer;

    #[test]
    fn left_right_clamp_to_line() {
        let mut b = Buffer::from_text("ab", 4, 8);
        b.move_left();
        assert_eq!(b.cursor(), 0);
        b.move_right();
        b.move_right();
        b.move_right();
        assert_eq!(b.cursor(), 2);
        assert_eq!(b.saved_column(), 2);
    }

    #[test]
    fn vertical_motion_remembers_column_across_short_line() {
        let mut b = Buffer::from_text("long line\nab\nanother line", 4, 20);
        for _ in 0..7 {
            b.move_right();
        }
        b.move_down();
        assert_eq!(b.cursor(), 2, "short line truncates the column");
        assert_eq!(b.saved_column(), 7, "target column survives");
        b.move_down();
        assert_eq!(b.cursor(), 7);
        b.move_up();
        b.move_up();
        assert_eq!(b.cursor(), 7);
    }

    #[test]
    fn up_on_first_line_snaps_to_start() {
        let mut b = Buffer::from_text("hello\nworld", 4, 20);
        b.move_right();
        b.move_right();
        b.move_up();
        assert_eq!(b.cursor(), 0);
        assert_eq!(b.saved_column(), 0);
        assert_eq!(b.cursor_line(), 0);
    }

    #[test]
    fn down_on_last_line_snaps_to_end() {
        let mut b = Buffer::from_text("hello\nworld", 4, 20);
        b.move_down();
        assert_eq!(b.cursor_line(), 1);
        assert_eq!(b.cursor(), 0);
        b.move_down();
        assert_eq!(b.cursor(), 5);
        assert_eq!(b.saved_column(), 5);
        b.move_up();
        assert_eq!(b.cursor(), 5);
    }
}
