//! Viewport: the scrolled rectangle of the document that gets rendered.
//!
//! Guarantees after `follow_column` / `follow_row`:
//! * `top_col` is the smallest offset with the cursor column inside
//!   `[top_col, top_col + width)`. Moving right past the edge scrolls by the
//!   exact overshoot; moving back left contracts the offset toward 0.
//! * `top_row <= cursor_row < top_row + height`, moving `top_row` only as far
//!   as needed. Since a single edit or motion moves the cursor by at most one
//!   row downward, `top_row` grows by at most one per operation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top_row: usize,
    pub top_col: usize,
    pub height: usize,
    pub width: usize,
}

impl Viewport {
    /// Zero dimensions are raised to 1 so a window always has one cell.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            top_row: 0,
            top_col: 0,
            height: height.max(1),
            width: width.max(1),
        }
    }

    pub fn resize(&mut self, height: usize, width: usize) {
        self.height = height.max(1);
        self.width = width.max(1);
    }

    /// Scroll horizontally so `cursor` is visible. Returns true on change.
    pub fn follow_column(&mut self, cursor: usize) -> bool {
        let before = self.top_col;
        let last_visible = self.top_col + self.width - 1;
        if cursor > last_visible {
            self.top_col += cursor - last_visible;
        } else if cursor < self.top_col {
            self.top_col = cursor;
        }
        // Contract toward the left edge while the cursor still fits.
        let minimal = cursor.saturating_sub(self.width - 1);
        if self.top_col > minimal {
            self.top_col = minimal;
        }
        if self.top_col != before {
            tracing::trace!(target: "text.viewport", from = before, to = self.top_col, cursor, "scroll_col");
        }
        self.top_col != before
    }

    /// Scroll vertically so `cursor_row` (the length of `before`) is
    /// visible. Returns true on change.
    pub fn follow_row(&mut self, cursor_row: usize) -> bool {
        let before = self.top_row;
        if self.top_row > cursor_row {
            self.top_row = cursor_row;
        } else if cursor_row >= self.top_row + self.height {
            self.top_row = cursor_row + 1 - self.height;
        }
        if self.top_row != before {
            tracing::trace!(target: "text.viewport", from = before, to = self.top_row, cursor_row, "scroll_row");
        }
        self.top_row != before
    }

    /// One rendered row: `line[top_col..]` cut or space-padded to `width`.
    pub fn window_row(&self, line: &[char]) -> String {
        let visible = line.get(self.top_col..).unwrap_or(&[]);
        let mut row: String = visible.iter().take(self.width).collect();
        let shown = visible.len().min(self.width);
        row.extend(std::iter::repeat_n(' ', self.width - shown));
        row
    }

    pub fn blank_row(&self) -> String {
        " ".repeat(self.width)
    }
}
