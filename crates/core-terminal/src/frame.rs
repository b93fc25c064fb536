//! Frame composition: the full screen as rows of text plus a cursor cell.
//!
//! Layout, top to bottom:
//! * the buffer window (`Buffer::print_window`), `height` rows;
//! * a status line: `[MODE] name[*] Ln X, Col Y`, then the one-shot status
//!   message if any;
//! * the input panel (phoneme mode only): IPA line, then the word line.
//!
//! The frame covers the terminal exactly: rows beyond it are dropped, blank
//! rows fill the remainder, and every row is cut or padded to its width.
//! Painting therefore never has to erase anything.

use core_state::EditorState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub rows: Vec<String>,
    /// Cursor cell (column, row).
    pub cursor: (u16, u16),
}

fn fit(text: &str, columns: usize) -> String {
    let mut row: String = text.chars().take(columns).collect();
    let len = row.chars().count();
    row.extend(std::iter::repeat_n(' ', columns - len));
    row
}

pub fn status_line(state: &EditorState) -> String {
    let pos = state.buffer.cursor_position();
    let mut line = format!(
        "[{}] {}{} Ln {}, Col {}",
        state.mode.label(),
        state.display_name(),
        if state.modified { "*" } else { "" },
        pos.line + 1,
        pos.column + 1,
    );
    if state.buffer.has_mark() {
        line.push_str(" [MARK]");
    }
    if let Some(msg) = &state.status_message {
        line.push_str("  ");
        line.push_str(msg);
    }
    line
}

/// Compose the frame for a terminal of `columns` x `rows`.
pub fn compose_frame(state: &EditorState, columns: u16, rows: u16) -> Frame {
    let columns = usize::from(columns);
    let mut out: Vec<String> = state
        .buffer
        .print_window()
        .split('\n')
        .map(|row| fit(row, columns))
        .collect();
    out.push(fit(&status_line(state), columns));
    if state.in_phoneme_mode() {
        out.extend(state.input.panel_text().split('\n').map(|l| fit(l, columns)));
    }
    out.resize(usize::from(rows), fit("", columns));

    let (row, col) = state.buffer.cursor_screen_position();
    let clamp = |v: usize, max: usize| {
        u16::try_from(v.min(max.saturating_sub(1))).unwrap_or(u16::MAX)
    };
    Frame {
        rows: out,
        cursor: (clamp(col, columns), clamp(row, usize::from(rows))),
    }
}
