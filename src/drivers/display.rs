//! Two-line character display (I²C backpack).
//!
//! Only `print` is observable: it emits an `LCD: <text>` diagnostic line
//! with the text verbatim.  The cursor and housekeeping calls are accepted
//! for interface compatibility and produce no output, but the model does
//! keep per-row text buffers up to date so a harness can inspect what a
//! real panel would show.

use std::rc::Rc;

use heapless::{String as RowBuf, Vec as RowVec};

use crate::context::SimContext;
use crate::trace::TraceEvent;

/// Widest supported panel; larger `cols` arguments are clamped.
const MAX_COLS: usize = 40;
const MAX_ROWS: usize = 4;

pub struct LcdDisplay {
    ctx: Rc<SimContext>,
    addr: u8,
    cols: u8,
    rows: u8,
    cursor_col: u8,
    cursor_row: u8,
    lines: RowVec<RowBuf<MAX_COLS>, MAX_ROWS>,
}

impl LcdDisplay {
    /// Mirror of the real display constructor: bus address plus geometry.
    pub fn new(ctx: Rc<SimContext>, addr: u8, cols: u8, rows: u8) -> Self {
        let cols = cols.min(MAX_COLS as u8);
        let rows = rows.clamp(1, MAX_ROWS as u8);
        let mut lines = RowVec::new();
        for _ in 0..rows {
            // Capacity is MAX_ROWS and rows is clamped to it.
            let _ = lines.push(RowBuf::new());
        }
        Self {
            ctx,
            addr,
            cols,
            rows,
            cursor_col: 0,
            cursor_row: 0,
            lines,
        }
    }

    /// Initialise the panel.  Nothing to initialise.
    pub fn begin(&mut self) {}

    /// Return the cursor to the origin.
    pub fn home(&mut self) {
        self.cursor_col = 0;
        self.cursor_row = 0;
    }

    /// Backlight control is not modeled.
    pub fn backlight(&mut self) {}

    /// Move the cursor.  Out-of-range coordinates clamp to the panel edge,
    /// as the real controller effectively does.
    pub fn set_cursor(&mut self, col: u8, row: u8) {
        self.cursor_col = col.min(self.cols);
        self.cursor_row = row.min(self.rows - 1);
    }

    /// Render `text`: emit the `LCD:` diagnostic line and write the text
    /// into the current row from the cursor position, clearing the rest of
    /// the row.  The cursor advances past what was written.
    pub fn print(&mut self, text: &str) {
        self.ctx.emit(TraceEvent::DisplayPrint {
            text: text.to_owned(),
        });

        let row = usize::from(self.cursor_row);
        let Some(line) = self.lines.get_mut(row) else {
            return;
        };

        // Rebuild the row: keep what is left of the cursor, pad up to it,
        // then lay down the new text until the panel edge.
        let cursor = usize::from(self.cursor_col);
        let cols = usize::from(self.cols);
        let mut rebuilt: RowBuf<MAX_COLS> = RowBuf::new();
        let mut count = 0usize;
        for ch in line.chars().take(cursor) {
            if rebuilt.push(ch).is_err() {
                break;
            }
            count += 1;
        }
        while count < cursor {
            if rebuilt.push(' ').is_err() {
                break;
            }
            count += 1;
        }
        for ch in text.chars() {
            if count >= cols || rebuilt.push(ch).is_err() {
                break;
            }
            count += 1;
        }
        self.cursor_col = count as u8;
        *line = rebuilt;
    }

    /// Text currently on `row`, or `None` past the panel edge.
    pub fn line(&self, row: u8) -> Option<&str> {
        self.lines.get(usize::from(row)).map(|l| l.as_str())
    }

    pub fn addr(&self) -> u8 {
        self.addr
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }
}
