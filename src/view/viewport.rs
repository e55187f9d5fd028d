//! Viewport: The visible window onto the buffer.

use super::Cursor;

/// Terminal geometry and the buffer coordinate shown at the top-left.
///
/// Scrolling follows a minimum-jump policy: offsets only move as far as
/// needed to bring the cursor back on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    rows: usize,
    cols: usize,
    /// First visible buffer row.
    pub row_offset: usize,
    /// First visible buffer column.
    pub col_offset: usize,
}

impl Viewport {
    /// Create a viewport of `rows` x `cols` scrolled to the origin.
    ///
    /// Zero dimensions are raised to one.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Screen height in rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Screen width in columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Adjust the offsets so the cursor is visible.
    pub fn scroll(&mut self, cursor: &Cursor) {
        if cursor.cy < self.row_offset {
            self.row_offset = cursor.cy;
        }
        if cursor.cy >= self.row_offset + self.rows {
            self.row_offset = cursor.cy + 1 - self.rows;
        }
        if cursor.cx < self.col_offset {
            self.col_offset = cursor.cx;
        }
        if cursor.cx >= self.col_offset + self.cols {
            self.col_offset = cursor.cx + 1 - self.cols;
        }
    }

    /// Check if the cursor is on screen.
    pub const fn contains(&self, cursor: &Cursor) -> bool {
        cursor.cy >= self.row_offset
            && cursor.cy < self.row_offset + self.rows
            && cursor.cx >= self.col_offset
            && cursor.cx < self.col_offset + self.cols
    }

    /// Zero-based `(row, col)` of the cursor on screen.
    ///
    /// Only meaningful after [`Viewport::scroll`].
    pub const fn screen_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.cy.saturating_sub(self.row_offset),
            cursor.cx.saturating_sub(self.col_offset),
        )
    }
}
