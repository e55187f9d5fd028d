//! Cursor: Movement rules over the text buffer.

use crate::buffer::TextBuffer;

/// A single-step movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column left, wrapping to the end of the previous line.
    Left,
    /// One column right, wrapping to the start of the next line.
    Right,
    /// One row up.
    Up,
    /// One row down.
    Down,
}

/// Cursor position in buffer coordinates.
///
/// `cx` may equal the line length (just past the last character) and `cy`
/// may equal the number of lines (the virtual line after the end).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column.
    pub cx: usize,
    /// Row.
    pub cy: usize,
}

impl Cursor {
    /// Cursor at the given position. The caller keeps it in range.
    pub const fn new(cx: usize, cy: usize) -> Self {
        Self { cx, cy }
    }

    /// Move one step in `direction`.
    ///
    /// Horizontal moves wrap across line boundaries; vertical moves clamp
    /// the column to the new line's length.
    pub fn move_cursor(&mut self, direction: Direction, buffer: &TextBuffer) {
        let line_len = buffer.line_length(self.cy);

        match direction {
            Direction::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = buffer.line_length(self.cy);
                }
            }
            Direction::Right => {
                if self.cx < line_len {
                    self.cx += 1;
                } else if self.cx == line_len && self.cy + 1 < buffer.num_lines() {
                    self.cy += 1;
                    self.cx = 0;
                }
            }
            Direction::Up => {
                self.cy = self.cy.saturating_sub(1);
            }
            Direction::Down => {
                if self.cy < buffer.num_lines() {
                    self.cy += 1;
                }
            }
        }

        self.clamp_column(buffer);
    }

    /// Snap to column 0.
    pub const fn move_home(&mut self) {
        self.cx = 0;
    }

    /// Snap to the end of the current line.
    pub fn move_end(&mut self, buffer: &TextBuffer) {
        self.cx = buffer.line_length(self.cy);
    }

    /// Repeat a single-step move `count` times.
    ///
    /// A page jump is `count` = screen rows of `Up` or `Down`.
    pub fn page_move(&mut self, direction: Direction, count: usize, buffer: &TextBuffer) {
        for _ in 0..count {
            self.move_cursor(direction, buffer);
        }
    }

    fn clamp_column(&mut self, buffer: &TextBuffer) {
        self.cx = self.cx.min(buffer.line_length(self.cy));
    }
}
