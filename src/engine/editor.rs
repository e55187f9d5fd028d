//! Editor: The explicit state object the loop operates on.

use crate::buffer::TextBuffer;
use crate::input::Key;
use crate::render::compose_frame;
use crate::terminal::OutputBuffer;
use crate::view::{Cursor, Direction, Viewport};

/// Buffer, cursor and viewport for one editing session.
#[derive(Debug, Clone)]
pub struct Editor {
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
}

impl Editor {
    /// Start at the top-left of `buffer` on a `rows` x `cols` screen.
    pub fn new(buffer: TextBuffer, rows: usize, cols: usize) -> Self {
        Self {
            buffer,
            cursor: Cursor::default(),
            viewport: Viewport::new(rows, cols),
        }
    }

    /// The cursor.
    pub const fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// The viewport.
    pub const fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Apply a navigation key. Other keys leave the state unchanged.
    pub fn process_key(&mut self, key: Key) {
        let buffer = &self.buffer;
        let cursor = &mut self.cursor;

        match key {
            Key::ArrowLeft => cursor.move_cursor(Direction::Left, buffer),
            Key::ArrowRight => cursor.move_cursor(Direction::Right, buffer),
            Key::ArrowUp => cursor.move_cursor(Direction::Up, buffer),
            Key::ArrowDown => cursor.move_cursor(Direction::Down, buffer),
            Key::Home => cursor.move_home(),
            Key::End => cursor.move_end(buffer),
            Key::PageUp => cursor.page_move(Direction::Up, self.viewport.rows(), buffer),
            Key::PageDown => cursor.page_move(Direction::Down, self.viewport.rows(), buffer),
            Key::Delete | Key::Escape | Key::Char(_) => {}
        }
    }

    /// Scroll to the cursor and compose the next frame.
    pub fn draw(&mut self, welcome: &str) -> OutputBuffer {
        self.viewport.scroll(&self.cursor);
        compose_frame(&self.buffer, &self.cursor, &self.viewport, welcome)
    }
}
