//! View: Cursor position and the visible window onto the buffer.
//!
//! - [`Cursor`]: Logical position in buffer coordinates
//! - [`Viewport`]: Terminal geometry plus the scroll offsets
//!
//! The cursor is always inside `0..=num_lines` rows and `0..=line_length`
//! columns; the viewport is recomputed each frame so that it contains the
//! cursor.

mod cursor;
mod viewport;

pub use cursor::{Cursor, Direction};
pub use viewport::Viewport;
