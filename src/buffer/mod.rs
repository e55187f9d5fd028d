//! Buffer module: The loaded text and its display projection.
//!
//! This module contains:
//! - [`Line`]: One row of text plus its render projection
//! - [`TextBuffer`]: The ordered lines of the loaded file
//! - [`loader`]: Reads a file into lines with terminators stripped

mod line;
mod text;
pub mod loader;

pub use line::Line;
pub use text::TextBuffer;
