//! # Tile
//!
//! A terminal-resident text viewer.
//!
//! Tile takes exclusive control of the terminal, loads a file into memory
//! and lets you scroll through it with the arrow, Home/End and Page keys.
//! Every keypress redraws the visible window in one write.
//!
//! ## Core Concepts
//!
//! - **Scoped raw mode**: the terminal is restored on every exit path
//! - **Byte-level key decoding**: escape sequences become named keys
//! - **Minimum-jump scrolling**: the viewport moves only to keep the cursor visible
//! - **Single-write frames**: each frame is accumulated then flushed at once
//!
//! ## Example
//!
//! ```rust,ignore
//! use tile::{EditorConfig, run};
//!
//! let config = EditorConfig::default();
//! run(&config, Some(std::path::Path::new("notes.txt")))?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod render;
pub mod terminal;
pub mod view;

use std::path::Path;

// Re-exports for convenience
pub use buffer::{Line, TextBuffer};
pub use config::EditorConfig;
pub use engine::{Editor, Engine, LoopState};
pub use error::{Error, Result};
pub use input::{ByteSource, Key};
pub use terminal::{Console, OutputBuffer, Terminal};
pub use view::{Cursor, Direction, Viewport};

/// Open the terminal, load `path` (if any) and run until the quit key.
///
/// The terminal is cleared and restored before this returns, on success
/// and on error alike.
pub fn run(config: &EditorConfig, path: Option<&Path>) -> Result<()> {
    let mut console = Terminal::acquire(config)?;
    let size = terminal::query_geometry(&mut console)?;

    let buffer = match path {
        Some(path) => TextBuffer::from_lines(buffer::loader::read_lines(path)?),
        None => TextBuffer::new(),
    };

    Engine::new(console, size, buffer, config.clone()).run()
}
