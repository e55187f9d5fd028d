//! Engine: The synchronous editing loop.
//!
//! Each iteration renders a frame, blocks for one key and dispatches it:
//!
//! ```text
//! ┌────────────┐  frame   ┌──────────┐
//! │   Editor   │ ───────▶ │          │
//! │ (buffer,   │          │ Console  │
//! │  cursor,   │ ◀─────── │          │
//! │  viewport) │   key    └──────────┘
//! └────────────┘
//! ```
//!
//! The quit key ends the loop; the console is released exactly once on
//! the way out, whether the loop ended normally or with an error.

mod editor;
mod event_loop;

pub use editor::Editor;
pub use event_loop::{Engine, LoopState};
