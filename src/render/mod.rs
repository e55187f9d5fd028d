//! Render: Compose one frame from the buffer, cursor and viewport.
//!
//! A frame is built into a fresh [`OutputBuffer`](crate::terminal::OutputBuffer)
//! and written with a single syscall, so the terminal never shows a
//! half-drawn screen.

mod frame;

pub use frame::{compose_frame, EMPTY_ROW};
