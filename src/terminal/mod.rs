//! Terminal: Exclusive control of the character terminal.
//!
//! - [`RawMode`]: Scoped raw-mode guard, restored on every exit path
//! - [`Console`]: The seam the editing loop talks through
//! - [`Terminal`]: The real console over stdin/stdout
//! - [`OutputBuffer`]: One frame of output, written with a single syscall
//! - [`geometry`]: Window size query

mod console;
pub mod geometry;
pub mod output;
mod session;

pub use console::{Console, Terminal};
pub use geometry::query_geometry;
pub use output::OutputBuffer;
pub use session::{raw_attributes, RawMode};
