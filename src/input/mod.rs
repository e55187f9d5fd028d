//! Input: Raw byte stream to key events.
//!
//! - [`Key`]: A decoded key, either a literal byte or a named key
//! - [`ByteSource`]: Where bytes come from (the terminal, or a slice in tests)
//! - [`decoder`]: Escape sequence disambiguation

mod key;
pub mod decoder;

pub use key::{ctrl_key, Key};
pub use decoder::{next_key, poll_key, ByteSource};
