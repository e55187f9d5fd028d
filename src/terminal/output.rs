//! `OutputBuffer`: Single-syscall output buffer for ANSI sequences.

use std::io::Write;

/// Clear the whole screen.
pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
/// Move the cursor to the top-left corner.
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

/// Growable buffer for one frame of output.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Get the buffer contents.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Get the buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if buffer is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Take the accumulated bytes, leaving the buffer empty.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Write raw bytes.
    #[inline]
    pub fn write_raw(&mut self, bytes: &[u8]) {
        self.data.extend_from_slice(bytes);
    }

    /// Write a string.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
    }

    /// Write a single character.
    #[inline]
    pub fn write_char(&mut self, c: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(c.encode_utf8(&mut utf8).as_bytes());
    }

    /// Row separator: carriage return plus newline.
    #[inline]
    pub fn newline(&mut self) {
        self.data.extend_from_slice(b"\r\n");
    }

    /// Move cursor to zero-based `(row, col)` (sent 1-indexed).
    #[inline]
    pub fn cursor_move(&mut self, row: usize, col: usize) {
        // CSI row ; col H
        let _ = write!(self.data, "\x1b[{};{}H", row + 1, col + 1);
    }

    /// Move cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(CURSOR_HOME);
    }

    /// Hide cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Erase from the cursor to the end of the line.
    #[inline]
    pub fn clear_line(&mut self) {
        self.data.extend_from_slice(b"\x1b[K");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(CLEAR_SCREEN);
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}
