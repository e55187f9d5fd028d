//! `TextBuffer`: The ordered lines of the loaded file.

use super::Line;

/// Lines in file order.
///
/// Built once at startup and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    lines: Vec<Line>,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Create a buffer holding `lines` in order.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut buffer = Self::new();
        buffer.load(lines);
        buffer
    }

    /// Append every line of `lines`, in order.
    ///
    /// Each line must already have its terminator stripped.
    pub fn load<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.append_line(line.as_ref());
        }
    }

    /// Grow the buffer by one line holding a copy of `content`.
    pub fn append_line(&mut self, content: &str) {
        self.lines.push(Line::new(content));
    }

    /// Number of lines.
    #[inline]
    pub fn num_lines(&self) -> usize {
        self.lines.len()
    }

    /// Check if no lines are loaded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by index.
    #[inline]
    pub fn line(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    /// Length of line `index`, or 0 for lines past the end.
    #[inline]
    pub fn line_length(&self, index: usize) -> usize {
        self.line(index).map_or(0, Line::size)
    }
}
