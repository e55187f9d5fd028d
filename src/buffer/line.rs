//! Line: A row of text and the form it is displayed in.

use unicode_width::UnicodeWidthChar;

/// One row of the loaded text.
///
/// `chars` is the stored content. `render` is what the screen shows; it is
/// rebuilt by [`Line::update_render`] whenever `chars` changes. Lengths are
/// counted in `char`s, which is also the unit of cursor columns.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    chars: String,
    size: usize,
    render: String,
    rsize: usize,
}

impl Line {
    /// Create a line from its content (without a line terminator).
    pub fn new(content: &str) -> Self {
        let mut line = Self {
            chars: content.to_owned(),
            size: content.chars().count(),
            render: String::new(),
            rsize: 0,
        };
        line.update_render();
        line
    }

    /// The stored content.
    #[inline]
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Length of the stored content.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The display form of the content.
    #[inline]
    pub fn render(&self) -> &str {
        &self.render
    }

    /// Length of the display form.
    #[inline]
    pub const fn rsize(&self) -> usize {
        self.rsize
    }

    /// Rebuild the render projection from `chars`.
    ///
    /// The projection is currently the identity.
    pub fn update_render(&mut self) {
        self.render.clone_from(&self.chars);
        self.rsize = self.size;
    }

    /// Iterate the rendered characters visible from column `start` that fit
    /// in `width` terminal cells.
    ///
    /// `start` counts `char`s; `width` counts display cells, so a double-width
    /// character that would straddle the right edge is left out. Yields nothing
    /// when the line is shorter than `start`.
    pub fn render_slice(&self, start: usize, width: usize) -> impl Iterator<Item = char> + '_ {
        let mut used = 0;
        self.render.chars().skip(start).take_while(move |c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_identity_projection() {
        let line = Line::new("hello");
        assert_eq!(line.size(), 5);
        assert_eq!(line.rsize(), 5);
        assert_eq!(line.chars(), "hello");
        assert_eq!(line.render(), "hello");
    }

    #[test]
    fn test_line_counts_chars_not_bytes() {
        let line = Line::new("héllo");
        assert_eq!(line.size(), 5);
        assert_eq!(line.rsize(), 5);
    }

    #[test]
    fn test_empty_line() {
        let line = Line::new("");
        assert_eq!(line.size(), 0);
        assert_eq!(line.rsize(), 0);
        assert_eq!(line.render_slice(0, 80).count(), 0);
    }

    #[test]
    fn test_render_slice_clips() {
        let line = Line::new("abcdefgh");
        assert_eq!(line.render_slice(2, 3).collect::<String>(), "cde");
        assert_eq!(line.render_slice(6, 10).collect::<String>(), "gh");
        assert_eq!(line.render_slice(20, 10).collect::<String>(), "");
    }

    #[test]
    fn test_render_slice_counts_display_cells() {
        let line = Line::new("日本語テキスト");
        assert_eq!(line.render_slice(0, 6).collect::<String>(), "日本語");
        // The fourth character would need columns 7 and 8.
        assert_eq!(line.render_slice(0, 7).collect::<String>(), "日本語");
        assert_eq!(line.render_slice(2, 4).collect::<String>(), "語テ");
    }

    #[test]
    fn test_render_slice_keeps_zero_width_marks() {
        let line = Line::new("e\u{301}x");
        assert_eq!(line.render_slice(0, 1).collect::<String>(), "e\u{301}");
    }
}
