//! Frame composition.

use unicode_width::UnicodeWidthChar;

use crate::buffer::TextBuffer;
use crate::terminal::OutputBuffer;
use crate::view::{Cursor, Viewport};

/// Marker drawn on rows past the end of the buffer.
pub const EMPTY_ROW: &str = "~";

/// Build one complete frame.
///
/// The cursor is hidden while rows are drawn and shown again at its new
/// position at the end. Every row is followed by an erase-to-end-of-line so
/// text from a previous, longer frame does not linger. The viewport must
/// already have been scrolled to contain the cursor.
pub fn compose_frame(
    buffer: &TextBuffer,
    cursor: &Cursor,
    viewport: &Viewport,
    welcome: &str,
) -> OutputBuffer {
    let mut out = OutputBuffer::with_capacity(viewport.rows() * (viewport.cols() + 8) + 32);

    out.cursor_hide();
    out.cursor_home();
    draw_rows(&mut out, buffer, viewport, welcome);

    let (row, col) = viewport.screen_position(cursor);
    out.cursor_move(row, col);
    out.cursor_show();

    tracing::trace!(bytes = out.len(), "frame composed");
    out
}

fn draw_rows(out: &mut OutputBuffer, buffer: &TextBuffer, viewport: &Viewport, welcome: &str) {
    let rows = viewport.rows();

    for y in 0..rows {
        let filerow = y + viewport.row_offset;

        if let Some(line) = buffer.line(filerow) {
            for c in line.render_slice(viewport.col_offset, viewport.cols()) {
                out.write_char(c);
            }
        } else if buffer.is_empty() && y == rows / 3 {
            draw_welcome(out, welcome, viewport.cols());
        } else {
            out.write_str(EMPTY_ROW);
        }

        out.clear_line();
        if y + 1 < rows {
            out.newline();
        }
    }
}

/// Centre `welcome` in `cols` columns, truncating it if it does not fit.
fn draw_welcome(out: &mut OutputBuffer, welcome: &str, cols: usize) {
    let mut shown = 0;
    let mut width = 0;
    for (index, c) in welcome.char_indices() {
        let w = c.width().unwrap_or(0);
        if width + w > cols {
            break;
        }
        width += w;
        shown = index + c.len_utf8();
    }

    let mut padding = (cols - width) / 2;
    if padding > 0 {
        out.write_str(EMPTY_ROW);
        padding -= 1;
    }
    for _ in 0..padding {
        out.write_char(' ');
    }
    out.write_str(&welcome[..shown]);
}
