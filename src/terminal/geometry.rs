//! Geometry: Window size, with a cursor-report fallback.
//!
//! The OS is asked first. When that fails or reports zero columns the
//! cursor is pushed to the bottom-right corner and the terminal is asked
//! where it ended up; the `ESC [ rows ; cols R` reply gives the size.

use super::console::Console;
use super::output::OutputBuffer;
use crate::error::{Error, Result};

/// Longest cursor position report that is scanned.
const MAX_REPORT_LEN: usize = 31;

/// Terminal size as `(rows, cols)`.
pub fn query_geometry<C: Console + ?Sized>(console: &mut C) -> Result<(usize, usize)> {
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 => {
            tracing::debug!(rows, cols, "window size from ioctl");
            Ok((usize::from(rows), usize::from(cols)))
        }
        other => {
            tracing::debug!(?other, "window size unavailable, asking the terminal");
            geometry_from_cursor_report(console)
        }
    }
}

/// Move the cursor to the far corner and read back its position.
pub fn geometry_from_cursor_report<C: Console + ?Sized>(console: &mut C) -> Result<(usize, usize)> {
    let mut out = OutputBuffer::with_capacity(16);
    out.write_raw(b"\x1b[999C\x1b[999B");
    console.write_frame(&out)?;
    cursor_position(console)
}

/// Ask the terminal for the cursor position, one-based `(row, col)`.
pub fn cursor_position<C: Console + ?Sized>(console: &mut C) -> Result<(usize, usize)> {
    let mut out = OutputBuffer::with_capacity(8);
    out.write_raw(b"\x1b[6n");
    console.write_frame(&out)?;

    let mut reply = Vec::with_capacity(MAX_REPORT_LEN);
    while reply.len() < MAX_REPORT_LEN {
        match console.read_byte()? {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }

    parse_cursor_report(&reply).ok_or(Error::Geometry {
        op: "cursor position report",
    })
}

/// Parse `ESC [ rows ; cols` (the terminating `R` already stripped).
pub fn parse_cursor_report(reply: &[u8]) -> Option<(usize, usize)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let body = std::str::from_utf8(body).ok()?;
    let (rows, cols) = body.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}
