//! Loader: Read a file into lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Error, Result};

/// Read `path` into lines with `\n` and `\r\n` terminators stripped.
///
/// Invalid UTF-8 is replaced rather than rejected.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file_error = |source| Error::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_error)?;
    let mut reader = BufReader::new(file);
    let mut lines = Vec::new();
    let mut raw = Vec::new();

    loop {
        raw.clear();
        if reader.read_until(b'\n', &mut raw).map_err(file_error)? == 0 {
            break;
        }
        while matches!(raw.last(), Some(b'\n' | b'\r')) {
            raw.pop();
        }
        lines.push(String::from_utf8_lossy(&raw).into_owned());
    }

    tracing::debug!(path = %path.display(), lines = lines.len(), "loaded file");
    Ok(lines)
}
