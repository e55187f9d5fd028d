//! Error types for terminal control, input and file loading.
//!
//! Every variant here is fatal to the editor: the caller restores the
//! terminal and exits with a failure status. Malformed escape sequences are
//! not errors and never show up here.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Editor error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Reading or applying the terminal mode failed.
    #[error("{op}: {source}")]
    Terminal {
        /// The failed call (`tcgetattr`, `tcsetattr`).
        op: &'static str,
        /// Underlying system error.
        #[source]
        source: nix::Error,
    },

    /// The window size could not be determined.
    #[error("failed to query window size: {op}")]
    Geometry {
        /// The step that failed.
        op: &'static str,
    },

    /// Reading from the terminal failed (not a timeout).
    #[error("read: {0}")]
    Read(#[source] io::Error),

    /// Writing to the terminal failed.
    #[error("write: {0}")]
    Write(#[source] io::Error),

    /// The file to view could not be opened or read.
    #[error("failed to open {}: {source}", .path.display())]
    FileOpen {
        /// Path given on the command line.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, Error>;
