//! Editor configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::input::ctrl_key;

/// Environment variable naming the log file.
pub const LOG_FILE_ENV: &str = "TILE_LOG_FILE";
/// Environment variable holding the log filter directives.
pub const LOG_FILTER_ENV: &str = "TILE_LOG";
/// Environment variable overriding the terminal read timeout.
pub const READ_TIMEOUT_ENV: &str = "TILE_READ_TIMEOUT_MS";

/// Configuration for the editor.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// How long a terminal read waits before reporting "no data".
    ///
    /// Bounds the wait for the tail of an escape sequence.
    pub read_timeout: Duration,
    /// Byte that quits the editor.
    pub quit_key: u8,
    /// Banner shown when no file is loaded.
    pub welcome: String,
    /// Where log output goes. `None` disables logging.
    pub log_file: Option<PathBuf>,
    /// `tracing_subscriber::EnvFilter` directives.
    pub log_filter: String,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            read_timeout: Duration::from_millis(100),
            quit_key: ctrl_key(b'q'),
            welcome: format!("Tile editor -- version {}", env!("CARGO_PKG_VERSION")),
            log_file: None,
            log_filter: String::from("info"),
        }
    }
}

impl EditorConfig {
    /// Defaults overlaid with `TILE_LOG_FILE`, `TILE_LOG` and
    /// `TILE_READ_TIMEOUT_MS`.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from a key lookup. Unparseable values are ignored.
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(path) = lookup(LOG_FILE_ENV).filter(|p| !p.is_empty()) {
            self.log_file = Some(PathBuf::from(path));
        }
        if let Some(filter) = lookup(LOG_FILTER_ENV).filter(|f| !f.is_empty()) {
            self.log_filter = filter;
        }
        if let Some(ms) = lookup(READ_TIMEOUT_ENV).and_then(|v| v.trim().parse::<u64>().ok()) {
            self.read_timeout = Duration::from_millis(ms);
        }
        self
    }

    /// Read timeout in the deciseconds `VTIME` expects, clamped to `1..=255`.
    pub fn vtime(&self) -> u8 {
        let deciseconds = self.read_timeout.as_millis().div_ceil(100);
        u8::try_from(deciseconds.clamp(1, 255)).unwrap_or(u8::MAX)
    }
}
