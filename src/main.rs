//! Tile - terminal text viewer.

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Mutex;

use clap::Parser;
use tile::EditorConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "tile")]
#[command(version)]
#[command(about = "A raw-mode terminal text viewer", long_about = None)]
struct Args {
    /// File to view; without one the welcome banner is shown
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,
}

/// Log to the configured file. The terminal itself is off limits.
fn init_logging(config: &EditorConfig) {
    let Some(path) = &config.log_file else {
        return;
    };

    let file = match File::create(path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("tile: cannot open log file {}: {e}", path.display());
            return;
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();
}

fn main() -> ExitCode {
    // Usage errors, help and version are settled before the terminal is touched.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    let path = args.path;

    let config = EditorConfig::from_env();
    init_logging(&config);
    tracing::info!(path = ?path, "tile starting");

    match tile::run(&config, path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Error: {}", e);
            eprintln!("tile: {e}");
            ExitCode::FAILURE
        }
    }
}
