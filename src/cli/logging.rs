//! Logging utilities for CLI output

use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Log level for CLI output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Suppress all output
    Quiet,
    /// Normal output level
    Normal,
    /// Verbose output with additional details
    Verbose,
}

impl LogLevel {
    /// Resolve the level from the global `--quiet` / `--verbose` flags.
    pub fn from_flags(quiet: bool, verbose: bool) -> Self {
        if quiet {
            LogLevel::Quiet
        } else if verbose {
            LogLevel::Verbose
        } else {
            LogLevel::Normal
        }
    }

    /// Most detailed `tracing` level shown at this CLI level.
    pub fn tracing_level(self) -> Level {
        match self {
            LogLevel::Quiet => Level::ERROR,
            LogLevel::Normal => Level::INFO,
            LogLevel::Verbose => Level::DEBUG,
        }
    }
}

/// Log a message if the current level permits it
pub fn log(level: LogLevel, required: LogLevel, msg: &str) {
    if level != LogLevel::Quiet && (level == required || required == LogLevel::Normal) {
        eprintln!("{msg}");
    }
}

/// Install a stderr subscriber for the library's `tracing` events.
///
/// Returns `false` if a global subscriber was already set.
pub fn init_tracing(level: LogLevel) -> bool {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level.tracing_level())
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).is_ok()
}
