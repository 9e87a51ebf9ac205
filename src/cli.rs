// src/cli.rs

//! CLI argument parsing using `clap`.
//!
//! NOTE: this expects `clap` to be built with the `derive` feature, e.g.:
//! `clap = { version = "4.5.53", features = ["derive"] }` in `Cargo.toml`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `skinwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "skinwatch",
    version,
    about = "Load and resolve a skin watch-list configuration.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (YAML).
    ///
    /// Default: `settings/config.yaml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "settings/config.yaml")]
    pub config: String,

    /// Suppress informational notices; warnings still print.
    #[arg(long)]
    pub quiet: bool,

    /// Pause this many seconds after each printed notice.
    ///
    /// Off by default; mostly useful to slow startup output down to a
    /// readable pace on first runs.
    #[arg(long, value_name = "SECONDS")]
    pub pace: Option<u64>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `SKINWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
