// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `dagpipe`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "dagpipe",
    version,
    about = "Run a fixed three-level task DAG with configurable failure injection.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to an optional TOML config file with [run] and [failures]
    /// sections. Without it, built-in defaults apply.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Force failure injection for a task (repeatable, e.g. --fail Task2).
    #[arg(long = "fail", value_name = "TASK")]
    pub fail: Vec<String>,

    /// Enable probabilistic failure injection.
    #[arg(long)]
    pub random_failures: bool,

    /// Probability in [0, 1] used when random failures are enabled.
    #[arg(long, value_name = "P")]
    pub failure_probability: Option<f64>,

    /// Seed for the failure-injection generator (reproducible runs).
    #[arg(long, value_name = "N")]
    pub seed: Option<u64>,

    /// Number of pool workers.
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `DAGPIPE_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Print the effective configuration and DAG shape without executing.
    #[arg(long)]
    pub dry_run: bool,
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
