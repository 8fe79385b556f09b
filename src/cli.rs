// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::transpile::ModuleFormat;

/// Command-line arguments for `linkwatch`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "linkwatch",
    version,
    about = "Watch symlinked workspace packages and rebuild them for a bundler dev server.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the workspace root (the directory holding the root package.json).
    #[arg(long, value_name = "PATH")]
    pub workspace_root: PathBuf,

    /// Module format for transpiled output.
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: ModuleFormat,

    /// Source file extension to register (repeatable).
    ///
    /// Default: `ts` and `tsx`.
    #[arg(
        long = "file-type",
        value_name = "EXT",
        default_values_t = vec!["ts".to_string(), "tsx".to_string()]
    )]
    pub file_types: Vec<String>,

    /// Path to the esbuild executable.
    #[arg(long, value_name = "PATH", default_value = "esbuild")]
    pub esbuild: PathBuf,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `LINKWATCH_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Scan the workspace, print the registry and resolved configs, and exit
    /// without watching.
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
