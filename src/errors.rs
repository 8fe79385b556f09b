// src/errors.rs

//! Crate-wide error taxonomy.
//!
//! Three families, matching how failures are handled:
//! - [`ConfigError`]: a compiler configuration file is missing, unparseable,
//!   cyclic, or incomplete. Fatal during the startup scan, logged-and-skipped
//!   when it happens while handling a change.
//! - [`ScanError`]: the workspace structure itself is broken (no manifest,
//!   missing group directory, package without a config). Always fatal at
//!   startup; the registry must be complete before watching begins.
//! - [`TranspileError`]: a single file failed to transpile. Never fatal; the
//!   change is skipped and the watcher keeps running.
//!
//! `anyhow` is used at the application boundary (`lib.rs` / `main.rs`) to
//! attach context while bubbling these up.

use std::path::PathBuf;

use thiserror::Error;

pub use anyhow::Result;

/// Errors while reading or resolving a compiler configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing JSON config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An `extends` chain that revisits a file it already passed through.
    #[error("cyclic `extends` chain detected at {path:?}")]
    CyclicExtends { path: PathBuf },

    /// `rootDir` / `outDir` absent after flattening the whole chain.
    #[error("config {path:?} is missing compilerOptions.{field} (directly or via `extends`)")]
    MissingOption { path: PathBuf, field: &'static str },
}

/// Errors while scanning the workspace into a file registry.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("reading workspace manifest {path:?}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing workspace manifest {path:?}: {source}")]
    ParseManifest {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("workspace manifest {path:?} declares no `workspaces` patterns")]
    NoWorkspaces { path: PathBuf },

    #[error("workspace group directory {path:?} does not exist")]
    MissingGroup { path: PathBuf },

    #[error("package {path:?} has no {config_name} file")]
    MissingPackageConfig {
        path: PathBuf,
        config_name: &'static str,
    },

    #[error("listing package directories under {path:?}: {source}")]
    ListPackages {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walking source files under {path:?}: {source}")]
    WalkSources {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("building extension matcher: {0}")]
    ExtensionPattern(#[from] globset::Error),

    #[error("joining package scan task: {0}")]
    Join(#[from] tokio::task::JoinError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while transpiling a single changed file.
#[derive(Debug, Error)]
pub enum TranspileError {
    #[error("reading source file {path:?}: {source}")]
    ReadSource {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("launching transpiler `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("talking to the transpiler process: {0}")]
    ProcessIo(#[from] std::io::Error),

    #[error("transpiler exited with status {status} while building {outfile:?}: {stderr}")]
    Failed {
        outfile: PathBuf,
        status: i32,
        stderr: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),
}
