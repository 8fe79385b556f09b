// src/scan/mod.rs

//! Workspace scanning.
//!
//! Responsibilities:
//! - Read the workspace root manifest and its package glob patterns
//!   (`manifest.rs`).
//! - Enumerate package directories, resolve each package's compiler config,
//!   and glob its source files (`scanner.rs`).
//! - Flatten the result into the file registry (`registry.rs`).
//!
//! The scan runs exactly once, during startup, before any watching begins.
//! Files added to a workspace package afterwards are never discovered; a
//! restart picks them up. This is a deliberate limitation: the registry is an
//! immutable value for the lifetime of the process.

pub mod manifest;
pub mod registry;
pub mod scanner;

pub use manifest::{load_manifest, WorkspaceManifest, MANIFEST_FILE_NAME};
pub use registry::FileRegistry;
pub use scanner::{scan_workspace, DEFAULT_FILE_TYPES};
