// src/config/mod.rs

//! Per-package compiler configuration (`tsconfig.json`-style).
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Resolve a configuration file into a flattened result, following its
//!   `extends` chain with cycle detection (`resolver.rs`).
//!
//! Resolution is repeated lazily on every change event rather than cached at
//! scan time, so edits to a configuration chain are picked up without a
//! restart. Only the *path* to the governing config is fixed at scan time.

pub mod model;
pub mod resolver;

pub use model::{RawCompilerOptions, RawConfig, ResolvedConfig};
pub use resolver::{resolve, CONFIG_FILE_NAME};
