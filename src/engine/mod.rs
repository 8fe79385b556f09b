// src/engine/mod.rs

//! Orchestration engine.
//!
//! This module ties together:
//! - the per-path single-flight queue (what happens when a file changes
//!   while its previous transpile is still running)
//! - the main runtime event loop that reacts to:
//!   - file-change notifications from the watcher
//!   - transpile completions
//!   - shutdown signals

pub mod queue;
pub mod runtime;

pub use queue::ChangeQueue;
pub use runtime::{Runtime, RuntimeEvent};
