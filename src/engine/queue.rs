// src/engine/queue.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Per-source-path single-flight bookkeeping.
///
/// Distinct files may transpile concurrently, but two transpiles for the
/// *same* path must never overlap: they would race on the same output file,
/// and a reload could fire against a half-written artifact. Rapid repeated
/// edits to one file are therefore coalesced — while a path is in flight,
/// further changes collapse into a single pending re-run that starts when
/// the current transpile completes.
#[derive(Debug, Default)]
pub struct ChangeQueue {
    in_flight: HashSet<PathBuf>,
    pending: HashSet<PathBuf>,
}

impl ChangeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a change to `path`.
    ///
    /// Returns true when the caller should start a transpile now; false when
    /// one is already in flight and the change was coalesced into a pending
    /// re-run.
    pub fn try_start(&mut self, path: &Path) -> bool {
        if self.in_flight.contains(path) {
            self.pending.insert(path.to_path_buf());
            debug!(file = ?path, "transpile in flight, change coalesced");
            return false;
        }
        self.in_flight.insert(path.to_path_buf());
        true
    }

    /// Record that the transpile for `path` finished (success or failure).
    ///
    /// Returns true when a change arrived mid-flight and a re-run should
    /// start immediately; in that case the path is already marked in flight
    /// again.
    pub fn finish(&mut self, path: &Path) -> bool {
        self.in_flight.remove(path);
        if self.pending.remove(path) {
            self.in_flight.insert(path.to_path_buf());
            return true;
        }
        false
    }

    /// True when nothing is transpiling and nothing is pending.
    pub fn is_idle(&self) -> bool {
        self.in_flight.is_empty() && self.pending.is_empty()
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }
}
