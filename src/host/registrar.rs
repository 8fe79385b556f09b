// src/host/registrar.rs

use std::collections::HashSet;
use std::path::PathBuf;

use anyhow::Context;
use tracing::{debug, info};

use crate::errors::Result;
use crate::host::DevServer;
use crate::scan::FileRegistry;

/// Registers every registry key with the dev server's watch mechanism at
/// build start.
///
/// Idempotent across invocations: a path already handed to the server is
/// skipped, so running the registrar twice in one session neither duplicates
/// watch entries nor errors.
#[derive(Debug, Default)]
pub struct WatchRegistrar {
    registered: HashSet<PathBuf>,
}

impl WatchRegistrar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register all registry keys with `server`. Returns how many were newly
    /// registered this call.
    pub fn register_all(
        &mut self,
        registry: &FileRegistry,
        server: &mut dyn DevServer,
    ) -> Result<usize> {
        let mut added = 0;

        for file in registry.files() {
            if !self.registered.insert(file.to_path_buf()) {
                debug!(file = ?file, "already registered, skipping");
                continue;
            }
            server
                .add_watch_file(file)
                .with_context(|| format!("registering watch file {file:?}"))?;
            added += 1;
        }

        info!(
            added,
            total = self.registered.len(),
            "registered external watch files"
        );
        Ok(added)
    }
}
