// src/watch/watcher.rs

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::engine::RuntimeEvent;
use crate::errors::Result;
use crate::host::{DevServer, HmrMessage};

/// `notify`-backed stand-in for the host dev server.
///
/// `add_watch_file` registers a path with the underlying
/// `RecommendedWatcher` (non-recursively, since registry keys are files, not
/// directories) and is idempotent per path. `send` has no browser to talk
/// to, so reload messages are logged in their wire form.
///
/// Dropping this value stops file watching.
pub struct NotifyDevServer {
    watcher: RecommendedWatcher,
    watched: HashSet<PathBuf>,
}

impl std::fmt::Debug for NotifyDevServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotifyDevServer")
            .field("watched", &self.watched.len())
            .finish_non_exhaustive()
    }
}

impl NotifyDevServer {
    /// Create the watcher and spawn the bridge task that forwards change
    /// events into the runtime via `events_tx`.
    pub fn new(events_tx: mpsc::Sender<RuntimeEvent>) -> Result<Self> {
        // Channel from the blocking notify callback into the async world.
        let (raw_tx, mut raw_rx) = mpsc::unbounded_channel::<Event>();

        let watcher = RecommendedWatcher::new(
            move |res: notify::Result<Event>| match res {
                Ok(event) => {
                    if let Err(err) = raw_tx.send(event) {
                        // We can't log via tracing here easily, so fallback to stderr.
                        eprintln!("linkwatch: failed to forward notify event: {err}");
                    }
                }
                Err(err) => {
                    eprintln!("linkwatch: file watch error: {err}");
                }
            },
            Config::default(),
        )?;

        // Async task that consumes notify events and forwards file changes
        // to the runtime.
        tokio::spawn(async move {
            while let Some(event) = raw_rx.recv().await {
                if !is_mutation(&event.kind) {
                    continue;
                }
                for path in event.paths {
                    // Registry keys are canonical; events through symlinks
                    // may not be.
                    let path = path.canonicalize().unwrap_or(path);
                    debug!(file = ?path, kind = ?event.kind, "file change observed");
                    if events_tx
                        .send(RuntimeEvent::FileChanged { path })
                        .await
                        .is_err()
                    {
                        // Runtime is gone; no point keeping the loop alive.
                        return;
                    }
                }
            }

            debug!("file watcher loop ended");
        });

        Ok(Self {
            watcher,
            watched: HashSet::new(),
        })
    }
}

impl DevServer for NotifyDevServer {
    fn add_watch_file(&mut self, path: &Path) -> Result<()> {
        if !self.watched.insert(path.to_path_buf()) {
            return Ok(());
        }
        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .with_context(|| format!("watching {path:?}"))
    }

    fn send(&mut self, message: &HmrMessage) -> Result<()> {
        let payload = serde_json::to_string(message).context("encoding HMR message")?;
        info!(message = %payload, "reload message for dev-server clients");
        Ok(())
    }
}

/// Only content mutations matter; access events and the catch-all `Any` from
/// some platforms would cause spurious transpiles.
fn is_mutation(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}
