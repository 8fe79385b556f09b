// src/engine/runtime.rs

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::queue::ChangeQueue;
use crate::errors::TranspileError;
use crate::host::{DevServer, HmrMessage};
use crate::transpile::{BuildOutcome, ChangeTranspiler};

/// Events sent into the runtime from the watcher, transpile tasks, or
/// external signals.
#[derive(Debug)]
pub enum RuntimeEvent {
    /// A watched file changed on disk.
    FileChanged { path: PathBuf },
    /// A spawned transpile task finished, successfully or not.
    TranspileFinished {
        path: PathBuf,
        outcome: Result<Option<BuildOutcome>, TranspileError>,
    },
    ShutdownRequested,
}

/// The main orchestration runtime.
///
/// Responsibilities:
/// - Consume `RuntimeEvent`s from the watcher, transpile tasks and Ctrl-C.
/// - Apply single-flight semantics per source path via [`ChangeQueue`].
/// - Dispatch transpiles as independent tokio tasks.
/// - Send the full-reload message after each successful transpile.
///
/// Per-change failures are logged with the offending file and swallowed:
/// the runtime and every subsequent change stay usable, and nothing here
/// ever crashes the host process.
pub struct Runtime {
    handler: Arc<ChangeTranspiler>,
    queue: ChangeQueue,
    server: Box<dyn DevServer>,

    /// Unified event stream from all producers.
    events_rx: mpsc::Receiver<RuntimeEvent>,

    /// Sender handed to spawned transpile tasks so they can report back.
    events_tx: mpsc::Sender<RuntimeEvent>,
}

impl Runtime {
    pub fn new(
        handler: Arc<ChangeTranspiler>,
        server: Box<dyn DevServer>,
        events_rx: mpsc::Receiver<RuntimeEvent>,
        events_tx: mpsc::Sender<RuntimeEvent>,
    ) -> Self {
        Self {
            handler,
            queue: ChangeQueue::new(),
            server,
            events_rx,
            events_tx,
        }
    }

    /// Main event loop. Runs until shutdown is requested or every sender is
    /// gone.
    pub async fn run(mut self) -> Result<()> {
        info!("linkwatch runtime started");

        while let Some(event) = self.events_rx.recv().await {
            debug!(?event, "runtime received event");

            match event {
                RuntimeEvent::FileChanged { path } => self.handle_file_changed(path),
                RuntimeEvent::TranspileFinished { path, outcome } => {
                    self.handle_transpile_finished(path, outcome)
                }
                RuntimeEvent::ShutdownRequested => {
                    info!("shutdown requested, stopping runtime");
                    break;
                }
            }
        }

        info!("linkwatch runtime exiting");
        Ok(())
    }

    fn handle_file_changed(&mut self, path: PathBuf) {
        if !self.handler.manages(&path) {
            debug!(file = ?path, "change outside the registry, ignoring");
            return;
        }

        if !self.queue.try_start(&path) {
            return;
        }

        self.spawn_transpile(path);
    }

    fn handle_transpile_finished(
        &mut self,
        path: PathBuf,
        outcome: Result<Option<BuildOutcome>, TranspileError>,
    ) {
        match outcome {
            Ok(Some(build)) => {
                info!(
                    file = ?path,
                    outfile = ?build.outfile,
                    bytes = build.bytes_written,
                    "transpiled, requesting full reload"
                );
                for warning in &build.warnings {
                    warn!(file = ?path, "transpiler warning: {warning}");
                }
                if let Err(err) = self.server.send(&HmrMessage::FullReload) {
                    warn!(file = ?path, error = %err, "failed to send reload message");
                }
            }
            Ok(None) => {
                debug!(file = ?path, "file no longer managed, nothing transpiled");
            }
            Err(err) => {
                warn!(file = ?path, error = %err, "transpile failed, skipping reload");
            }
        }

        if self.queue.finish(&path) {
            debug!(file = ?path, "starting coalesced re-run");
            self.spawn_transpile(path);
        }
    }

    /// Run one transpile as an independent task; the result comes back as a
    /// `TranspileFinished` event.
    fn spawn_transpile(&self, path: PathBuf) {
        let handler = Arc::clone(&self.handler);
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = handler.on_change(&path).await;
            if tx
                .send(RuntimeEvent::TranspileFinished { path, outcome })
                .await
                .is_err()
            {
                warn!("runtime channel closed before transpile result could be delivered");
            }
        });
    }
}
