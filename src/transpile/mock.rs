// src/transpile/mock.rs

//! Fake transpiler for tests.
//!
//! Records every request, optionally sleeps to widen the in-flight window,
//! optionally fails every build, and writes the request contents to the
//! output path so the artifact side effect is observable without esbuild.

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::errors::TranspileError;
use crate::transpile::{BuildOutcome, TranspileRequest, Transpiler};

/// A fake [`Transpiler`] that records which requests were "built".
///
/// Clones share state, so a test can keep one handle for assertions while
/// the runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct FakeTranspiler {
    requests: Arc<Mutex<Vec<TranspileRequest>>>,
    fail: Arc<AtomicBool>,
    delay: Option<Duration>,
}

impl FakeTranspiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep this long inside every build, to let tests overlap changes.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Make every subsequent build fail.
    pub fn fail_builds(&self, fail: bool) {
        self.fail.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of every request received so far, in arrival order.
    pub fn requests(&self) -> Vec<TranspileRequest> {
        self.requests.lock().expect("requests lock poisoned").clone()
    }
}

impl Transpiler for FakeTranspiler {
    fn build(
        &self,
        request: TranspileRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome, TranspileError>> + Send + '_>> {
        let requests = Arc::clone(&self.requests);
        let fail = Arc::clone(&self.fail);
        let delay = self.delay;

        Box::pin(async move {
            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let outfile: PathBuf = request.outfile.clone();
            let contents = request.contents.clone();

            requests
                .lock()
                .expect("requests lock poisoned")
                .push(request);

            if fail.load(Ordering::SeqCst) {
                return Err(TranspileError::Failed {
                    outfile,
                    status: 1,
                    stderr: "fake transpiler failure".to_string(),
                });
            }

            if let Some(parent) = outfile.parent() {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&outfile, contents.as_bytes()).await?;

            Ok(BuildOutcome {
                bytes_written: contents.len() as u64,
                outfile,
                warnings: Vec::new(),
            })
        })
    }
}
