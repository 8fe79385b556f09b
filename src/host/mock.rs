// src/host/mock.rs

//! Recording dev server for tests.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::errors::Result;
use crate::host::{DevServer, HmrMessage};

/// A fake [`DevServer`] that records watch registrations and sent messages.
///
/// Clones share state, so a test can keep one handle for assertions while
/// the runtime owns another.
#[derive(Debug, Clone, Default)]
pub struct RecordingDevServer {
    inner: Arc<Mutex<Recorded>>,
}

#[derive(Debug, Default)]
struct Recorded {
    watched: Vec<PathBuf>,
    messages: Vec<HmrMessage>,
}

impl RecordingDevServer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every path registered so far, in registration order.
    pub fn watched(&self) -> Vec<PathBuf> {
        self.inner.lock().expect("recorder lock poisoned").watched.clone()
    }

    /// Every message sent so far, in send order.
    pub fn messages(&self) -> Vec<HmrMessage> {
        self.inner.lock().expect("recorder lock poisoned").messages.clone()
    }
}

impl DevServer for RecordingDevServer {
    fn add_watch_file(&mut self, path: &Path) -> Result<()> {
        self.inner
            .lock()
            .expect("recorder lock poisoned")
            .watched
            .push(path.to_path_buf());
        Ok(())
    }

    fn send(&mut self, message: &HmrMessage) -> Result<()> {
        self.inner
            .lock()
            .expect("recorder lock poisoned")
            .messages
            .push(*message);
        Ok(())
    }
}
