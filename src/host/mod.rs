// src/host/mod.rs

//! Seam to the host dev server.
//!
//! The bundler's dev server is an external collaborator: all we consume from
//! it is a "watch this file" registration call, and all we produce is a
//! discriminated reload message. [`DevServer`] captures exactly that surface
//! so the standalone binary can back it with a local `notify` watcher while
//! tests use a recorder.

pub mod mock;
pub mod registrar;

use std::path::Path;

use serde::Serialize;

use crate::errors::Result;

pub use registrar::WatchRegistrar;

/// Message sent to the dev server's client channel.
///
/// Only a full reload is ever requested: the plugin cannot model the
/// consuming package's internal module graph, so correctness wins over
/// granularity. Serializes as `{"type":"full-reload"}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HmrMessage {
    FullReload,
}

/// The dev-server surface this plugin consumes and produces to.
pub trait DevServer: Send {
    /// Register `path` as an extra file to watch, even though it lives
    /// outside the package the server is actively building.
    fn add_watch_file(&mut self, path: &Path) -> Result<()>;

    /// Push a message to connected clients.
    fn send(&mut self, message: &HmrMessage) -> Result<()>;
}
