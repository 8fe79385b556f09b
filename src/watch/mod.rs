// src/watch/mod.rs

//! File watching.
//!
//! The standalone binary has no embedding bundler, so this module stands in
//! for the host dev server's watch mechanism: a `notify`-backed
//! implementation of the [`DevServer`](crate::host::DevServer) trait that
//! watches each registered file and turns filesystem events into
//! [`RuntimeEvent::FileChanged`](crate::engine::RuntimeEvent) notifications.
//!
//! It does **not** know about configs or output paths; it only turns
//! filesystem changes into runtime events.

pub mod watcher;

pub use watcher::NotifyDevServer;
