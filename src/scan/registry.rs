// src/scan/registry.rs

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Mapping from absolute source file path to the compiler configuration file
/// that governs it.
///
/// Built exactly once by the scanner and treated as immutable from then on:
/// the watch registrar iterates its keys at build start, and the change
/// pipeline looks changed paths up in it for the rest of the session. There
/// is no ambient or static copy; the registry is passed by reference (or
/// `Arc`) into everything that needs it.
#[derive(Debug, Clone, Default)]
pub struct FileRegistry {
    entries: BTreeMap<PathBuf, PathBuf>,
}

impl FileRegistry {
    /// Build a registry from `(source file, config file)` pairs.
    ///
    /// Keys are unique; a later pair for the same source path overwrites the
    /// earlier one. In practice the scanner produces disjoint entries per
    /// package, so this never triggers.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (PathBuf, PathBuf)>,
    {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// Path of the configuration file governing `file`, if registered.
    pub fn config_for(&self, file: &Path) -> Option<&Path> {
        self.entries.get(file).map(PathBuf::as_path)
    }

    /// Whether `file` is one of the registered source files.
    pub fn contains(&self, file: &Path) -> bool {
        self.entries.contains_key(file)
    }

    /// All registered source file paths.
    pub fn files(&self) -> impl Iterator<Item = &Path> {
        self.entries.keys().map(PathBuf::as_path)
    }

    /// All `(source file, config file)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.entries
            .iter()
            .map(|(file, config)| (file.as_path(), config.as_path()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
