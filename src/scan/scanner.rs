// src/scan/scanner.rs

use std::fs;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::config::{self, CONFIG_FILE_NAME};
use crate::errors::ScanError;
use crate::scan::manifest::load_manifest;
use crate::scan::registry::FileRegistry;

/// Source extensions registered when the caller does not override them.
pub const DEFAULT_FILE_TYPES: &[&str] = &["ts", "tsx"];

/// Scan the workspace rooted at `workspace_root` into a file registry.
///
/// - Reads `<root>/package.json` for the `workspaces` glob patterns.
/// - Each pattern names a workspace group directory (the pattern with its
///   glob component stripped, e.g. `"packages/*"` -> `packages/`); every
///   subdirectory of a group is a package.
/// - Per package: resolve `<package>/tsconfig.json`, then collect all files
///   under `<package>/<rootDir>` whose extension is in `file_types`.
///
/// Package scans run concurrently and produce disjoint entries; the registry
/// is their order-independent union. Any structural problem (missing group,
/// package without a config, unresolvable config) is fatal: the watcher must
/// not start with a partial registry.
pub async fn scan_workspace(
    workspace_root: &Path,
    file_types: &[String],
) -> Result<FileRegistry, ScanError> {
    // Canonicalize so registry keys line up with the absolute paths the
    // watcher reports. Best-effort, matching the watcher side.
    let root = workspace_root
        .canonicalize()
        .unwrap_or_else(|_| workspace_root.to_path_buf());

    let manifest = load_manifest(&root)?;
    let matcher = extension_matcher(file_types)?;

    let mut scans: JoinSet<Result<Vec<(PathBuf, PathBuf)>, ScanError>> = JoinSet::new();

    for pattern in &manifest.workspaces {
        let group = group_dir(&root, pattern);
        if !group.is_dir() {
            return Err(ScanError::MissingGroup { path: group });
        }

        let dir_entries = fs::read_dir(&group).map_err(|source| ScanError::ListPackages {
            path: group.clone(),
            source,
        })?;

        for entry in dir_entries {
            let entry = entry.map_err(|source| ScanError::ListPackages {
                path: group.clone(),
                source,
            })?;
            let package = entry.path();
            if !package.is_dir() {
                continue;
            }

            let matcher = matcher.clone();
            scans.spawn_blocking(move || scan_package(&package, &matcher));
        }
    }

    let mut entries: Vec<(PathBuf, PathBuf)> = Vec::new();
    while let Some(joined) = scans.join_next().await {
        entries.extend(joined??);
    }

    let registry = FileRegistry::from_entries(entries);
    info!(
        files = registry.len(),
        root = ?root,
        "workspace scan complete"
    );
    Ok(registry)
}

/// Scan a single package directory into `(source file, config file)` pairs.
///
/// The config file is located and *resolved* here so that a broken package
/// fails the scan, but only its path is recorded: resolution is repeated
/// fresh on every change so config edits are honored without a restart.
fn scan_package(package: &Path, matcher: &GlobSet) -> Result<Vec<(PathBuf, PathBuf)>, ScanError> {
    let config_path = package.join(CONFIG_FILE_NAME);
    if !config_path.is_file() {
        return Err(ScanError::MissingPackageConfig {
            path: package.to_path_buf(),
            config_name: CONFIG_FILE_NAME,
        });
    }

    let resolved = config::resolve(&config_path)?;
    let source_root = package.join(strip_dot_prefix(&resolved.root_dir));

    if !source_root.is_dir() {
        warn!(
            package = ?package,
            source_root = ?source_root,
            "configured rootDir does not exist, package contributes no files"
        );
        return Ok(Vec::new());
    }

    let mut pairs = Vec::new();
    for entry in WalkDir::new(&source_root) {
        let entry = entry.map_err(|source| ScanError::WalkSources {
            path: source_root.clone(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        if matcher.is_match(entry.path()) {
            pairs.push((entry.path().to_path_buf(), config_path.clone()));
        }
    }

    debug!(package = ?package, files = pairs.len(), "scanned package");
    Ok(pairs)
}

/// Workspace group directory for a manifest pattern: everything before the
/// first glob metacharacter, e.g. `"packages/*"` -> `<root>/packages`.
fn group_dir(root: &Path, pattern: &str) -> PathBuf {
    let prefix = pattern
        .split(['*', '?', '['])
        .next()
        .unwrap_or(pattern)
        .trim_end_matches('/');
    root.join(prefix)
}

/// Globset matching any path with one of the given extensions.
fn extension_matcher(file_types: &[String]) -> Result<GlobSet, globset::Error> {
    let mut builder = GlobSetBuilder::new();
    for ext in file_types {
        builder.add(Glob::new(&format!("*.{ext}"))?);
    }
    builder.build()
}

/// Trim a leading `./` from a configured directory prefix.
fn strip_dot_prefix(dir: &str) -> &str {
    dir.strip_prefix("./").unwrap_or(dir)
}
