// src/scan/manifest.rs

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::errors::ScanError;

/// File name of the workspace root manifest.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Workspace root descriptor.
///
/// Only the `workspaces` field matters here: a list of glob patterns, each
/// naming a directory that contains zero or more packages, e.g.
///
/// ```json
/// { "workspaces": ["packages/*"] }
/// ```
///
/// Read once at startup; never mutated.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkspaceManifest {
    #[serde(default)]
    pub workspaces: Vec<String>,
}

/// Load the workspace manifest from `<workspace_root>/package.json`.
///
/// A manifest with no `workspaces` patterns is an error: without them there
/// is nothing to watch, and starting in that state would silently do nothing.
pub fn load_manifest(workspace_root: &Path) -> Result<WorkspaceManifest, ScanError> {
    let path = workspace_root.join(MANIFEST_FILE_NAME);

    let contents = fs::read_to_string(&path).map_err(|source| ScanError::ReadManifest {
        path: path.clone(),
        source,
    })?;

    let manifest: WorkspaceManifest =
        serde_json::from_str(&contents).map_err(|source| ScanError::ParseManifest {
            path: path.clone(),
            source,
        })?;

    if manifest.workspaces.is_empty() {
        return Err(ScanError::NoWorkspaces { path });
    }

    Ok(manifest)
}
