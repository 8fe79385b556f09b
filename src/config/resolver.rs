// src/config/resolver.rs

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::{RawConfig, ResolvedConfig};
use crate::errors::ConfigError;

/// File name of the per-package compiler configuration.
pub const CONFIG_FILE_NAME: &str = "tsconfig.json";

/// Resolve the configuration file at `config_path` into a flattened result.
///
/// If the file declares an `extends` parent (relative to its own directory),
/// the parent is resolved first and the child is merged over it; this repeats
/// until a file declares no parent. A chain that revisits a file fails with
/// [`ConfigError::CyclicExtends`] instead of recursing unboundedly.
///
/// `rootDir` and `outDir` must both be present after flattening; a chain that
/// leaves either unset is a configuration error, never silently defaulted.
pub fn resolve(config_path: &Path) -> Result<ResolvedConfig, ConfigError> {
    let mut visited = HashSet::new();
    let raw = resolve_raw(config_path, &mut visited)?;

    let root_dir = raw
        .compiler_options
        .root_dir
        .ok_or_else(|| ConfigError::MissingOption {
            path: config_path.to_path_buf(),
            field: "rootDir",
        })?;
    let out_dir = raw
        .compiler_options
        .out_dir
        .ok_or_else(|| ConfigError::MissingOption {
            path: config_path.to_path_buf(),
            field: "outDir",
        })?;

    debug!(config = ?config_path, %root_dir, %out_dir, "resolved compiler config");

    Ok(ResolvedConfig { root_dir, out_dir })
}

/// Recursive step: read one file, resolve its parent chain, merge child over
/// parent. `visited` holds every config file already on the current chain.
fn resolve_raw(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<RawConfig, ConfigError> {
    // Canonicalize for cycle detection so `a/../a/tsconfig.json` and
    // `a/tsconfig.json` count as the same file. Best-effort: if the file
    // doesn't exist, the read below reports it with the original path.
    let key = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(key) {
        return Err(ConfigError::CyclicExtends {
            path: path.to_path_buf(),
        });
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let child: RawConfig =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match child.extends.clone() {
        Some(ref extends) => {
            let parent_path = path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join(extends);
            debug!(config = ?path, parent = ?parent_path, "following `extends`");
            let parent = resolve_raw(&parent_path, visited)?;
            Ok(child.merged_over(parent))
        }
        None => Ok(child),
    }
}
