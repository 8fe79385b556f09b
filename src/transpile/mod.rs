// src/transpile/mod.rs

//! Per-change transpilation.
//!
//! This module is responsible for turning "file X changed" into a compiled
//! artifact in the owning package's output directory:
//! - Map extensions to transpiler loaders and output extensions
//!   (`loader.rs`).
//! - Compute output paths by substituting `rootDir` with `outDir`
//!   (`paths.rs`).
//! - Drive the external `esbuild` binary (`esbuild.rs`).
//!
//! The external transpiler is behind the [`Transpiler`] trait so tests can
//! substitute a fake (`mock.rs`) without spawning processes.

pub mod esbuild;
pub mod loader;
pub mod mock;
pub mod paths;

use std::future::Future;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;

use tokio::fs;
use tracing::debug;

use crate::config;
use crate::errors::TranspileError;
use crate::scan::FileRegistry;

pub use esbuild::EsbuildTranspiler;
pub use loader::{Loader, ModuleFormat, Platform};

/// Everything the external transpiler needs for one single-file build.
#[derive(Debug, Clone)]
pub struct TranspileRequest {
    /// Current contents of the changed source file.
    pub contents: String,
    /// How the transpiler should interpret the contents.
    pub loader: Loader,
    /// Directory imports are resolved against (the source file's directory).
    pub resolve_dir: PathBuf,
    /// Where the compiled artifact must be written.
    pub outfile: PathBuf,
    /// Requested module format for the output.
    pub format: ModuleFormat,
    /// Target platform, derived from the format.
    pub platform: Platform,
}

/// Build-result descriptor returned by a transpiler.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Path the artifact was written to.
    pub outfile: PathBuf,
    /// Size of the artifact on disk.
    pub bytes_written: u64,
    /// Non-fatal diagnostics emitted during the build.
    pub warnings: Vec<String>,
}

/// Trait abstracting the external single-file transpiler.
///
/// Production code uses [`EsbuildTranspiler`]; tests can provide an
/// implementation that records requests and writes canned output.
pub trait Transpiler: Send + Sync {
    /// Compile one file. Writes the artifact to `request.outfile` as a side
    /// effect and returns a descriptor of what was built.
    fn build(
        &self,
        request: TranspileRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome, TranspileError>> + Send + '_>>;
}

/// The change-handling core: registry lookup, fresh config resolution,
/// output-path computation, and the transpiler invocation.
///
/// One instance lives for the whole session and is shared (via `Arc`) between
/// the runtime loop and the transpile tasks it spawns.
pub struct ChangeTranspiler {
    registry: Arc<FileRegistry>,
    format: ModuleFormat,
    transpiler: Arc<dyn Transpiler>,
}

impl ChangeTranspiler {
    pub fn new(
        registry: Arc<FileRegistry>,
        format: ModuleFormat,
        transpiler: Arc<dyn Transpiler>,
    ) -> Self {
        Self {
            registry,
            format,
            transpiler,
        }
    }

    /// Whether `file` is one of the registered source files.
    pub fn manages(&self, file: &Path) -> bool {
        self.registry.contains(file)
    }

    /// Handle a change to `file`.
    ///
    /// Returns `Ok(None)` when the file is not in the registry: changes to
    /// unmanaged files are a no-op, not an error. Otherwise re-resolves the
    /// governing configuration (fresh, so config edits since scan time are
    /// honored), computes the output path, and invokes the transpiler with
    /// the file's current contents.
    pub async fn on_change(&self, file: &Path) -> Result<Option<BuildOutcome>, TranspileError> {
        let Some(config_path) = self.registry.config_for(file) else {
            debug!(file = ?file, "change outside the registry, ignoring");
            return Ok(None);
        };

        let resolved = config::resolve(config_path)?;

        let loader = Loader::for_path(file);
        let outfile = paths::output_file(file, &resolved.root_dir, &resolved.out_dir);
        let resolve_dir = file
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();

        let contents = fs::read_to_string(file)
            .await
            .map_err(|source| TranspileError::ReadSource {
                path: file.to_path_buf(),
                source,
            })?;

        debug!(
            file = ?file,
            loader = loader.as_str(),
            outfile = ?outfile,
            "transpiling changed file"
        );

        let request = TranspileRequest {
            contents,
            loader,
            resolve_dir,
            outfile,
            format: self.format,
            platform: self.format.platform(),
        };

        let outcome = self.transpiler.build(request).await?;
        Ok(Some(outcome))
    }
}
