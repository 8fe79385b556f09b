// src/transpile/esbuild.rs

use std::future::Future;
use std::path::PathBuf;
use std::pin::Pin;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::errors::TranspileError;
use crate::transpile::{BuildOutcome, TranspileRequest, Transpiler};

/// Production transpiler: one `esbuild` process per changed file.
///
/// The source contents are piped over stdin; the loader, format, platform and
/// output file are passed as flags, and the source file's directory becomes
/// the working directory so relative imports resolve against it. esbuild
/// writes the artifact itself.
///
/// There is no timeout: a hanging build stalls only that one file's reload,
/// never the process.
pub struct EsbuildTranspiler {
    program: PathBuf,
}

impl EsbuildTranspiler {
    /// `program` is the esbuild executable, e.g. `"esbuild"` from `PATH` or a
    /// path into `node_modules/.bin`.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for EsbuildTranspiler {
    fn default() -> Self {
        Self::new("esbuild")
    }
}

impl Transpiler for EsbuildTranspiler {
    fn build(
        &self,
        request: TranspileRequest,
    ) -> Pin<Box<dyn Future<Output = Result<BuildOutcome, TranspileError>> + Send + '_>> {
        let program = self.program.clone();

        Box::pin(async move {
            let mut cmd = Command::new(&program);
            cmd.arg(format!("--loader={}", request.loader.as_str()))
                .arg(format!("--format={}", request.format.as_str()))
                .arg(format!("--platform={}", request.platform.as_str()))
                .arg(format!("--outfile={}", request.outfile.display()))
                .current_dir(&request.resolve_dir)
                .stdin(Stdio::piped())
                .stdout(Stdio::piped())
                .stderr(Stdio::piped())
                .kill_on_drop(true);

            debug!(program = ?program, outfile = ?request.outfile, "spawning esbuild");

            let mut child = cmd.spawn().map_err(|source| TranspileError::Spawn {
                program: program.display().to_string(),
                source,
            })?;

            // Feed the file's current contents and close stdin so esbuild
            // knows the input is complete.
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(request.contents.as_bytes()).await?;
                stdin.shutdown().await?;
            }

            let output = child.wait_with_output().await?;
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

            if !output.status.success() {
                return Err(TranspileError::Failed {
                    outfile: request.outfile,
                    status: output.status.code().unwrap_or(-1),
                    stderr,
                });
            }

            // esbuild prints warnings on stderr even on success.
            let warnings: Vec<String> = stderr
                .lines()
                .filter(|l| !l.trim().is_empty())
                .map(str::to_string)
                .collect();

            let bytes_written = tokio::fs::metadata(&request.outfile)
                .await
                .map(|m| m.len())
                .unwrap_or(0);

            Ok(BuildOutcome {
                outfile: request.outfile,
                bytes_written,
                warnings,
            })
        })
    }
}
