// src/transpile/paths.rs

//! Output-path computation.
//!
//! Pure functions of `(file path, rootDir, outDir)`: the output directory is
//! the file's directory with the `rootDir` prefix substituted by the `outDir`
//! prefix, and the output file keeps the stem while the extension maps to its
//! compiled form. No filesystem lookups happen here.

use std::path::{Path, PathBuf};

/// Output directory for `file`: its directory with the first occurrence of
/// the `root_dir` prefix replaced by `out_dir`. Leading `./` on either prefix
/// is ignored.
pub fn output_dir(file: &Path, root_dir: &str, out_dir: &str) -> PathBuf {
    let dir = file.parent().unwrap_or_else(|| Path::new(""));
    let root = strip_dot_prefix(root_dir);
    let out = strip_dot_prefix(out_dir);
    PathBuf::from(dir.to_string_lossy().replacen(root, out, 1))
}

/// Full output file path for `file`: [`output_dir`] plus the file's stem with
/// the extension mapped via [`output_extension`].
pub fn output_file(file: &Path, root_dir: &str, out_dir: &str) -> PathBuf {
    let dir = output_dir(file, root_dir, out_dir);
    let stem = file
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = file.extension().and_then(|e| e.to_str()).unwrap_or("");
    dir.join(format!("{stem}.{}", output_extension(ext)))
}

/// Compiled-output extension for an input extension (without dots).
///
/// Source language extensions compile to `js`; stylesheets and structured
/// data pass through; anything unrecognized maps to the `txt` fallback.
pub fn output_extension(ext: &str) -> &'static str {
    match ext {
        "ts" | "tsx" | "js" | "jsx" => "js",
        "css" => "css",
        "json" => "json",
        _ => "txt",
    }
}

fn strip_dot_prefix(dir: &str) -> &str {
    let dir = dir.strip_prefix("./").unwrap_or(dir);
    dir.trim_end_matches('/')
}
