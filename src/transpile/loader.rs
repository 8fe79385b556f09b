// src/transpile/loader.rs

use std::path::Path;

use clap::ValueEnum;

/// Tag telling the external transpiler how to interpret raw file contents.
///
/// Recognized source extensions map to their compile loader; anything
/// unexpected falls back to [`Loader::Text`], which passes contents through
/// verbatim. Selecting a loader never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Loader {
    Ts,
    Js,
    Css,
    Json,
    Text,
}

impl Loader {
    /// Loader for a file extension (without the dot).
    pub fn from_extension(ext: &str) -> Loader {
        match ext {
            "ts" | "tsx" => Loader::Ts,
            "js" | "jsx" => Loader::Js,
            "css" => Loader::Css,
            "json" => Loader::Json,
            _ => Loader::Text,
        }
    }

    /// Loader for a file path, based on its extension.
    pub fn for_path(path: &Path) -> Loader {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Loader::from_extension(ext)
    }

    /// The tag as the transpiler CLI expects it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Loader::Ts => "ts",
            Loader::Js => "js",
            Loader::Css => "css",
            Loader::Json => "json",
            Loader::Text => "text",
        }
    }
}

/// Module format of the transpiled output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModuleFormat {
    Esm,
    Cjs,
}

impl ModuleFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleFormat::Esm => "esm",
            ModuleFormat::Cjs => "cjs",
        }
    }

    /// Target platform derived from the format: CommonJS output targets
    /// node, everything else stays platform-neutral.
    pub fn platform(&self) -> Platform {
        match self {
            ModuleFormat::Cjs => Platform::Node,
            ModuleFormat::Esm => Platform::Neutral,
        }
    }
}

/// Target platform passed to the transpiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Node,
    Neutral,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Node => "node",
            Platform::Neutral => "neutral",
        }
    }
}
