// src/config/model.rs

use serde::Deserialize;

/// A compiler configuration file as it appears on disk.
///
/// This is a direct mapping of the subset of `tsconfig.json` the watcher
/// cares about:
///
/// ```json
/// {
///     "extends": "../../tsconfig.base.json",
///     "compilerOptions": {
///         "rootDir": "./src",
///         "outDir": "./dist"
///     }
/// }
/// ```
///
/// Everything is optional at this level; completeness is only enforced after
/// the whole `extends` chain has been flattened.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawConfig {
    /// Relative path to a parent configuration, resolved against the
    /// directory containing *this* file.
    pub extends: Option<String>,

    /// The nested option group.
    pub compiler_options: RawCompilerOptions,
}

/// `compilerOptions` group of a configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RawCompilerOptions {
    /// Directory prefix containing input sources, relative to the package.
    pub root_dir: Option<String>,

    /// Directory prefix for compiled outputs, relative to the package.
    pub out_dir: Option<String>,
}

impl RawConfig {
    /// Merge `self` (the child) over `parent`.
    ///
    /// Top-level keys and the nested `compilerOptions` group are each
    /// overridden independently, field by field, with the child winning.
    /// The merge is associative over chain depth, so resolving a chain
    /// recursively or flattening it right-to-left gives the same result.
    pub fn merged_over(self, parent: RawConfig) -> RawConfig {
        RawConfig {
            extends: self.extends.or(parent.extends),
            compiler_options: RawCompilerOptions {
                root_dir: self
                    .compiler_options
                    .root_dir
                    .or(parent.compiler_options.root_dir),
                out_dir: self
                    .compiler_options
                    .out_dir
                    .or(parent.compiler_options.out_dir),
            },
        }
    }
}

/// Fully flattened configuration, ready for use.
///
/// Both directory prefixes are guaranteed present; a chain that leaves either
/// unset fails resolution with a `ConfigError` instead of defaulting.
/// Effectively immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `compilerOptions.rootDir`, e.g. `"./src"`.
    pub root_dir: String,

    /// `compilerOptions.outDir`, e.g. `"./dist"`.
    pub out_dir: String,
}
