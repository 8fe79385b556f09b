use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use linkwatch::config::{self, RawConfig};
use linkwatch::errors::ConfigError;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

fn write_config(dir: &Path, name: &str, json: &str) -> Result<PathBuf, std::io::Error> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, json)?;
    Ok(path)
}

#[test]
fn child_inherits_out_dir_from_base() -> TestResult {
    let tmp = TempDir::new()?;
    write_config(
        tmp.path(),
        "tsconfig.base.json",
        r#"{ "compilerOptions": { "outDir": "./build" } }"#,
    )?;
    let child = write_config(
        tmp.path(),
        "pkg/tsconfig.json",
        r#"{ "extends": "../tsconfig.base.json", "compilerOptions": { "rootDir": "./src" } }"#,
    )?;

    let resolved = config::resolve(&child)?;
    assert_eq!(resolved.root_dir, "./src");
    assert_eq!(resolved.out_dir, "./build");

    Ok(())
}

#[test]
fn child_options_override_parent_options() -> TestResult {
    let tmp = TempDir::new()?;
    write_config(
        tmp.path(),
        "tsconfig.base.json",
        r#"{ "compilerOptions": { "rootDir": "./lib", "outDir": "./build" } }"#,
    )?;
    let child = write_config(
        tmp.path(),
        "pkg/tsconfig.json",
        r#"{ "extends": "../tsconfig.base.json", "compilerOptions": { "outDir": "./dist" } }"#,
    )?;

    let resolved = config::resolve(&child)?;
    assert_eq!(resolved.root_dir, "./lib");
    assert_eq!(resolved.out_dir, "./dist");

    Ok(())
}

#[test]
fn three_level_chain_matches_right_to_left_flattening() -> TestResult {
    let tmp = TempDir::new()?;

    let grandparent_json = r#"{ "compilerOptions": { "rootDir": "./gp-src", "outDir": "./gp-out" } }"#;
    let parent_json = r#"{ "extends": "./tsconfig.gp.json", "compilerOptions": { "outDir": "./p-out" } }"#;
    let child_json = r#"{ "extends": "./tsconfig.p.json", "compilerOptions": {} }"#;

    write_config(tmp.path(), "tsconfig.gp.json", grandparent_json)?;
    write_config(tmp.path(), "tsconfig.p.json", parent_json)?;
    let child_path = write_config(tmp.path(), "tsconfig.json", child_json)?;

    let resolved = config::resolve(&child_path)?;

    // Pre-flatten by hand, merging right-to-left: child over parent over
    // grandparent. The recursive resolver must agree.
    let grandparent: RawConfig = serde_json::from_str(grandparent_json)?;
    let parent: RawConfig = serde_json::from_str(parent_json)?;
    let child: RawConfig = serde_json::from_str(child_json)?;
    let flattened = child.merged_over(parent.merged_over(grandparent));

    assert_eq!(
        resolved.root_dir,
        flattened.compiler_options.root_dir.ok_or("no rootDir")?
    );
    assert_eq!(
        resolved.out_dir,
        flattened.compiler_options.out_dir.ok_or("no outDir")?
    );
    assert_eq!(resolved.root_dir, "./gp-src");
    assert_eq!(resolved.out_dir, "./p-out");

    Ok(())
}

#[test]
fn cyclic_extends_chain_fails_fast() -> TestResult {
    let tmp = TempDir::new()?;
    write_config(
        tmp.path(),
        "tsconfig.a.json",
        r#"{ "extends": "./tsconfig.b.json" }"#,
    )?;
    let a = tmp.path().join("tsconfig.a.json");
    write_config(
        tmp.path(),
        "tsconfig.b.json",
        r#"{ "extends": "./tsconfig.a.json" }"#,
    )?;

    let err = config::resolve(&a).expect_err("cycle must not resolve");
    assert!(matches!(err, ConfigError::CyclicExtends { .. }));

    Ok(())
}

#[test]
fn self_extends_is_a_cycle() -> TestResult {
    let tmp = TempDir::new()?;
    let path = write_config(
        tmp.path(),
        "tsconfig.json",
        r#"{ "extends": "./tsconfig.json", "compilerOptions": { "rootDir": "src", "outDir": "dist" } }"#,
    )?;

    let err = config::resolve(&path).expect_err("self-cycle must not resolve");
    assert!(matches!(err, ConfigError::CyclicExtends { .. }));

    Ok(())
}

#[test]
fn missing_config_file_names_the_path() -> TestResult {
    let tmp = TempDir::new()?;
    let missing = tmp.path().join("nope/tsconfig.json");

    let err = config::resolve(&missing).expect_err("missing file must not resolve");
    assert!(matches!(err, ConfigError::Read { .. }));
    assert!(err.to_string().contains("tsconfig.json"));

    Ok(())
}

#[test]
fn invalid_json_is_a_parse_error() -> TestResult {
    let tmp = TempDir::new()?;
    let path = write_config(tmp.path(), "tsconfig.json", "{ not json")?;

    let err = config::resolve(&path).expect_err("garbage must not resolve");
    assert!(matches!(err, ConfigError::Parse { .. }));

    Ok(())
}

#[test]
fn missing_root_dir_after_flattening_is_an_error() -> TestResult {
    let tmp = TempDir::new()?;
    let path = write_config(
        tmp.path(),
        "tsconfig.json",
        r#"{ "compilerOptions": { "outDir": "./dist" } }"#,
    )?;

    let err = config::resolve(&path).expect_err("rootDir is required");
    assert!(matches!(
        err,
        ConfigError::MissingOption {
            field: "rootDir",
            ..
        }
    ));

    Ok(())
}
