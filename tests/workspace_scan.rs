use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use linkwatch::errors::ScanError;
use linkwatch::scan::scan_workspace;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

fn write(root: &Path, rel: &str, contents: &str) -> Result<PathBuf, std::io::Error> {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, contents)?;
    Ok(path)
}

/// Two packages under `packages/*`: `a` with a plain config, `b` inheriting
/// its `outDir` from a base config at the workspace root.
fn build_fixture_workspace(root: &Path) -> Result<(), std::io::Error> {
    write(root, "package.json", r#"{ "workspaces": ["packages/*"] }"#)?;
    write(
        root,
        "tsconfig.base.json",
        r#"{ "compilerOptions": { "outDir": "./build" } }"#,
    )?;

    write(
        root,
        "packages/a/tsconfig.json",
        r#"{ "compilerOptions": { "rootDir": "./src", "outDir": "./dist" } }"#,
    )?;
    write(root, "packages/a/src/foo.ts", "export const foo = 1;\n")?;
    write(root, "packages/a/src/nested/bar.tsx", "export const bar = 2;\n")?;
    write(root, "packages/a/src/notes.md", "# notes\n")?;

    write(
        root,
        "packages/b/tsconfig.json",
        r#"{ "extends": "../../tsconfig.base.json", "compilerOptions": { "rootDir": "./src" } }"#,
    )?;
    write(root, "packages/b/src/index.ts", "export const b = 3;\n")?;

    Ok(())
}

fn file_types(exts: &[&str]) -> Vec<String> {
    exts.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn registers_every_source_file_exactly_once() -> TestResult {
    let tmp = TempDir::new()?;
    build_fixture_workspace(tmp.path())?;
    let root = tmp.path().canonicalize()?;

    let registry = scan_workspace(tmp.path(), &file_types(&["ts", "tsx"])).await?;

    assert_eq!(registry.len(), 3);

    let a_config = root.join("packages/a/tsconfig.json");
    let b_config = root.join("packages/b/tsconfig.json");

    assert_eq!(
        registry.config_for(&root.join("packages/a/src/foo.ts")),
        Some(a_config.as_path())
    );
    assert_eq!(
        registry.config_for(&root.join("packages/a/src/nested/bar.tsx")),
        Some(a_config.as_path())
    );
    assert_eq!(
        registry.config_for(&root.join("packages/b/src/index.ts")),
        Some(b_config.as_path())
    );

    // Unrecognized extensions stay out of the registry.
    assert!(!registry.contains(&root.join("packages/a/src/notes.md")));

    Ok(())
}

#[tokio::test]
async fn custom_file_types_drive_what_gets_registered() -> TestResult {
    let tmp = TempDir::new()?;
    build_fixture_workspace(tmp.path())?;
    let root = tmp.path().canonicalize()?;

    let registry = scan_workspace(tmp.path(), &file_types(&["md"])).await?;

    assert_eq!(registry.len(), 1);
    assert!(registry.contains(&root.join("packages/a/src/notes.md")));

    Ok(())
}

#[tokio::test]
async fn stray_files_in_a_group_directory_are_ignored() -> TestResult {
    let tmp = TempDir::new()?;
    build_fixture_workspace(tmp.path())?;
    write(tmp.path(), "packages/README.md", "not a package\n")?;

    let registry = scan_workspace(tmp.path(), &file_types(&["ts", "tsx"])).await?;
    assert_eq!(registry.len(), 3);

    Ok(())
}

#[tokio::test]
async fn package_without_config_is_fatal() -> TestResult {
    let tmp = TempDir::new()?;
    build_fixture_workspace(tmp.path())?;
    write(tmp.path(), "packages/broken/src/oops.ts", "export {};\n")?;

    let err = scan_workspace(tmp.path(), &file_types(&["ts"]))
        .await
        .expect_err("a package without a config must fail the scan");
    assert!(matches!(err, ScanError::MissingPackageConfig { .. }));

    Ok(())
}

#[tokio::test]
async fn missing_group_directory_is_fatal() -> TestResult {
    let tmp = TempDir::new()?;
    build_fixture_workspace(tmp.path())?;
    write(
        tmp.path(),
        "package.json",
        r#"{ "workspaces": ["packages/*", "tools/*"] }"#,
    )?;

    let err = scan_workspace(tmp.path(), &file_types(&["ts"]))
        .await
        .expect_err("a missing group directory must fail the scan");
    assert!(matches!(err, ScanError::MissingGroup { .. }));

    Ok(())
}

#[tokio::test]
async fn manifest_without_workspaces_is_fatal() -> TestResult {
    let tmp = TempDir::new()?;
    write(tmp.path(), "package.json", r#"{ "name": "not-a-workspace" }"#)?;

    let err = scan_workspace(tmp.path(), &file_types(&["ts"]))
        .await
        .expect_err("a manifest without workspaces must fail the scan");
    assert!(matches!(err, ScanError::NoWorkspaces { .. }));

    Ok(())
}

#[tokio::test]
async fn unresolvable_package_config_is_fatal() -> TestResult {
    let tmp = TempDir::new()?;
    build_fixture_workspace(tmp.path())?;
    // No rootDir anywhere in the chain.
    write(
        tmp.path(),
        "packages/c/tsconfig.json",
        r#"{ "compilerOptions": { "outDir": "./dist" } }"#,
    )?;
    write(tmp.path(), "packages/c/src/index.ts", "export {};\n")?;

    let err = scan_workspace(tmp.path(), &file_types(&["ts"]))
        .await
        .expect_err("an incomplete config must fail the scan");
    assert!(matches!(err, ScanError::Config(_)));

    Ok(())
}
