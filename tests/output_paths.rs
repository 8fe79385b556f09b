use std::path::Path;

use linkwatch::transpile::paths::{output_dir, output_extension, output_file};
use linkwatch::transpile::{Loader, ModuleFormat, Platform};

#[test]
fn source_root_prefix_is_substituted_with_output_root() {
    let file = Path::new("/ws/packages/a/src/foo.ts");
    assert_eq!(
        output_file(file, "src", "dist"),
        Path::new("/ws/packages/a/dist/foo.js")
    );
}

#[test]
fn dot_slash_prefixes_are_equivalent_to_bare_names() {
    let file = Path::new("/ws/packages/a/src/foo.ts");
    assert_eq!(
        output_file(file, "./src", "./dist"),
        output_file(file, "src", "dist")
    );
}

#[test]
fn nested_directories_are_preserved() {
    let file = Path::new("/ws/packages/a/src/deep/nested/bar.tsx");
    assert_eq!(
        output_file(file, "src", "dist"),
        Path::new("/ws/packages/a/dist/deep/nested/bar.js")
    );
}

#[test]
fn output_dir_is_a_pure_function() {
    let file = Path::new("/ws/packages/a/src/foo.ts");
    let first = output_dir(file, "src", "dist");
    let second = output_dir(file, "src", "dist");
    assert_eq!(first, second);
    assert_eq!(first, Path::new("/ws/packages/a/dist"));
}

#[test]
fn source_extensions_compile_to_js() {
    assert_eq!(output_extension("ts"), "js");
    assert_eq!(output_extension("tsx"), "js");
    assert_eq!(output_extension("js"), "js");
    assert_eq!(output_extension("jsx"), "js");
}

#[test]
fn passthrough_and_fallback_extensions() {
    assert_eq!(output_extension("css"), "css");
    assert_eq!(output_extension("json"), "json");
    assert_eq!(output_extension("md"), "txt");
    assert_eq!(output_extension(""), "txt");
}

#[test]
fn unrecognized_extension_falls_back_to_text_output() {
    let file = Path::new("/ws/packages/a/src/notes.md");
    assert_eq!(
        output_file(file, "src", "dist"),
        Path::new("/ws/packages/a/dist/notes.txt")
    );
}

#[test]
fn loaders_follow_the_extension() {
    assert_eq!(Loader::from_extension("ts"), Loader::Ts);
    assert_eq!(Loader::from_extension("tsx"), Loader::Ts);
    assert_eq!(Loader::from_extension("js"), Loader::Js);
    assert_eq!(Loader::from_extension("jsx"), Loader::Js);
    assert_eq!(Loader::from_extension("css"), Loader::Css);
    assert_eq!(Loader::from_extension("json"), Loader::Json);
    assert_eq!(Loader::from_extension("md"), Loader::Text);
    assert_eq!(Loader::for_path(Path::new("a/b/c.weird")), Loader::Text);
}

#[test]
fn platform_follows_the_module_format() {
    assert_eq!(ModuleFormat::Cjs.platform(), Platform::Node);
    assert_eq!(ModuleFormat::Esm.platform(), Platform::Neutral);
}
