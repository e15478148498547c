use std::fs;
use tempfile::TempDir;
use wrapgen::load_module;

fn fixture_package(files: &[(&str, &str)]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("Cargo.toml"),
        "[package]\nname = \"demo-app\"\nversion = \"0.1.0\"\nedition = \"2021\"\n",
    )
    .unwrap();
    for (rel, content) in files {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }
    dir
}

#[test]
fn test_package_root_resolves_to_crate() {
    let dir = fixture_package(&[("src/lib.rs", "pub struct A;\n")]);
    let info = load_module(dir.path()).unwrap();
    assert_eq!(info.path, "crate");
    // crate root takes the package name, hyphens mapped to underscores
    assert_eq!(info.name, "demo_app");
    assert!(info.types.contains_key("A"));
}

#[test]
fn test_file_module_resolves_to_its_segment() {
    let dir = fixture_package(&[
        ("src/lib.rs", "mod models;\n"),
        ("src/models.rs", "pub struct Config { pub id: u64 }\n"),
    ]);
    let info = load_module(&dir.path().join("src/models.rs")).unwrap();
    assert_eq!(info.path, "crate::models");
    assert_eq!(info.name, "models");
}

#[test]
fn test_directory_module_resolves_mod_rs() {
    let dir = fixture_package(&[
        ("src/lib.rs", "mod deep;\n"),
        ("src/deep/mod.rs", "pub struct Inner;\n"),
    ]);
    let info = load_module(&dir.path().join("src/deep")).unwrap();
    assert_eq!(info.path, "crate::deep");
    assert_eq!(info.name, "deep");
    assert!(info.types.contains_key("Inner"));
}

#[test]
fn test_loading_tolerates_code_that_does_not_compile() {
    // type errors, unknown attributes, missing crates: none of it matters,
    // only declaration shape is read
    let lib = r#"
use missing_crate::Nothing;

pub struct Config {
    #[wrapstruct("Renamed")]
    pub id: u64,
}

fn broken() -> i32 {
    let x: i32 = "not an i32";
    undefined_function(x)
}
"#;
    let dir = fixture_package(&[("src/lib.rs", lib)]);
    let info = load_module(dir.path()).unwrap();
    assert!(info.types.contains_key("Config"));
}

#[test]
fn test_unparsable_module_file_is_fatal() {
    let dir = fixture_package(&[("src/lib.rs", "fn {\n")]);
    let err = load_module(dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_missing_path_is_fatal() {
    let dir = fixture_package(&[("src/lib.rs", "")]);
    let err = load_module(&dir.path().join("src/nope.rs")).unwrap_err();
    assert!(err.to_string().contains("cannot be located"));
}

#[test]
fn test_directory_without_module_file_is_fatal() {
    let dir = fixture_package(&[("src/lib.rs", ""), ("empty/.keep", "")]);
    let err = load_module(&dir.path().join("empty")).unwrap_err();
    assert!(err.to_string().contains("no module file"));
}

#[test]
fn test_module_outside_cargo_package_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("stray.rs"), "pub struct A;\n").unwrap();
    let err = load_module(&dir.path().join("stray.rs")).unwrap_err();
    assert!(err.to_string().contains("Cargo package"));
}
