// tests/config_test.rs
use plugin_release::config::{load_config, ReleaseConfig};
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

#[test]
fn test_default_config() {
    let config = ReleaseConfig::default();
    assert_eq!(config.package_file, PathBuf::from("package.json"));
    assert_eq!(config.manifest_file, PathBuf::from("manifest.json"));
    assert_eq!(config.changelog_file, PathBuf::from("CHANGELOG.md"));
    assert_eq!(config.artifact_dir, PathBuf::from("."));
    assert_eq!(
        config.build_outputs,
        vec!["main.js", "manifest.json", "styles.css"]
    );
    assert_eq!(config.build.program, "npm");
    assert_eq!(config.build.args, vec!["run", "build"]);
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
deploy_dir = "/vault/.obsidian/plugins/linkplugin"
build_outputs = ["main.js", "manifest.json"]

[build]
program = "pnpm"
args = ["build"]
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(
        config.deploy_dir,
        PathBuf::from("/vault/.obsidian/plugins/linkplugin")
    );
    assert_eq!(config.build_outputs, vec!["main.js", "manifest.json"]);
    assert_eq!(config.build.program, "pnpm");
    assert_eq!(config.build.args, vec!["build"]);
    // Unset fields keep their compiled-in defaults
    assert_eq!(config.package_file, PathBuf::from("package.json"));
    assert_eq!(config.changelog_file, PathBuf::from("CHANGELOG.md"));
}

#[test]
fn test_load_missing_custom_path_fails() {
    let result = load_config(Some("/nonexistent/release.toml"));
    assert!(result.is_err());
}

#[test]
fn test_commit_paths_order() {
    let config = ReleaseConfig::default();
    let paths = config.commit_paths();
    assert_eq!(paths[0], PathBuf::from("CHANGELOG.md"));
    assert_eq!(paths[1], PathBuf::from("package.json"));
    assert_eq!(paths[2], PathBuf::from("manifest.json"));
}

#[test]
fn test_metadata_files() {
    let config = ReleaseConfig::default();
    let files = config.metadata_files();
    assert_eq!(files[0], PathBuf::from("package.json"));
    assert_eq!(files[1], PathBuf::from("manifest.json"));
}
