use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Represents the complete configuration for plugin-release.
///
/// Defaults are the compiled-in constants of the release process; an optional
/// `release.toml` can override any of them (useful for pointing the deploy
/// directory at a different vault, or the workflow at a scratch directory in
/// tests).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ReleaseConfig {
    #[serde(default = "default_package_file")]
    pub package_file: PathBuf,

    #[serde(default = "default_manifest_file")]
    pub manifest_file: PathBuf,

    #[serde(default = "default_changelog_file")]
    pub changelog_file: PathBuf,

    /// Directory holding the build outputs (the project root for real runs)
    #[serde(default = "default_artifact_dir")]
    pub artifact_dir: PathBuf,

    /// Build output files copied into the deploy directory
    #[serde(default = "default_build_outputs")]
    pub build_outputs: Vec<String>,

    /// Plugin directory of the host application
    #[serde(default = "default_deploy_dir")]
    pub deploy_dir: PathBuf,

    #[serde(default)]
    pub build: BuildConfig,
}

fn default_package_file() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_manifest_file() -> PathBuf {
    PathBuf::from("manifest.json")
}

fn default_changelog_file() -> PathBuf {
    PathBuf::from("CHANGELOG.md")
}

fn default_artifact_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_build_outputs() -> Vec<String> {
    vec![
        "main.js".to_string(),
        "manifest.json".to_string(),
        "styles.css".to_string(),
    ]
}

fn default_deploy_dir() -> PathBuf {
    PathBuf::from(".obsidian/plugins/link-plugin")
}

/// Configuration for the external build command.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct BuildConfig {
    #[serde(default = "default_build_program")]
    pub program: String,

    #[serde(default = "default_build_args")]
    pub args: Vec<String>,
}

fn default_build_program() -> String {
    "npm".to_string()
}

fn default_build_args() -> Vec<String> {
    vec!["run".to_string(), "build".to_string()]
}

impl Default for BuildConfig {
    fn default() -> Self {
        BuildConfig {
            program: default_build_program(),
            args: default_build_args(),
        }
    }
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            package_file: default_package_file(),
            manifest_file: default_manifest_file(),
            changelog_file: default_changelog_file(),
            artifact_dir: default_artifact_dir(),
            build_outputs: default_build_outputs(),
            deploy_dir: default_deploy_dir(),
            build: BuildConfig::default(),
        }
    }
}

impl ReleaseConfig {
    /// The files staged and committed after a version bump, in staging order
    pub fn commit_paths(&self) -> [&Path; 3] {
        [
            self.changelog_file.as_path(),
            self.package_file.as_path(),
            self.manifest_file.as_path(),
        ]
    }

    /// The metadata files whose version field gets rewritten
    pub fn metadata_files(&self) -> [&Path; 2] {
        [self.package_file.as_path(), self.manifest_file.as_path()]
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in current directory
/// 3. `.plugin-release.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(ReleaseConfig)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<ReleaseConfig, Box<dyn std::error::Error>> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release.toml").exists() {
        fs::read_to_string("./release.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".plugin-release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(ReleaseConfig::default());
        }
    } else {
        return Ok(ReleaseConfig::default());
    };

    let config: ReleaseConfig = toml::from_str(&config_str)?;
    Ok(config)
}
