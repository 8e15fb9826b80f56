//! Deployment of build artifacts into the target plugin directory.
//!
//! The target's direct file entries are cleared and replaced with the
//! configured artifact list. Subdirectories are left untouched. Missing
//! artifacts are reported, not fatal; partial deployment is accepted.

use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Outcome of a deploy step.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeployReport {
    /// Artifacts copied into the target directory
    pub copied: Vec<String>,
    /// Expected artifacts that were absent from the artifact directory
    pub missing: Vec<String>,
}

/// Clears the target directory's files and copies the build artifacts in.
///
/// The target directory (including parents) is created if absent. Every
/// direct file entry in it is deleted; directories stay. Each named artifact
/// is then copied from `artifact_dir`, preserving permissions. Absent
/// artifacts end up in the report's `missing` list instead of failing the
/// step.
///
/// # Arguments
/// * `artifact_dir` - Directory holding the build outputs
/// * `target_dir` - Deployment target directory
/// * `artifacts` - File names to copy
pub fn deploy(artifact_dir: &Path, target_dir: &Path, artifacts: &[String]) -> Result<DeployReport> {
    fs::create_dir_all(target_dir).map_err(|e| {
        ReleaseError::deploy(format!("Cannot create {}: {}", target_dir.display(), e))
    })?;

    clear_files(target_dir)?;

    let mut report = DeployReport::default();

    for name in artifacts {
        let source = artifact_dir.join(name);
        if source.is_file() {
            fs::copy(&source, target_dir.join(name)).map_err(|e| {
                ReleaseError::deploy(format!("Cannot copy {}: {}", source.display(), e))
            })?;
            report.copied.push(name.clone());
        } else {
            report.missing.push(name.clone());
        }
    }

    Ok(report)
}

/// Deletes every direct file entry in a directory, leaving subdirectories.
fn clear_files(dir: &Path) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            fs::remove_file(entry.path())?;
        }
    }
    Ok(())
}
