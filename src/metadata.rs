//! Version field extraction and in-place substitution for metadata files.
//!
//! Both descriptors (package + manifest) carry a single `"version": "x.y.z"`
//! field. Only that field's value is rewritten; all other bytes are preserved.

use regex::Regex;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};
use crate::version::{parse_version, Version};

/// Pattern matching the version field in a metadata descriptor.
fn version_field_regex() -> Regex {
    Regex::new(r#"("version":\s*")([^"]+)(")"#).expect("version field pattern is valid")
}

/// Extracts the raw version field value from metadata content.
pub fn read_version_field(content: &str) -> Option<String> {
    version_field_regex()
        .captures(content)
        .map(|caps| caps[2].to_string())
}

/// Reads and parses the current version from a metadata file.
///
/// # Arguments
/// * `path` - Path to the package descriptor
///
/// # Returns
/// * `Ok(Version)` - Parsed version
/// * `Err` - If the file is unreadable, has no version field, or the field is malformed
pub fn current_version(path: &Path) -> Result<Version> {
    let content = fs::read_to_string(path)?;

    let field = read_version_field(&content).ok_or_else(|| {
        ReleaseError::metadata(format!("No version field found in {}", path.display()))
    })?;

    parse_version(&field).ok_or_else(|| {
        ReleaseError::metadata(format!(
            "Malformed version '{}' in {}",
            field,
            path.display()
        ))
    })
}

/// Replaces the version field value in metadata content, leaving everything else untouched.
pub fn substitute_version(content: &str, version: &Version) -> String {
    let replacement = format!("${{1}}{}${{3}}", version);
    version_field_regex()
        .replace(content, replacement.as_str())
        .into_owned()
}

/// Writes the new version into every given metadata file.
///
/// All files are read and validated before any file is written, so a missing
/// or unreadable version field leaves every file untouched.
///
/// # Arguments
/// * `paths` - Metadata files to rewrite
/// * `version` - The new version to substitute
pub fn apply_version(paths: &[&Path], version: &Version) -> Result<()> {
    let mut updates = Vec::with_capacity(paths.len());

    for path in paths {
        let content = fs::read_to_string(path)?;
        if read_version_field(&content).is_none() {
            return Err(ReleaseError::metadata(format!(
                "No version field found in {}",
                path.display()
            )));
        }
        updates.push((*path, substitute_version(&content, version)));
    }

    for (path, content) in updates {
        fs::write(path, content)?;
    }

    Ok(())
}
