//! The release workflow.
//!
//! A strictly linear sequence over injected capabilities:
//! collect input → bump version → update changelog → commit → build → deploy.
//! The first failing step aborts the rest; completed steps' effects stay in
//! place (no rollback).

use chrono::NaiveDate;

use crate::config::ReleaseConfig;
use crate::deploy;
use crate::error::Result;
use crate::git::Vcs;
use crate::metadata;
use crate::prompt::{self, PromptSource};
use crate::runner::CommandRunner;
use crate::ui;
use crate::version::{bump_version, Version};

/// Result of a completed release run
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    /// The version that was released
    pub version: Version,

    /// Expected build outputs that were absent at deploy time
    pub missing_artifacts: Vec<String>,
}

/// Commit message for a version bump.
pub fn commit_message(version: &Version) -> String {
    format!("Bump version to {} and update changelog", version)
}

/// Runs the whole release sequence.
///
/// # Arguments
/// * `config` - File names, build command, and deploy directory
/// * `source` - Input source for the interactive prompts
/// * `runner` - Capability for running the build command
/// * `vcs` - Capability for staging and committing the release files
/// * `today` - Date stamped into the changelog heading
///
/// # Returns
/// * `Ok(ReleaseOutcome)` - New version plus any artifacts missing at deploy time
/// * `Err` - First failing step; later steps are skipped
pub fn run_release(
    config: &ReleaseConfig,
    source: &mut dyn PromptSource,
    runner: &dyn CommandRunner,
    vcs: &dyn Vcs,
    today: NaiveDate,
) -> Result<ReleaseOutcome> {
    // Collect input
    let bump_kind = prompt::select_bump_kind(source)?;
    let changes = prompt::collect_changes(source)?;

    // Bump version
    let current = metadata::current_version(&config.package_file)?;
    let new_version = bump_version(current.clone(), &bump_kind);
    ui::display_status(&format!(
        "Updating version: {} -> {} ({})",
        current,
        new_version,
        bump_kind.name()
    ));
    metadata::apply_version(&config.metadata_files(), &new_version)?;

    // Update changelog
    crate::changelog::update_changelog(&config.changelog_file, &new_version, &changes, today)?;
    ui::display_success(&format!("Updated changelog with version {}", new_version));

    // Commit
    vcs.stage(&config.commit_paths())?;
    vcs.commit(&commit_message(&new_version))?;
    ui::display_success(&format!("Committed version {} to git", new_version));

    // Build
    ui::display_status("Building plugin...");
    let build_args: Vec<&str> = config.build.args.iter().map(String::as_str).collect();
    runner.run(&config.build.program, &build_args)?;

    // Deploy
    ui::display_status(&format!("Deploying to {}...", config.deploy_dir.display()));
    let report = deploy::deploy(&config.artifact_dir, &config.deploy_dir, &config.build_outputs)?;
    for name in &report.copied {
        ui::display_success(&format!(
            "Copied {} to {}",
            name,
            config.deploy_dir.display()
        ));
    }
    for name in &report.missing {
        ui::display_warning(&format!("{} not found, skipped", name));
    }

    Ok(ReleaseOutcome {
        version: new_version,
        missing_artifacts: report.missing,
    })
}
