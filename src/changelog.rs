//! Changelog section rendering and insertion.
//!
//! New sections go immediately above the first existing version heading, so
//! the file reads newest-first. A changelog without any version heading gets
//! the new section at the very top.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};
use crate::version::Version;

/// Prefix identifying a version heading line in the changelog.
const VERSION_HEADING_PREFIX: &str = "## [";

/// Release note categories, in prompt and output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Added,
    Changed,
    Fixed,
    Removed,
}

impl Category {
    /// All categories, in the fixed prompt/output order.
    pub const ALL: [Category; 4] = [
        Category::Added,
        Category::Changed,
        Category::Fixed,
        Category::Removed,
    ];

    /// Display name used for prompts and `###` subsection headings.
    pub fn name(&self) -> &'static str {
        match self {
            Category::Added => "Added",
            Category::Changed => "Changed",
            Category::Fixed => "Fixed",
            Category::Removed => "Removed",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Categorized release notes for one version.
///
/// Items keep their insertion order within a category; categories with no
/// items are omitted from rendered output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangeSet {
    entries: BTreeMap<Category, Vec<String>>,
}

impl ChangeSet {
    /// Create an empty change set
    pub fn new() -> Self {
        ChangeSet::default()
    }

    /// Add one item under a category
    pub fn push(&mut self, category: Category, item: impl Into<String>) {
        self.entries.entry(category).or_default().push(item.into());
    }

    /// Items recorded for a category, in insertion order
    pub fn items(&self, category: Category) -> &[String] {
        self.entries
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True if no category has any items
    pub fn is_empty(&self) -> bool {
        self.entries.values().all(Vec::is_empty)
    }
}

/// Renders a changelog section for one version.
///
/// Produces `## [version] - YYYY-MM-DD`, a blank line, then one `###`
/// subsection per non-empty category with its items as bullets.
pub fn render_section(version: &Version, date: NaiveDate, changes: &ChangeSet) -> String {
    let mut section = String::new();

    section.push_str(&format!(
        "## [{}] - {}\n\n",
        version,
        date.format("%Y-%m-%d")
    ));

    for category in Category::ALL {
        let items = changes.items(category);
        if items.is_empty() {
            continue;
        }

        section.push_str(&format!("### {}\n\n", category));
        for item in items {
            section.push_str(&format!("- {}\n", item));
        }
        section.push('\n');
    }

    section
}

/// Byte offset of the first version heading line, if any.
fn first_heading_offset(content: &str) -> Option<usize> {
    let mut offset = 0;
    for line in content.split_inclusive('\n') {
        if line.starts_with(VERSION_HEADING_PREFIX) {
            return Some(offset);
        }
        offset += line.len();
    }
    None
}

/// Splices a rendered section into changelog content.
///
/// Insertion point is immediately before the first `## [` heading line, or the
/// top of the file when no version heading exists yet. All surrounding bytes
/// are preserved.
pub fn insert_section(content: &str, section: &str) -> String {
    let insert_at = first_heading_offset(content).unwrap_or(0);

    let mut updated = String::with_capacity(content.len() + section.len());
    updated.push_str(&content[..insert_at]);
    updated.push_str(section);
    updated.push_str(&content[insert_at..]);
    updated
}

/// Rewrites the changelog file with a new section for the given version.
///
/// An unreadable changelog is fatal; there is no other error path.
pub fn update_changelog(
    path: &Path,
    version: &Version,
    changes: &ChangeSet,
    date: NaiveDate,
) -> Result<()> {
    let content = fs::read_to_string(path).map_err(|e| {
        ReleaseError::changelog(format!("Cannot read {}: {}", path.display(), e))
    })?;

    let section = render_section(version, date, changes);
    fs::write(path, insert_section(&content, &section))?;

    Ok(())
}
