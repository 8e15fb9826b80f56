//! Interactive input collection.
//!
//! All prompting goes through [PromptSource] so the collection logic runs
//! under test with scripted input instead of a real console.

use std::collections::VecDeque;
use std::io::{self, Write};

use crate::changelog::{Category, ChangeSet};
use crate::error::Result;
use crate::version::BumpKind;

/// Line-oriented input source for interactive prompts.
pub trait PromptSource {
    /// Display a prompt and read one trimmed line of input
    fn read_line(&mut self, prompt: &str) -> Result<String>;
}

/// Real console input over stdin/stdout.
pub struct StdinPrompt;

impl PromptSource for StdinPrompt {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        print!("{}", prompt);
        io::stdout().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        Ok(input.trim().to_string())
    }
}

/// Scripted input source replaying canned lines, for tests.
///
/// Once the script runs out, every further read returns an empty line,
/// which the collectors treat as "finish" / "use the default".
pub struct ScriptedPrompt {
    lines: VecDeque<String>,
}

impl ScriptedPrompt {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedPrompt {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl PromptSource for ScriptedPrompt {
    fn read_line(&mut self, _prompt: &str) -> Result<String> {
        Ok(self.lines.pop_front().unwrap_or_default())
    }
}

/// Prompts for the bump kind.
///
/// Accepts "major", "minor", or "patch" case-insensitively. Blank input
/// defaults to patch; unrecognized input falls back to patch with a notice.
pub fn select_bump_kind(source: &mut dyn PromptSource) -> Result<BumpKind> {
    let input = source.read_line("Bump kind (patch, minor, major) [patch]: ")?;

    if input.is_empty() {
        return Ok(BumpKind::Patch);
    }

    match BumpKind::parse(&input) {
        Some(kind) => Ok(kind),
        None => {
            println!("Unrecognized bump kind '{}', using patch", input);
            Ok(BumpKind::Patch)
        }
    }
}

/// Collects change descriptions for every category.
///
/// For each category in order, reads free-text lines until a blank line is
/// entered. Empty categories are permitted and common. Content is taken as-is.
pub fn collect_changes(source: &mut dyn PromptSource) -> Result<ChangeSet> {
    println!("\nEnter changes for each category (blank line to finish a category):");

    let mut changes = ChangeSet::new();

    for category in Category::ALL {
        println!("\n{} changes:", category);
        loop {
            let item = source.read_line(&format!("- {} (blank to finish): ", category))?;
            if item.is_empty() {
                break;
            }
            changes.push(category, item);
        }
    }

    Ok(changes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_bump_kind_explicit() {
        let mut source = ScriptedPrompt::new(["minor"]);
        assert_eq!(select_bump_kind(&mut source).unwrap(), BumpKind::Minor);
    }

    #[test]
    fn test_select_bump_kind_case_insensitive() {
        let mut source = ScriptedPrompt::new(["MAJOR"]);
        assert_eq!(select_bump_kind(&mut source).unwrap(), BumpKind::Major);
    }

    #[test]
    fn test_select_bump_kind_defaults_on_blank() {
        let mut source = ScriptedPrompt::new([""]);
        assert_eq!(select_bump_kind(&mut source).unwrap(), BumpKind::Patch);
    }

    #[test]
    fn test_select_bump_kind_defaults_on_invalid() {
        let mut source = ScriptedPrompt::new(["release"]);
        assert_eq!(select_bump_kind(&mut source).unwrap(), BumpKind::Patch);
    }

    #[test]
    fn test_collect_changes() {
        // Added: two items; Changed: none; Fixed: one item; Removed: none
        let mut source = ScriptedPrompt::new([
            "support dark mode",
            "add audit command",
            "",
            "",
            "resolve broken anchors",
            "",
            "",
        ]);

        let changes = collect_changes(&mut source).unwrap();

        assert_eq!(
            changes.items(Category::Added),
            ["support dark mode", "add audit command"]
        );
        assert!(changes.items(Category::Changed).is_empty());
        assert_eq!(changes.items(Category::Fixed), ["resolve broken anchors"]);
        assert!(changes.items(Category::Removed).is_empty());
    }

    #[test]
    fn test_collect_changes_all_empty() {
        let mut source = ScriptedPrompt::new(Vec::<String>::new());
        let changes = collect_changes(&mut source).unwrap();
        assert!(changes.is_empty());
    }
}
