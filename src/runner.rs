//! External command invocation behind a small capability trait.
//!
//! The workflow only ever checks the exit status; command output streams
//! straight to the operator's console.

use std::cell::RefCell;
use std::process::Command;

use crate::error::{ReleaseError, Result};

/// Capability for running an external command to completion.
pub trait CommandRunner {
    /// Run a command and wait for it; success is solely a zero exit status
    fn run(&self, program: &str, args: &[&str]) -> Result<()>;
}

/// Real runner spawning processes with inherited stdio.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let status = Command::new(program).args(args).status().map_err(|e| {
            ReleaseError::process(format!("Failed to launch {}: {}", program, e))
        })?;

        if !status.success() {
            return Err(ReleaseError::process(format!(
                "{} {} exited with status {}",
                program,
                args.join(" "),
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

/// Recording runner for tests; captures invocations and can be set to fail.
pub struct RecordingRunner {
    invocations: RefCell<Vec<Vec<String>>>,
    fail: bool,
}

impl RecordingRunner {
    /// Create a runner where every invocation succeeds
    pub fn new() -> Self {
        RecordingRunner {
            invocations: RefCell::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a runner where every invocation fails
    pub fn failing() -> Self {
        RecordingRunner {
            invocations: RefCell::new(Vec::new()),
            fail: true,
        }
    }

    /// Recorded invocations, each as program followed by its arguments
    pub fn invocations(&self) -> Vec<Vec<String>> {
        self.invocations.borrow().clone()
    }
}

impl Default for RecordingRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<()> {
        let mut invocation = vec![program.to_string()];
        invocation.extend(args.iter().map(|s| s.to_string()));
        self.invocations.borrow_mut().push(invocation);

        if self.fail {
            return Err(ReleaseError::process(format!(
                "{} exited with status 1",
                program
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_runner_records_invocations() {
        let runner = RecordingRunner::new();

        runner.run("npm", &["run", "build"]).unwrap();

        assert_eq!(
            runner.invocations(),
            vec![vec![
                "npm".to_string(),
                "run".to_string(),
                "build".to_string()
            ]]
        );
    }

    #[test]
    fn test_failing_runner_still_records() {
        let runner = RecordingRunner::failing();

        let result = runner.run("npm", &["run", "build"]);

        assert!(result.is_err());
        assert_eq!(runner.invocations().len(), 1);
    }

    #[test]
    fn test_system_runner_launch_failure() {
        let runner = SystemRunner;
        let result = runner.run("definitely-not-a-real-command-xyz", &[]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to launch"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_nonzero_exit() {
        let runner = SystemRunner;
        let result = runner.run("false", &[]);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("exited with status"));
    }

    #[cfg(unix)]
    #[test]
    fn test_system_runner_success() {
        let runner = SystemRunner;
        assert!(runner.run("true", &[]).is_ok());
    }
}
