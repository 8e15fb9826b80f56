use thiserror::Error;

/// Unified error type for plugin-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Metadata error: {0}")]
    Metadata(String),

    #[error("Changelog error: {0}")]
    Changelog(String),

    #[error("Commit failed: {0}")]
    Commit(String),

    #[error("Command failed: {0}")]
    Process(String),

    #[error("Deploy error: {0}")]
    Deploy(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in plugin-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a metadata error with context
    pub fn metadata(msg: impl Into<String>) -> Self {
        ReleaseError::Metadata(msg.into())
    }

    /// Create a changelog error with context
    pub fn changelog(msg: impl Into<String>) -> Self {
        ReleaseError::Changelog(msg.into())
    }

    /// Create a commit error with context
    pub fn commit(msg: impl Into<String>) -> Self {
        ReleaseError::Commit(msg.into())
    }

    /// Create a process error with context
    pub fn process(msg: impl Into<String>) -> Self {
        ReleaseError::Process(msg.into())
    }

    /// Create a deploy error with context
    pub fn deploy(msg: impl Into<String>) -> Self {
        ReleaseError::Deploy(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_constructors() {
        assert!(ReleaseError::metadata("test")
            .to_string()
            .contains("Metadata"));
        assert!(ReleaseError::process("test").to_string().contains("Command"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::config("x"), "Configuration error"),
            (ReleaseError::metadata("x"), "Metadata error"),
            (ReleaseError::changelog("x"), "Changelog error"),
            (ReleaseError::commit("x"), "Commit failed"),
            (ReleaseError::process("x"), "Command failed"),
            (ReleaseError::deploy("x"), "Deploy error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_empty_messages() {
        let errors = vec![
            ReleaseError::config(""),
            ReleaseError::metadata(""),
            ReleaseError::deploy(""),
        ];

        for err in errors {
            let msg = err.to_string();
            // Even with empty message, the error type prefix should be present
            assert!(!msg.is_empty());
        }
    }
}
