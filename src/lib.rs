pub mod changelog;
pub mod config;
pub mod deploy;
pub mod error;
pub mod git;
pub mod metadata;
pub mod prompt;
pub mod release;
pub mod runner;
pub mod ui;
pub mod version;

pub use error::{ReleaseError, Result};
