use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for git2changelog operations
#[derive(Error, Debug)]
pub enum ChangelogError {
    #[error("{} does not appear to be a valid git repository", path.display())]
    InvalidRepository { path: PathBuf },

    #[error("The repository at {} does not seem to have any tags created", path.display())]
    NoReleaseTags { path: PathBuf },

    #[error("git log failed ({status}): {stderr}")]
    LogCommandFailed { status: String, stderr: String },

    #[error("Unsupported output format: {0}")]
    UnsupportedFormat(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git2changelog
pub type Result<T> = std::result::Result<T, ChangelogError>;

impl ChangelogError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ChangelogError::Config(msg.into())
    }

    /// Create an invalid repository error for `path`
    pub fn invalid_repository(path: impl Into<PathBuf>) -> Self {
        ChangelogError::InvalidRepository { path: path.into() }
    }

    /// Create a missing tags error for `path`
    pub fn no_release_tags(path: impl Into<PathBuf>) -> Self {
        ChangelogError::NoReleaseTags { path: path.into() }
    }

    /// True for errors raised while validating the run configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            ChangelogError::UnsupportedFormat(_) | ChangelogError::Config(_)
        )
    }
}
