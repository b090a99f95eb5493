//! Git access layer
//!
//! The [LogSource] trait covers the two things a changelog run needs from a
//! repository: the list of tags and the raw commit log for a revision range.
//!
//! - [repository::GitRepository]: real implementation (`git2` + `git log`)
//! - [mock::MockLogSource]: canned output for tests

pub mod mock;
pub mod repository;

pub use mock::MockLogSource;
pub use repository::GitRepository;

use std::fmt;

use crate::error::Result;

/// Reference naming the tip of history.
pub const HEAD: &str = "HEAD";

/// `git log` pretty format producing one comma-separated line per commit:
/// committer date (strict ISO 8601), committer name, committer email,
/// abbreviated hash, quoted subject, quoted decoration.
pub const LOG_FORMAT: &str = "%cI,%cn,%ce,%h,\"%s\",\"%d\"";

/// Revision range `start..end`: start exclusive, end inclusive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevisionRange {
    pub start: String,
    pub end: String,
}

impl RevisionRange {
    pub fn new(start: impl Into<String>, end: Option<String>) -> Self {
        RevisionRange {
            start: start.into(),
            end: end.unwrap_or_else(|| HEAD.to_string()),
        }
    }
}

impl fmt::Display for RevisionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Read-only view of a repository's tags and commit log
pub trait LogSource {
    /// All tag names in the repository
    fn list_tags(&self) -> Result<Vec<String>>;

    /// Raw log output for `range`, one commit per line in [LOG_FORMAT],
    /// newest first.
    ///
    /// # Returns
    /// * `Ok(String)` - Captured standard output of the log command
    /// * `Err` - If the command could not run or exited unsuccessfully
    fn log(&self, range: &RevisionRange) -> Result<String>;
}
