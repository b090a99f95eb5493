use std::path::{Path, PathBuf};
use std::process::Command;

use git2::Repository as Git2Repo;

use crate::error::{ChangelogError, Result};
use crate::git::{LogSource, RevisionRange, LOG_FORMAT};

/// A working tree read through `git2` and the `git` command line
pub struct GitRepository {
    path: PathBuf,
    repo: Git2Repo,
}

impl GitRepository {
    /// Open the working tree at `path`.
    ///
    /// The path itself must contain a `.git` entry; parent directories are not
    /// searched.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.join(".git").exists() {
            return Err(ChangelogError::invalid_repository(path));
        }

        let repo = Git2Repo::open(path)?;
        Ok(GitRepository {
            path: path.to_path_buf(),
            repo,
        })
    }
}

/// Arguments for `git log` over `range`.
///
/// Signature verification output and long decorations are switched off so
/// user configuration cannot change the line format.
pub fn log_args(range: &RevisionRange) -> Vec<String> {
    vec![
        "--no-pager".to_string(),
        "log".to_string(),
        "--no-show-signature".to_string(),
        "--decorate=short".to_string(),
        range.to_string(),
        format!("--format={}", LOG_FORMAT),
    ]
}

impl LogSource for GitRepository {
    fn list_tags(&self) -> Result<Vec<String>> {
        let tag_names = self.repo.tag_names(None)?;
        let mut tags: Vec<String> = tag_names.iter().flatten().map(str::to_string).collect();
        tags.sort();
        Ok(tags)
    }

    fn log(&self, range: &RevisionRange) -> Result<String> {
        tracing::debug!(range = %range, path = %self.path.display(), "running git log");

        let output = Command::new("git")
            .args(log_args(range))
            .current_dir(&self.path)
            .output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(ChangelogError::LogCommandFailed {
                status: output.status.to_string(),
                stderr,
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}
