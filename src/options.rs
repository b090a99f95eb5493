//! Run configuration: caller options validated against the target repository.

use std::path::{Path, PathBuf};

use crate::config::{Config, DEFAULT_UNRELEASED_LABEL};
use crate::domain::{BoundaryRules, KeywordFilter, OutputFormat};
use crate::error::{ChangelogError, Result};
use crate::git::{GitRepository, LogSource, RevisionRange};

/// Raw options as supplied by the caller, before validation
#[derive(Debug, Clone, PartialEq)]
pub struct RunOptions {
    /// Repository working tree
    pub repo: PathBuf,

    /// Exclusive lower bound of the log range
    pub start: String,

    /// Inclusive upper bound; `HEAD` when unset
    pub end: Option<String>,

    pub search_terms: Vec<String>,

    /// Release name for an untagged tip
    pub release_name: Option<String>,

    pub format: Option<String>,

    pub unreleased_label: Option<String>,
}

impl RunOptions {
    pub fn new(repo: impl Into<PathBuf>, start: impl Into<String>) -> Self {
        RunOptions {
            repo: repo.into(),
            start: start.into(),
            end: None,
            search_terms: Vec::new(),
            release_name: None,
            format: None,
            unreleased_label: None,
        }
    }

    /// Fill every unset option from the configuration file.
    pub fn with_defaults(mut self, config: &Config) -> Self {
        if self.search_terms.is_empty() {
            self.search_terms = config.search_terms.clone();
        }
        if self.release_name.is_none() {
            self.release_name = config.release_name.clone();
        }
        if self.format.is_none() {
            self.format = Some(config.format.clone());
        }
        if self.unreleased_label.is_none() {
            self.unreleased_label = Some(config.unreleased_label.clone());
        }
        self
    }
}

/// Validated, immutable settings for one changelog run
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfiguration {
    repo: PathBuf,
    range: RevisionRange,
    filter: KeywordFilter,
    rules: BoundaryRules,
    format: OutputFormat,
}

impl RunConfiguration {
    /// Validate `options` against the repository they point at.
    ///
    /// # Returns
    /// * `Err(InvalidRepository)` - The path has no `.git` metadata
    /// * `Err(NoReleaseTags)` - The repository has no tags
    /// * `Err(UnsupportedFormat)` - The output format is unknown
    pub fn new(options: RunOptions) -> Result<Self> {
        let repo = GitRepository::open(&options.repo)?;
        Self::with_source(options, &repo)
    }

    /// Validate `options` using an already opened log source.
    pub fn with_source<S: LogSource + ?Sized>(options: RunOptions, source: &S) -> Result<Self> {
        let tags = source.list_tags()?;
        if tags.is_empty() {
            return Err(ChangelogError::no_release_tags(&options.repo));
        }
        tracing::debug!(count = tags.len(), "repository tags found");

        let format = match options.format.as_deref() {
            Some(name) => name.parse()?,
            None => OutputFormat::default(),
        };

        let rules = BoundaryRules {
            release_name: options.release_name.filter(|name| !name.is_empty()),
            unreleased_label: options
                .unreleased_label
                .unwrap_or_else(|| DEFAULT_UNRELEASED_LABEL.to_string()),
        };

        Ok(RunConfiguration {
            repo: options.repo,
            range: RevisionRange::new(options.start, options.end),
            filter: KeywordFilter::new(options.search_terms),
            rules,
            format,
        })
    }

    pub fn repo(&self) -> &Path {
        &self.repo
    }

    pub fn range(&self) -> &RevisionRange {
        &self.range
    }

    pub fn filter(&self) -> &KeywordFilter {
        &self.filter
    }

    pub fn rules(&self) -> &BoundaryRules {
        &self.rules
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}
