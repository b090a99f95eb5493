//! Decoration grammar and release-boundary classification.
//!
//! A decoration as printed by `git log --format=%d` looks like
//! ` (HEAD -> main, tag: v1.2.0, origin/main)`: optional whitespace and
//! parentheses around a `, `-separated list of references.

/// One reference in a decoration list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecorationRef {
    /// The tip of history: `HEAD` or `HEAD -> <branch>`
    Head { branch: Option<String> },
    /// `tag: <name>`
    Tag(String),
    /// Any other reference (local or remote branch, `grafted`, ...)
    Other(String),
}

impl DecorationRef {
    fn parse(item: &str) -> Self {
        if item == "HEAD" {
            return DecorationRef::Head { branch: None };
        }
        if let Some(branch) = item.strip_prefix("HEAD -> ") {
            return DecorationRef::Head {
                branch: Some(branch.trim().to_string()),
            };
        }
        if let Some(name) = item.strip_prefix("tag:") {
            return DecorationRef::Tag(name.trim().to_string());
        }
        DecorationRef::Other(item.to_string())
    }
}

/// Parsed decoration of a single commit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoration {
    pub refs: Vec<DecorationRef>,
}

impl Decoration {
    pub fn parse(raw: &str) -> Self {
        let inner = raw.trim().trim_start_matches('(').trim_end_matches(')');
        let refs = inner
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(DecorationRef::parse)
            .collect();

        Decoration { refs }
    }

    /// Whether the commit sits at the tip of history
    pub fn is_head(&self) -> bool {
        self.refs
            .iter()
            .any(|r| matches!(r, DecorationRef::Head { .. }))
    }

    /// First tag in decoration order
    pub fn first_tag(&self) -> Option<&str> {
        self.refs.iter().find_map(|r| match r {
            DecorationRef::Tag(name) => Some(name.as_str()),
            _ => None,
        })
    }
}

/// Outcome of classifying one commit's decoration.
///
/// For a boundary, `label` is the release name; otherwise it carries the raw
/// decoration unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseBoundary {
    pub is_boundary: bool,
    pub label: String,
}

/// Label rules applied to decorations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryRules {
    /// Release name for an untagged tip
    pub release_name: Option<String>,
    /// Label used for an untagged tip without a release name
    pub unreleased_label: String,
}

impl Default for BoundaryRules {
    fn default() -> Self {
        BoundaryRules {
            release_name: None,
            unreleased_label: crate::config::DEFAULT_UNRELEASED_LABEL.to_string(),
        }
    }
}

impl BoundaryRules {
    pub fn with_release_name(release_name: Option<String>) -> Self {
        BoundaryRules {
            release_name,
            ..Default::default()
        }
    }

    /// Decide whether `raw` marks the start of a release grouping.
    ///
    /// A tag always wins (first tag when several decorate the commit). An
    /// untagged tip takes the release name, else the unreleased label.
    pub fn classify(&self, raw: &str) -> ReleaseBoundary {
        let decoration = Decoration::parse(raw);

        let label = match (decoration.first_tag(), decoration.is_head()) {
            (Some(tag), _) => tag.to_string(),
            (None, true) => self
                .release_name
                .clone()
                .unwrap_or_else(|| self.unreleased_label.clone()),
            (None, false) => {
                return ReleaseBoundary {
                    is_boundary: false,
                    label: raw.to_string(),
                }
            }
        };

        ReleaseBoundary {
            is_boundary: true,
            label,
        }
    }
}
