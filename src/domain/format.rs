use std::fmt;
use std::str::FromStr;

use crate::error::ChangelogError;

/// Changelog output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// RPM spec file `%changelog` section
    #[default]
    Rpm,
}

impl FromStr for OutputFormat {
    type Err = ChangelogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rpm" => Ok(OutputFormat::Rpm),
            other => Err(ChangelogError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Rpm => write!(f, "rpm"),
        }
    }
}
