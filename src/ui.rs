//! Diagnostics for the terminal.
//!
//! Everything here writes to stderr so stdout carries only changelog text.

use console::style;

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Print a hint with a yellow arrow.
pub fn display_hint(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Follow-up advice for an error, if any applies.
pub fn hint_for(error: &crate::ChangelogError) -> Option<&'static str> {
    use crate::ChangelogError;

    match error {
        ChangelogError::InvalidRepository { .. } => {
            Some("Pass the working tree root with --repo")
        }
        ChangelogError::NoReleaseTags { .. } => {
            Some("Tag a first release, e.g. `git tag v0.1.0`, before generating a changelog")
        }
        ChangelogError::UnsupportedFormat(_) => Some("The only supported format is `rpm`"),
        ChangelogError::LogCommandFailed { .. } => {
            Some("Check that the start tag and end reference exist")
        }
        _ => None,
    }
}
