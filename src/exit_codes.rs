//! Exit codes for the CLI

use git2changelog::ChangelogError;

/// General error
pub const ERROR: i32 = 1;

/// Configuration error
pub const CONFIG_ERROR: i32 = 2;

/// Repository or git error
pub const GIT_ERROR: i32 = 3;

pub fn for_error(error: &ChangelogError) -> i32 {
    if error.is_configuration_error() {
        return CONFIG_ERROR;
    }

    match error {
        ChangelogError::Io(_) => ERROR,
        _ => GIT_ERROR,
    }
}
