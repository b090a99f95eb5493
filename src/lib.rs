pub mod changelog;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod options;
pub mod ui;

pub use changelog::generate;
pub use error::{ChangelogError, Result};
pub use options::{RunConfiguration, RunOptions};
