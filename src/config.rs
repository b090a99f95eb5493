use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{ChangelogError, Result};

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = "git2changelog.toml";

/// Label used for unreleased work at the tip of history.
pub const DEFAULT_UNRELEASED_LABEL: &str = "HEAD:UNRELEASED";

/// Defaults read from a `git2changelog.toml` file.
///
/// Every field is optional in the file; command-line flags take precedence
/// over anything set here.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Keywords limiting which commits produce bullets
    #[serde(default)]
    pub search_terms: Vec<String>,

    /// Release name used when the tip of history is not tagged
    #[serde(default)]
    pub release_name: Option<String>,

    #[serde(default = "default_format")]
    pub format: String,

    #[serde(default = "default_unreleased_label")]
    pub unreleased_label: String,
}

fn default_format() -> String {
    "rpm".to_string()
}

fn default_unreleased_label() -> String {
    DEFAULT_UNRELEASED_LABEL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            search_terms: Vec::new(),
            release_name: None,
            format: default_format(),
            unreleased_label: default_unreleased_label(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `git2changelog.toml` in the current directory
/// 3. `.git2changelog.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        read_config_file(Path::new(path))
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        read_config_file(Path::new(CONFIG_FILE_NAME))
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(format!(".{}", CONFIG_FILE_NAME));
        if config_path.exists() {
            read_config_file(&config_path)
        } else {
            Ok(Config::default())
        }
    } else {
        Ok(Config::default())
    }
}

/// Parse configuration from TOML text.
pub fn parse_config(config_str: &str) -> Result<Config> {
    toml::from_str(config_str).map_err(|e| ChangelogError::config(e.to_string()))
}

fn read_config_file(path: &Path) -> Result<Config> {
    tracing::debug!(path = %path.display(), "reading configuration file");
    let contents = fs::read_to_string(path).map_err(|e| {
        ChangelogError::config(format!("cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&contents)
}
