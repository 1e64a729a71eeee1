use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ReleaseNotesError, Result};

/// File name looked up in the current directory
pub const LOCAL_CONFIG_FILE: &str = "releasenotes.toml";

/// File name looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".releasenotes.toml";

/// Represents the complete configuration for merge-release-notes.
///
/// Contains the release API settings, release filtering options and output defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub github: GitHubConfig,

    #[serde(default)]
    pub releases: ReleasesConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

fn default_api_url() -> String {
    "https://api.github.com".to_string()
}

fn default_per_page() -> u32 {
    100
}

fn default_user_agent() -> String {
    format!("merge-release-notes/{}", env!("CARGO_PKG_VERSION"))
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

/// Settings for the GitHub Releases API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct GitHubConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Size of the single page fetched, capped at 100
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        GitHubConfig {
            api_url: default_api_url(),
            per_page: default_per_page(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Controls which fetched releases take part in selection.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleasesConfig {
    #[serde(default = "default_true")]
    pub include_prereleases: bool,
}

impl Default for ReleasesConfig {
    fn default() -> Self {
        ReleasesConfig {
            include_prereleases: true,
        }
    }
}

/// Output destination defaults.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct OutputConfig {
    /// Write the document here instead of stdout
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasenotes.toml` in current directory
/// 3. `.releasenotes.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let path = if let Some(path) = config_path {
        PathBuf::from(path)
    } else if Path::new(LOCAL_CONFIG_FILE).exists() {
        PathBuf::from(LOCAL_CONFIG_FILE)
    } else if let Some(user_path) = dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
    {
        user_path
    } else {
        return Ok(Config::default());
    };

    let config_str = fs::read_to_string(&path).map_err(|e| {
        ReleaseNotesError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;
    parse_config(&config_str)
        .map_err(|e| ReleaseNotesError::config(format!("{}: {}", path.display(), e)))
}

/// Parse configuration from TOML text
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert_eq!(config.github.per_page, 100);
        assert_eq!(config.github.timeout_secs, 10);
        assert!(config.github.user_agent.starts_with("merge-release-notes/"));
        assert!(config.releases.include_prereleases);
        assert_eq!(config.output.path, None);
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_sections_keep_other_defaults() {
        let config = parse_config(
            r#"
[github]
per_page = 20

[releases]
include_prereleases = false
"#,
        )
        .unwrap();
        assert_eq!(config.github.per_page, 20);
        assert_eq!(config.github.api_url, "https://api.github.com");
        assert!(!config.releases.include_prereleases);
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(parse_config("[github\nper_page = ").is_err());
    }
}
