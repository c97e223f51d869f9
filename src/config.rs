//! Configuration System
//!
//! TOML configuration for the sign-up page. The browser build embeds its
//! config file at compile time and calls [`Config::from_toml`]; native
//! callers can read one from disk with [`Config::load`].

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub gateway: GatewayConfig,

    #[serde(default)]
    pub notices: NoticeConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the activities service lives
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct GatewayConfig {
    /// Prefix for every endpoint; empty means the page's own origin
    #[serde(default)]
    pub base_url: String,
}

/// How long each kind of message stays up
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NoticeConfig {
    #[serde(default = "default_signup_ms")]
    pub signup_ms: u64,

    #[serde(default = "default_unregister_success_ms")]
    pub unregister_success_ms: u64,

    #[serde(default = "default_unregister_error_ms")]
    pub unregister_error_ms: u64,
}

fn default_signup_ms() -> u64 {
    5000
}

fn default_unregister_success_ms() -> u64 {
    3000
}

fn default_unregister_error_ms() -> u64 {
    5000
}

impl Default for NoticeConfig {
    fn default() -> Self {
        Self {
            signup_ms: default_signup_ms(),
            unregister_success_ms: default_unregister_success_ms(),
            unregister_error_ms: default_unregister_error_ms(),
        }
    }
}

impl NoticeConfig {
    pub fn signup(&self) -> Duration {
        Duration::from_millis(self.signup_ms)
    }

    pub fn unregister_success(&self) -> Duration {
        Duration::from_millis(self.unregister_success_ms)
    }

    pub fn unregister_error(&self) -> Duration {
        Duration::from_millis(self.unregister_error_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive: trace, debug, info, warn, error, or a full
    /// `EnvFilter` expression such as `mergington=debug`
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: None,
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: Some(path.to_path_buf()),
            error: e.to_string(),
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config {path:?}: {error}")]
    Parse { path: Option<PathBuf>, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Mergington Activities Configuration

[gateway]
# Prefix for the activities endpoints. Leave empty when the page is served
# by the activities service itself.
base_url = ""

[notices]
# How long messages stay visible (ms)
signup_ms = 5000
unregister_success_ms = 3000
unregister_error_ms = 5000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.gateway.base_url, "");
        assert_eq!(config.notices.signup(), Duration::from_secs(5));
        assert_eq!(config.notices.unregister_success(), Duration::from_secs(3));
        assert_eq!(config.notices.unregister_error(), Duration::from_secs(5));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_generated_config_matches_defaults() {
        let config = Config::from_toml(&generate_default_config()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = Config::from_toml(
            r#"
            [gateway]
            base_url = "http://localhost:8000"

            [notices]
            unregister_success_ms = 1500
            "#,
        )
        .unwrap();
        assert_eq!(config.gateway.base_url, "http://localhost:8000");
        assert_eq!(config.notices.unregister_success_ms, 1500);
        assert_eq!(config.notices.signup_ms, 5000);
    }

    #[test]
    fn test_invalid_config() {
        assert!(Config::from_toml("[notices]\nsignup_ms = \"soon\"").is_err());
        let err = Config::from_toml("not = [valid").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { path: None, .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nlevel = \"debug\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
