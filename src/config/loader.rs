use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable selecting the build mode. `development` turns on the mock.
pub const ENV_MODE_VAR: &str = "CATFACT_ENV";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

/// Values supplied on the command line. `None` leaves the file value alone.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_url: Option<String>,
    pub mock: bool,
    pub log_file: Option<String>,
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/catfact/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catfact").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Applies command-line overrides and the build-mode variable, then revalidates.
    pub fn with_overrides(
        mut self,
        overrides: ConfigOverrides,
        env_mode: Option<&str>,
    ) -> Result<Self, ConfigError> {
        if let Some(base_url) = overrides.base_url {
            self.endpoint.base_url = base_url;
        }
        if let Some(file) = overrides.log_file {
            self.logging.file = Some(file);
        }
        if overrides.mock || env_mode.is_some_and(|mode| mode.eq_ignore_ascii_case("development")) {
            self.mock.enabled = true;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - base_url is an http(s) URL
    /// - path starts with '/'
    /// - timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = &self.endpoint.base_url;
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("base_url '{}' must start with http:// or https://", base_url),
            });
        }

        if !self.endpoint.path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                message: format!("path '{}' must start with '/'", self.endpoint.path),
            });
        }

        if self.http.timeout_seconds == 0 || self.http.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_development_enables_mock() {
        let config = Config::default()
            .with_overrides(ConfigOverrides::default(), Some("development"))
            .unwrap();
        assert!(config.mock.enabled);
    }

    #[test]
    fn env_production_leaves_mock_off() {
        let config = Config::default()
            .with_overrides(ConfigOverrides::default(), Some("production"))
            .unwrap();
        assert!(!config.mock.enabled);
    }

    #[test]
    fn base_url_override_is_validated() {
        let overrides = ConfigOverrides {
            base_url: Some("ftp://example.com".to_string()),
            ..Default::default()
        };
        let result = Config::default().with_overrides(overrides, None);
        assert!(matches!(result, Err(ConfigError::ValidationError { .. })));
    }
}
