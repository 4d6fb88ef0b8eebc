//! Configuration for Bearboard.
//!
//! Loaded from a TOML file; every field has a default so an empty or missing
//! file is valid.
//!
//! ```toml
//! [api]
//! dashboard_url = "https://example.com/prod/dashboard"
//! validation_url = "https://example.com/validation"
//! max_attempts = 2
//! retry_delay_ms = 3000
//!
//! [animation]
//! peek_ms = 50
//!
//! [ui]
//! asset_dir = "assets/img"
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::Timings;
use crate::error::{BoardError, BoardResult};

/// File name looked up in the platform config directory.
pub const CONFIG_FILE: &str = "bearboard.toml";

/// Environment override for the dashboard-generation endpoint.
pub const ENV_DASHBOARD_URL: &str = "BEARBOARD_DASHBOARD_URL";
/// Environment override for the key-validation endpoint.
pub const ENV_VALIDATION_URL: &str = "BEARBOARD_VALIDATION_URL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub api: ApiConfig,
    pub animation: Timings,
    pub ui: UiConfig,
}

/// Remote endpoints and retry policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub dashboard_url: String,
    pub validation_url: String,
    /// Total attempts per dashboard request, including the first.
    pub max_attempts: u32,
    /// Fixed delay between attempts.
    pub retry_delay_ms: u64,
    /// Per-request timeout.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            dashboard_url: "https://b1z29r84v1.execute-api.us-east-1.amazonaws.com/prod/dashboard"
                .to_string(),
            validation_url: "https://yjfimvn8y4.execute-api.us-east-1.amazonaws.com/vadilation"
                .to_string(),
            max_attempts: 2,
            retry_delay_ms: 3000,
            timeout_secs: 300,
        }
    }
}

impl ApiConfig {
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Desktop presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Directory holding the avatar frames.
    pub asset_dir: PathBuf,
    /// Toast lifetime.
    pub toast_ms: u64,
    /// Typewriter greeting speed, per character.
    pub typewriter_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets/img"),
            toast_ms: 4000,
            typewriter_ms: 125,
        }
    }
}

impl BoardConfig {
    /// Parse a TOML document.
    pub fn from_toml(text: &str) -> BoardResult<Self> {
        let config: Self = toml::from_str(text).map_err(|e| BoardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> BoardResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&text)
    }

    /// Default location: `<config dir>/bearboard/bearboard.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("bearboard").join(CONFIG_FILE))
    }

    /// Load from `explicit` if given, else from the default location if it
    /// exists, else defaults. Environment overrides are applied last.
    pub fn load(explicit: Option<&Path>) -> BoardResult<Self> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::info!("Loading config from {:?}", path);
                    Self::from_file(path)?
                }
                None => Self::default(),
            },
        };
        config.apply_env_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Apply endpoint overrides from a variable lookup.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_DASHBOARD_URL).filter(|s| !s.is_empty()) {
            self.api.dashboard_url = url;
        }
        if let Some(url) = lookup(ENV_VALIDATION_URL).filter(|s| !s.is_empty()) {
            self.api.validation_url = url;
        }
    }

    fn validate(&self) -> BoardResult<()> {
        if self.api.max_attempts == 0 {
            return Err(BoardError::Config("api.max_attempts must be at least 1".into()));
        }
        if self.api.dashboard_url.is_empty() || self.api.validation_url.is_empty() {
            return Err(BoardError::Config("api endpoints must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(BoardConfig::from_toml("").unwrap(), BoardConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = BoardConfig::from_toml(
            r#"
            [api]
            max_attempts = 3

            [animation]
            hide_ms = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.api.max_attempts, 3);
        assert_eq!(config.api.retry_delay(), Duration::from_secs(3));
        assert_eq!(config.animation.hide_ms, 25);
        assert_eq!(config.animation.peek_ms, 50);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let err = BoardConfig::from_toml("[api]\nmax_attempts = 0").unwrap_err();
        assert!(matches!(err, BoardError::Config(_)));
    }

    #[test]
    fn test_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "[ui]\ntoast_ms = 100\n").unwrap();

        let config = BoardConfig::load(Some(&path)).unwrap();
        assert_eq!(config.ui.toast_ms, 100);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = TempDir::new().unwrap();
        let err = BoardConfig::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(matches!(err, BoardError::Io(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = BoardConfig::default();
        config.apply_env_overrides(|key| match key {
            ENV_DASHBOARD_URL => Some("http://localhost:9000/dashboard".to_string()),
            ENV_VALIDATION_URL => Some(String::new()),
            _ => None,
        });
        assert_eq!(config.api.dashboard_url, "http://localhost:9000/dashboard");
        assert_eq!(config.api.validation_url, ApiConfig::default().validation_url);
    }
}
