//! Client settings.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default service root.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Enough to cover every current record and form in one listing call.
pub const DEFAULT_LIST_LIMIT: u32 = 2000;

/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("dexview/", env!("CARGO_PKG_VERSION"));

/// Settings for [`crate::PokeApiClient`].
///
/// Every field has a default, so a settings file only needs the values it
/// overrides:
///
/// ```toml
/// base_url = "http://localhost:8000/api/v2"
/// timeout_secs = 5
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientSettings {
    /// Service root without a trailing slash.
    pub base_url: String,
    /// Per-request timeout; a hung request fails as a network error.
    pub timeout_secs: u64,
    /// `limit` used for the one-shot bulk listing.
    pub list_limit: u32,
    /// User agent sent with every request.
    pub user_agent: String,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            list_limit: DEFAULT_LIST_LIMIT,
            user_agent: USER_AGENT_VALUE.to_string(),
        }
    }
}

impl ClientSettings {
    /// Load settings from the default config path, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|err| {
                tracing::warn!("Ignoring settings file {}: {}", path.display(), err);
                Self::default()
            }),
            Err(_) => Self::default(),
        }
    }

    /// Load settings from `path`, failing when it cannot be read or parsed.
    pub fn try_load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::ClientError::InvalidConfig(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parse settings from TOML.
    pub fn parse(content: &str) -> Result<Self> {
        let settings: Self = toml::from_str(content)?;
        Ok(settings.normalized())
    }

    /// Get the default config file path.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "Dexview", "dexview")
            .map(|dirs| dirs.config_dir().join("settings.toml"))
            .unwrap_or_else(|| PathBuf::from("settings.toml"))
    }

    /// Override the service root.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self.normalized()
    }

    /// Per-request timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.base_url.trim_end_matches('/').len();
        self.base_url.truncate(trimmed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.list_limit, 2000);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert!(settings.user_agent.starts_with("dexview/"));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let settings = ClientSettings::parse("timeout_secs = 5\n").unwrap();
        assert_eq!(settings.timeout_secs, 5);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let settings =
            ClientSettings::parse("base_url = \"http://localhost:8000/api/v2/\"\n").unwrap();
        assert_eq!(settings.base_url, "http://localhost:8000/api/v2");

        let settings = ClientSettings::default().with_base_url("http://x/");
        assert_eq!(settings.base_url, "http://x");
    }

    #[test]
    fn test_invalid_toml() {
        assert!(ClientSettings::parse("timeout_secs = \"soon\"").is_err());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = std::env::temp_dir().join("dexview-settings-that-does-not-exist.toml");
        assert_eq!(ClientSettings::load_from(&path), ClientSettings::default());
        assert!(ClientSettings::try_load_from(&path).is_err());
    }
}
