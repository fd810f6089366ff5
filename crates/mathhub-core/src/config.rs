//! Application configuration.
//!
//! Loads optional overrides from `~/.config/mathhub/config.toml`. The API key
//! is deliberately not part of the file: it is read from the environment at
//! call time, so a key rotated mid-session is picked up by the next request.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default Gemini model used for both fetchers.
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
/// Default per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
/// Environment variable holding the Gemini API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Tunable configuration, all fields optional in the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubConfig {
    /// Model name passed to the generateContent endpoint.
    pub model: String,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl HubConfig {
    /// Loads the configuration from the default location, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Loads the configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let config = toml::from_str(&raw)?;
        Ok(config)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("mathhub").join("config.toml"))
    }
}

/// Reads the API key from the environment at call time.
///
/// An absent key is passed through as an empty string; the upstream service
/// rejects it. No local validation.
pub fn api_key() -> String {
    std::env::var(API_KEY_ENV).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HubConfig::default();
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_from_file_with_partial_override() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = \"gemini-2.5-flash\"\n").unwrap();

        let config = HubConfig::load_from(&path).unwrap();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = HubConfig::load_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "model = [not toml").unwrap();
        assert!(HubConfig::load_from(&path).is_err());
    }
}
