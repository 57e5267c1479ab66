//! # Application configuration — `fundraise.toml`
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000/api"
//! ```
//!
//! All structs derive `Default` with the local development backend as the
//! default, so a missing or empty config file is equivalent to the default
//! configuration. On native targets the `FUNDRAISE_API_URL` environment
//! variable overrides the configured base URL.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}

/// Backend API configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000/api".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl AppConfig {
    /// Create a config with the given API base URL.
    pub fn new(base_url: String) -> Self {
        Self {
            api: ApiConfig { base_url },
        }
    }

    /// Load the default configuration, applying environment overrides on
    /// native targets.
    pub fn load() -> Self {
        let config = Self::default();
        #[cfg(not(target_arch = "wasm32"))]
        {
            if let Ok(url) = std::env::var("FUNDRAISE_API_URL") {
                if !url.is_empty() {
                    return Self::new(url);
                }
            }
        }
        config
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "fundraise.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_empty_toml_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::new("https://api.fundraise.example".to_string());
        let toml = config.to_toml().unwrap();
        let back = AppConfig::from_toml(&toml).unwrap();
        assert_eq!(back, config);
        assert_eq!(back.api.base_url, "https://api.fundraise.example");
    }
}
