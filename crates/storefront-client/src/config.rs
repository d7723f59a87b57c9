//! # Storefront Configuration
//!
//! Where the storefront finds its API and how it orders the catalog at start.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_API_URL=https://lessons.example.com                     │
//! │     STOREFRONT_TIMEOUT_SECS=20                                         │
//! │     STOREFRONT_SORT=price  STOREFRONT_SORT_DIRECTION=desc              │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/lesson-storefront/storefront.toml (Linux)                │
//! │     ~/Library/Application Support/com.lessons.storefront/... (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     http://localhost:3000, subject ascending                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [api]
//! base_url = "http://localhost:3000"
//! timeout_secs = 10
//! connect_timeout_secs = 5
//!
//! [catalog]
//! default_sort = "subject"     # subject | location | price | spaces
//! default_direction = "asc"    # asc | desc
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use storefront_core::{SortDirection, SortField};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

// =============================================================================
// API Settings
// =============================================================================

/// Where the catalog and order endpoints live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL; `/lessons`, `/search` and `/orders` hang off it.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Whole-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// TCP/TLS connect timeout (seconds).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_connect_timeout() -> u64 {
    5
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

impl ApiSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

// =============================================================================
// Catalog Settings
// =============================================================================

/// Initial ordering of the lesson list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default)]
    pub default_sort: SortField,

    #[serde(default)]
    pub default_direction: SortDirection,
}

// =============================================================================
// Main Storefront Configuration
// =============================================================================

/// Complete storefront configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,
}

impl StorefrontConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// [`load`](Self::load) with the environment read through `lookup`.
    pub fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        let url = Url::parse(&self.api.base_url)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.api.connect_timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "connect_timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `STOREFRONT_*` overrides read through `lookup`.
    ///
    /// Unparseable values are logged and ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("STOREFRONT_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.base_url = url;
        }

        if let Some(timeout) = lookup("STOREFRONT_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.api.timeout_secs = secs,
                Err(_) => warn!(value = %timeout, "Invalid STOREFRONT_TIMEOUT_SECS"),
            }
        }

        if let Some(field) = lookup("STOREFRONT_SORT") {
            match field.parse() {
                Ok(parsed) => {
                    debug!(sort = %field, "Overriding default sort from environment");
                    self.catalog.default_sort = parsed;
                }
                Err(e) => warn!(error = %e, "Ignoring STOREFRONT_SORT"),
            }
        }

        if let Some(direction) = lookup("STOREFRONT_SORT_DIRECTION") {
            match direction.parse() {
                Ok(parsed) => self.catalog.default_direction = parsed,
                Err(e) => warn!(error = %e, "Ignoring STOREFRONT_SORT_DIRECTION"),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "lessons", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn base_url(&self) -> &str {
        &self.api.base_url
    }

    pub fn default_sort(&self) -> (SortField, SortDirection) {
        (self.catalog.default_sort, self.catalog.default_direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.base_url(), "http://localhost:3000");
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(
            config.default_sort(),
            (SortField::Subject, SortDirection::Asc)
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = StorefrontConfig::default();

        config.api.base_url = "ftp://lessons.example.com".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "not a url".to_string();
        assert!(config.validate().is_err());

        config.api.base_url = "https://lessons.example.com/api".to_string();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(lookup_from(&[
            ("STOREFRONT_API_URL", "https://lessons.example.com"),
            ("STOREFRONT_TIMEOUT_SECS", "30"),
            ("STOREFRONT_SORT", "price"),
            ("STOREFRONT_SORT_DIRECTION", "desc"),
        ]));

        assert_eq!(config.base_url(), "https://lessons.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.default_sort(), (SortField::Price, SortDirection::Desc));
    }

    #[test]
    fn test_invalid_env_values_are_ignored() {
        let mut config = StorefrontConfig::default();
        config.apply_overrides(lookup_from(&[
            ("STOREFRONT_TIMEOUT_SECS", "soon"),
            ("STOREFRONT_SORT", "rating"),
        ]));

        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.catalog.default_sort, SortField::Subject);
    }

    #[test]
    fn test_toml_parsing_fills_defaults() {
        let config: StorefrontConfig = toml::from_str(
            r#"
            [api]
            base_url = "http://10.0.0.5:3000"

            [catalog]
            default_sort = "spaces"
            "#,
        )
        .unwrap();

        assert_eq!(config.base_url(), "http://10.0.0.5:3000");
        assert_eq!(config.api.connect_timeout_secs, 5);
        assert_eq!(config.catalog.default_sort, SortField::Spaces);
        assert_eq!(config.catalog.default_direction, SortDirection::Asc);
    }

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "storefront-config-{}-{}.toml",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_load_layers_file_then_env() {
        let path = temp_config_path("layers");
        let mut saved = StorefrontConfig::default();
        saved.api.base_url = "http://127.0.0.1:4000".to_string();
        saved.api.timeout_secs = 25;
        saved.catalog.default_sort = SortField::Location;
        saved.save(Some(path.clone())).unwrap();

        let loaded = StorefrontConfig::load_with(Some(path.clone()), lookup_from(&[])).unwrap();
        assert_eq!(loaded, saved);

        let loaded = StorefrontConfig::load_with(
            Some(path.clone()),
            lookup_from(&[
                ("STOREFRONT_API_URL", "https://lessons.example.com"),
                ("STOREFRONT_SORT_DIRECTION", "desc"),
            ]),
        )
        .unwrap();
        assert_eq!(loaded.base_url(), "https://lessons.example.com");
        assert_eq!(loaded.api.timeout_secs, 25);
        assert_eq!(
            loaded.default_sort(),
            (SortField::Location, SortDirection::Desc)
        );

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let path = temp_config_path("missing");
        let loaded = StorefrontConfig::load_with(Some(path), lookup_from(&[])).unwrap();
        assert_eq!(loaded, StorefrontConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_env_url() {
        let path = temp_config_path("bad-url");
        let err = StorefrontConfig::load_with(
            Some(path),
            lookup_from(&[("STOREFRONT_API_URL", "ftp://bad")]),
        )
        .unwrap_err();

        assert!(err.is_config_error(), "got {err:?}");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = temp_config_path("malformed");
        std::fs::write(&path, "[api\nbase_url = ").unwrap();

        let err = StorefrontConfig::load_with(Some(path.clone()), lookup_from(&[])).unwrap_err();
        assert!(err.is_config_error(), "got {err:?}");

        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_toml_serialization() {
        let toml_str = toml::to_string_pretty(&StorefrontConfig::default()).unwrap();
        assert!(toml_str.contains("[api]"));
        assert!(toml_str.contains("[catalog]"));
    }
}
