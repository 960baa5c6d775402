//! Configuration management for Stockroom.
//!
//! Loads configuration from ${STOCKROOM_HOME}/config.toml with sensible defaults.
//! The backend project bundle (`[firebase]`) is static and supplied at startup.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_AUTH_BASE_URL: &str = "https://identitytoolkit.googleapis.com";
pub const DEFAULT_TOKEN_BASE_URL: &str = "https://securetoken.googleapis.com";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

pub mod paths {
    //! Path resolution for Stockroom configuration and data directories.
    //!
    //! STOCKROOM_HOME resolution order:
    //! 1. STOCKROOM_HOME environment variable (if set)
    //! 2. ~/.config/stockroom (default)
    //! 3. ./.stockroom when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Stockroom home directory.
    pub fn stockroom_home() -> PathBuf {
        if let Ok(home) = std::env::var("STOCKROOM_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".stockroom"),
            |h| h.join(".config").join("stockroom"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        stockroom_home().join("config.toml")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        stockroom_home().join("logs")
    }
}

/// Backend project bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FirebaseConfig {
    /// Web API key
    pub api_key: String,
    /// Project id hosting the Firestore database
    pub project_id: String,
    /// Collection holding inventory items
    pub collection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firestore_base_url: Option<String>,
}

impl Default for FirebaseConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            collection: "items".to_string(),
            auth_base_url: None,
            token_base_url: None,
            firestore_base_url: None,
        }
    }
}

impl FirebaseConfig {
    /// Identity Toolkit base URL: env > config > default.
    pub fn effective_auth_base_url(&self) -> String {
        resolve_url(
            "STOCKROOM_AUTH_BASE_URL",
            self.auth_base_url.as_deref(),
            DEFAULT_AUTH_BASE_URL,
        )
    }

    /// Secure Token base URL: env > config > default.
    pub fn effective_token_base_url(&self) -> String {
        resolve_url(
            "STOCKROOM_TOKEN_BASE_URL",
            self.token_base_url.as_deref(),
            DEFAULT_TOKEN_BASE_URL,
        )
    }

    /// Firestore base URL: env > config > default.
    pub fn effective_firestore_base_url(&self) -> String {
        resolve_url(
            "STOCKROOM_FIRESTORE_BASE_URL",
            self.firestore_base_url.as_deref(),
            DEFAULT_FIRESTORE_BASE_URL,
        )
    }

    /// Checks that the bundle is complete enough to reach the backend.
    ///
    /// # Errors
    /// Returns an error naming the first missing field.
    pub fn validate(&self) -> Result<()> {
        let missing = [
            ("firebase.api_key", self.api_key.trim()),
            ("firebase.project_id", self.project_id.trim()),
            ("firebase.collection", self.collection.trim()),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty());

        if let Some((field, _)) = missing {
            anyhow::bail!(
                "{field} is not set in {}\n\
                 Run `stockroom config init` and fill in your Firebase project.",
                paths::config_path().display()
            );
        }
        Ok(())
    }
}

fn resolve_url(env_var: &str, configured: Option<&str>, default: &str) -> String {
    let url = std::env::var(env_var)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .or_else(|| configured.map(str::to_string))
        .unwrap_or_else(|| default.to_string());
    url.trim_end_matches('/').to_string()
}

/// UI behavior settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show remote store failures in the status line (always logged)
    pub report_remote_failures: bool,
    /// Idle redraw interval in milliseconds
    pub tick_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            report_remote_failures: true,
            tick_ms: 100,
        }
    }
}

impl UiConfig {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(10))
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub firebase: FirebaseConfig,
    pub ui: UiConfig,
}

impl Config {
    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    /// Returns an error if the file already exists.
    ///
    /// # Errors
    /// Returns an error if the file exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        Self::write_config(path, default_config_template())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.firebase.collection, "items");
        assert!(config.ui.report_remote_failures);
    }

    #[test]
    fn test_load_partial_config_merges_defaults() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(
            &config_path,
            "[firebase]\napi_key = \"key\"\nproject_id = \"demo\"\n",
        )
        .unwrap();

        let config = Config::load_from(&config_path).unwrap();
        assert_eq!(config.firebase.api_key, "key");
        assert_eq!(config.firebase.project_id, "demo");
        assert_eq!(config.firebase.collection, "items");
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn test_template_matches_defaults() {
        let parsed: Config = toml::from_str(default_config_template()).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_creates_config_with_template() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("subdir").join("config.toml");

        Config::init(&config_path).unwrap();

        let contents = fs::read_to_string(&config_path).unwrap();
        assert!(contents.contains("[firebase]"));
        assert!(contents.contains("report_remote_failures = true"));
    }

    #[test]
    fn test_init_fails_if_exists() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("config.toml");

        fs::write(&config_path, "").unwrap();

        assert!(Config::init(&config_path).is_err());
    }

    #[test]
    fn test_validate_reports_missing_project() {
        let config = FirebaseConfig {
            api_key: "key".to_string(),
            ..Default::default()
        };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.contains("firebase.project_id"));
    }

    #[test]
    fn test_configured_base_url_trims_trailing_slash() {
        let config = FirebaseConfig {
            firestore_base_url: Some("http://localhost:8080/".to_string()),
            ..Default::default()
        };
        // Only meaningful when the env override is not set in the test environment.
        if std::env::var("STOCKROOM_FIRESTORE_BASE_URL").is_err() {
            assert_eq!(
                config.effective_firestore_base_url(),
                "http://localhost:8080"
            );
        }
    }
}
