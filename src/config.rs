//! Configuration system using TOML files.
//!
//! Config is stored in the OS-standard config directory:
//! - Windows: %APPDATA%\tune-scout\config.toml
//! - macOS: ~/Library/Application Support/tune-scout/config.toml
//! - Linux: ~/.config/tune-scout/config.toml
//!
//! The config file is human-readable and editable. API keys can also be
//! supplied per-invocation through environment variables on the CLI,
//! which take precedence over the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// API credentials (keep separate for potential future encryption)
    pub credentials: Credentials,

    /// Service endpoints; only set these for proxies or self-hosted mirrors
    pub endpoints: Endpoints,

    /// Who we act as against the pod
    pub identity: IdentityConfig,
}

/// API credentials
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
    /// API key for the primary (chat) LLM backend
    pub openai_api_key: Option<String>,

    /// API key for the secondary (inference) LLM backend
    pub hf_api_key: Option<String>,

    /// Bearer token for authenticated pod access
    pub pod_token: Option<String>,
}

/// Endpoint overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoints {
    /// Catalog search base URL (empty = built-in default)
    pub catalog_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            catalog_url: String::new(),
        }
    }
}

/// Identity settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    /// The user's WebID (profile document URL)
    pub web_id: Option<String>,
}

// ============================================================================
// Config File Operations
// ============================================================================

/// Get the config directory path
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("tune-scout"))
}

/// Get the full path to the config file
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load configuration from disk
///
/// Returns default config if file doesn't exist or can't be parsed.
/// Logs warnings but doesn't fail - we always return a usable config.
pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine config directory, using defaults");
        return Config::default();
    };

    if !path.exists() {
        tracing::debug!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }

    match std::fs::read_to_string(&path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => {
                tracing::debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::error!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                Config::default()
            }
        },
        Err(e) => {
            tracing::error!("Failed to read config file {:?}: {}", path, e);
            Config::default()
        }
    }
}

/// Save configuration to disk
///
/// Creates the config directory if it doesn't exist.
pub fn save(config: &Config) -> Result<(), ConfigError> {
    let dir = config_dir().ok_or(ConfigError::NoConfigDir)?;
    let path = dir.join("config.toml");

    std::fs::create_dir_all(&dir).map_err(|e| ConfigError::CreateDir(dir.clone(), e))?;

    let contents = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;

    // Write atomically (write to temp, then rename)
    let temp_path = path.with_extension("toml.tmp");
    std::fs::write(&temp_path, &contents).map_err(|e| ConfigError::Write(temp_path.clone(), e))?;
    std::fs::rename(&temp_path, &path)
        .map_err(|e| ConfigError::Rename(temp_path, path.clone(), e))?;

    tracing::info!("Saved config to {:?}", path);
    Ok(())
}

// ============================================================================
// Error Types
// ============================================================================

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to create config directory {0}: {1}")]
    CreateDir(PathBuf, std::io::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),

    #[error("Failed to write config to {0}: {1}")]
    Write(PathBuf, std::io::Error),

    #[error("Failed to rename temp file {0} to {1}: {2}")]
    Rename(PathBuf, PathBuf, std::io::Error),
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let toml = toml::to_string_pretty(&config).unwrap();
        assert!(toml.contains("[credentials]"));
        assert!(toml.contains("[endpoints]"));
        assert!(toml.contains("[identity]"));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.credentials.openai_api_key = Some("sk-test-123".to_string());
        config.identity.web_id = Some("https://user.pod.example/profile/card#me".to_string());

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&toml).unwrap();

        assert_eq!(parsed.credentials.openai_api_key, Some("sk-test-123".to_string()));
        assert_eq!(
            parsed.identity.web_id,
            Some("https://user.pod.example/profile/card#me".to_string())
        );
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[credentials]
hf_api_key = "hf-key"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.credentials.hf_api_key, Some("hf-key".to_string()));
        assert!(config.credentials.openai_api_key.is_none());
        assert!(config.endpoints.catalog_url.is_empty());
        assert!(config.identity.web_id.is_none());
    }

    #[test]
    fn test_config_file_round_trip_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.credentials.pod_token = Some("token-abc".to_string());
        std::fs::write(&path, toml::to_string_pretty(&config).unwrap()).unwrap();

        let parsed: Config =
            toml::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.credentials.pod_token, Some("token-abc".to_string()));
    }
}
