use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api: ApiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds; also bounds how long the busy indicator
    /// can stay active on a hung request.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the configuration directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("protex");
        Ok(config_dir)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, falling back to defaults when absent.
    ///
    /// Unlike credentials-carrying tools, a missing config file is not an
    /// error here: the default points at a local backend.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config {
                api: ApiConfig::default(),
            });
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file at {}", config_path.display()))?;

        config.api.base_url = expand_env_var(&config.api.base_url);
        config.api.base_url = config.api.base_url.trim_end_matches('/').to_string();

        Ok(config)
    }

    /// Write the configuration to disk, creating the directory if needed.
    pub fn save(&self) -> Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir)
            .with_context(|| format!("Failed to create {}", config_dir.display()))?;

        let config_path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        fs::write(&config_path, content)
            .with_context(|| format!("Failed to write {}", config_path.display()))?;

        Ok(config_path)
    }
}

/// Expand environment variable references like ${VAR_NAME}
fn expand_env_var(value: &str) -> String {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).unwrap_or_default()
    } else if let Some(var_name) = value.strip_prefix('$') {
        std::env::var(var_name).unwrap_or_default()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_env_var_braces() {
        // SAFETY: test is single-threaded
        unsafe { std::env::set_var("PROTEX_TEST_VAR_A", "http://api.example") };
        assert_eq!(expand_env_var("${PROTEX_TEST_VAR_A}"), "http://api.example");
        unsafe { std::env::remove_var("PROTEX_TEST_VAR_A") };
    }

    #[test]
    fn test_expand_env_var_literal() {
        assert_eq!(expand_env_var("http://localhost:5000"), "http://localhost:5000");
    }

    #[test]
    fn test_expand_env_var_missing_returns_empty() {
        assert_eq!(expand_env_var("${DEFINITELY_NOT_SET_XYZ_123}"), "");
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
            [api]
            base_url = "http://backend:5000"
            timeout_secs = 10
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://backend:5000");
        assert_eq!(config.api.timeout_secs, 10);
    }

    #[test]
    fn test_config_default_values() {
        let toml_str = r#"
            [api]
        "#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout_secs, 30);
    }

    #[test]
    fn test_config_roundtrip_toml() {
        let config = Config {
            api: ApiConfig {
                base_url: "https://proteins.example.org".into(),
                timeout_secs: 5,
            },
        };

        let serialized = toml::to_string_pretty(&config).unwrap();
        let deserialized: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(deserialized.api.base_url, "https://proteins.example.org");
        assert_eq!(deserialized.api.timeout_secs, 5);
    }
}
