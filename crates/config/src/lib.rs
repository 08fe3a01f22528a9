//! Configuration loading and validation for Infill.
//!
//! Loads `~/.infill/config.toml` with `INFILL_*` environment variable
//! overrides. Every field has a serde default, so a missing file or an
//! empty table yields a fully working configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// The root configuration structure.
///
/// Maps directly to `~/.infill/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Model id sent to the inference backend.
    #[serde(default = "default_model")]
    pub model: String,

    /// Token ceiling for assembled prompts.
    #[serde(default = "default_token_limit")]
    pub token_limit: usize,

    /// Cap on tokens the backend may generate per completion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Inference backend settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Context-ranking settings.
    #[serde(default)]
    pub context: ContextConfig,
}

fn default_model() -> String {
    "codellama:7b-code".into()
}
fn default_token_limit() -> usize {
    8192
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            token_limit: default_token_limit(),
            max_tokens: None,
            provider: ProviderConfig::default(),
            context: ContextConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL of the Ollama server.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:11434".into()
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContextConfig {
    /// Wall-clock budget for context ranking, in milliseconds.
    #[serde(default = "default_soft_timeout_ms")]
    pub soft_timeout_ms: u64,

    /// Files larger than this are never considered as context.
    #[serde(default = "default_max_file_bytes")]
    pub max_file_bytes: u64,

    /// Characters around the cursor used as the ranking query window.
    #[serde(default = "default_window_chars")]
    pub window_chars: usize,

    /// Upper bound on candidate files scored per query.
    #[serde(default = "default_pre_score_limit")]
    pub pre_score_limit: usize,
}

fn default_soft_timeout_ms() -> u64 {
    50
}
fn default_max_file_bytes() -> u64 {
    256 * 1024
}
fn default_window_chars() -> usize {
    2048
}
fn default_pre_score_limit() -> usize {
    512
}

impl Default for ContextConfig {
    fn default() -> Self {
        Self {
            soft_timeout_ms: default_soft_timeout_ms(),
            max_file_bytes: default_max_file_bytes(),
            window_chars: default_window_chars(),
            pre_score_limit: default_pre_score_limit(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl AppConfig {
    /// The directory holding the config file (`~/.infill`).
    pub fn config_dir() -> PathBuf {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .unwrap_or_else(|_| ".".to_string());
        PathBuf::from(home).join(".infill")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load from the default path. A missing file yields defaults; env
    /// overrides apply either way.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path, apply env overrides, and validate.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            toml::from_str(&raw).map_err(|e| ConfigError::Parse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// The context soft timeout as a `Duration`.
    pub fn soft_timeout(&self) -> Duration {
        Duration::from_millis(self.context.soft_timeout_ms)
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(model) = std::env::var("INFILL_MODEL") {
            self.model = model;
        }
        if let Ok(url) = std::env::var("INFILL_BASE_URL") {
            self.provider.base_url = url;
        }
        if let Ok(raw) = std::env::var("INFILL_TOKEN_LIMIT") {
            match raw.parse() {
                Ok(limit) => self.token_limit = limit,
                Err(_) => warn!(value = %raw, "Ignoring unparseable INFILL_TOKEN_LIMIT"),
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::Invalid("model must not be empty".into()));
        }
        if self.token_limit == 0 {
            return Err(ConfigError::Invalid("token_limit must be positive".into()));
        }
        if self.provider.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "provider.base_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_config(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{contents}").unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_target_a_local_ollama() {
        let config = AppConfig::default();
        assert_eq!(config.token_limit, 8192);
        assert_eq!(config.context.soft_timeout_ms, 50);
        assert_eq!(config.provider.base_url, "http://localhost:11434");
    }

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.model, "codellama:7b-code");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let (_dir, path) = write_config("model = \"qwen2.5-coder:1.5b\"\n");
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.model, "qwen2.5-coder:1.5b");
        assert_eq!(config.token_limit, 8192);
    }

    #[test]
    fn nested_tables_parse() {
        let (_dir, path) = write_config(
            "token_limit = 4096\n\
             [provider]\n\
             base_url = \"http://10.0.0.2:11434\"\n\
             [context]\n\
             soft_timeout_ms = 120\n",
        );
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.token_limit, 4096);
        assert_eq!(config.provider.base_url, "http://10.0.0.2:11434");
        assert_eq!(config.soft_timeout(), Duration::from_millis(120));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let (_dir, path) = write_config("model = [broken\n");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn zero_token_limit_is_rejected() {
        let (_dir, path) = write_config("token_limit = 0\n");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("token_limit"));
    }

    #[test]
    fn empty_model_is_rejected() {
        let (_dir, path) = write_config("model = \"  \"\n");
        let err = AppConfig::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("model"));
    }
}
