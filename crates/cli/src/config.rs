//! Configuration loading from mcp-client.toml.

use std::path::Path;

use runtime::providers::{DEFAULT_BASE_URL, DEFAULT_MAX_TOKENS, DEFAULT_MODEL};
use runtime::{AnthropicAuth, AnthropicBackend};
use serde::Deserialize;

/// Config file looked up in the working directory when `--config` is absent.
pub const CONFIG_FILE: &str = "mcp-client.toml";

pub const API_KEY_ENV: &str = "ANTHROPIC_API_KEY";
pub const MODEL_ENV: &str = "MCP_CLIENT_MODEL";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Backend configuration.
    #[serde(default)]
    pub backend: BackendConfig,
}

/// Hosted model configuration.
#[derive(Debug, Deserialize)]
pub struct BackendConfig {
    /// Model to use.
    #[serde(default = "default_model")]
    pub model: String,

    /// Upper bound on tokens generated per model call.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Anthropic API key (sk-ant-api01-...). `ANTHROPIC_API_KEY` takes precedence.
    pub api_key: Option<String>,

    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: default_base_url(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_max_tokens() -> u32 {
    DEFAULT_MAX_TOKENS
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` when given, otherwise [`CONFIG_FILE`] if it exists,
    /// otherwise the defaults.
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(CONFIG_FILE).exists() => Self::load(CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    /// Apply environment overrides; blank values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let var = |name: &str| lookup(name).filter(|v: &String| !v.trim().is_empty());
        if let Some(key) = var(API_KEY_ENV) {
            self.backend.api_key = Some(key);
        }
        if let Some(model) = var(MODEL_ENV) {
            self.backend.model = model;
        }
    }

    /// Build the authentication from config.
    pub fn auth(&self) -> Result<AnthropicAuth, ConfigError> {
        match &self.backend.api_key {
            Some(key) if !key.trim().is_empty() => Ok(AnthropicAuth::api_key(key.trim())),
            _ => Err(ConfigError::MissingAuth),
        }
    }

    /// Build the model backend; fails when no API key is configured.
    pub fn backend(&self) -> Result<AnthropicBackend, ConfigError> {
        if self.backend.max_tokens == 0 {
            return Err(ConfigError::Invalid("backend.max_tokens must be positive".into()));
        }
        let backend = AnthropicBackend::builder(self.auth()?, &self.backend.model)
            .max_tokens(self.backend.max_tokens)
            .base_url(&self.backend.base_url)
            .build();
        Ok(backend)
    }
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("ANTHROPIC_API_KEY is not set (or set backend.api_key in mcp-client.toml)")]
    MissingAuth,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.backend.model, DEFAULT_MODEL);
        assert_eq!(config.backend.max_tokens, 1000);
        assert_eq!(config.backend.base_url, DEFAULT_BASE_URL);
        assert!(config.backend.api_key.is_none());
    }

    #[test]
    fn parses_backend_section() {
        let config = Config::parse(
            r#"
            [backend]
            model = "claude-test"
            max_tokens = 256
            api_key = "sk-file"
            base_url = "http://localhost:9999"
            "#,
        )
        .unwrap();
        assert_eq!(config.backend.model, "claude-test");
        assert_eq!(config.backend.max_tokens, 256);
        assert_eq!(config.backend.api_key.as_deref(), Some("sk-file"));
        assert_eq!(config.backend.base_url, "http://localhost:9999");
    }

    #[test]
    fn invalid_toml_is_parse_error() {
        let err = Config::parse("[backend\nmodel = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn environment_overrides_file() {
        let mut config = Config::parse("[backend]\napi_key = \"sk-file\"\nmodel = \"m1\"").unwrap();
        config.apply_env(env(&[(API_KEY_ENV, "sk-env"), (MODEL_ENV, "m2")]));
        assert_eq!(config.backend.api_key.as_deref(), Some("sk-env"));
        assert_eq!(config.backend.model, "m2");
    }

    #[test]
    fn blank_environment_is_ignored() {
        let mut config = Config::parse("[backend]\napi_key = \"sk-file\"").unwrap();
        config.apply_env(env(&[(API_KEY_ENV, "  ")]));
        assert_eq!(config.backend.api_key.as_deref(), Some("sk-file"));
    }

    #[test]
    fn missing_key_is_reported() {
        let config = Config::default();
        assert!(matches!(config.auth(), Err(ConfigError::MissingAuth)));
        assert!(matches!(config.backend(), Err(ConfigError::MissingAuth)));
    }

    #[test]
    fn zero_max_tokens_is_rejected() {
        let mut config = Config::default();
        config.backend.api_key = Some("sk-test".into());
        config.backend.max_tokens = 0;
        assert!(matches!(config.backend(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn backend_uses_configured_model() {
        let mut config = Config::default();
        config.apply_env(env(&[(API_KEY_ENV, "sk-test"), (MODEL_ENV, "claude-test")]));
        assert_eq!(config.backend().unwrap().model(), "claude-test");
    }

    #[test]
    fn loads_from_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend]\nmax_tokens = 42").unwrap();
        let config = Config::discover(Some(file.path())).unwrap();
        assert_eq!(config.backend.max_tokens, 42);
    }

    #[test]
    fn missing_explicit_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::discover(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
