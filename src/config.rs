use std::io::ErrorKind;
use std::path::Path;

use tokio::fs;

use serde::Deserialize;
use thiserror::Error;

use crate::llm::{AnthropicProvider, OpenAIProvider, Provider};

// ============================================================================
// Config (root)
// ============================================================================

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub llm: LlmConfig,
}

impl Config {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = match fs::read_to_string(path).await {
            Ok(c) => c,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(ConfigError::Io(e)),
        };
        Ok(serde_saphyr::from_str(&contents)?)
    }
}

// ============================================================================
// ServerConfig
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout() -> u64 {
    300
}

// ============================================================================
// LlmConfig
// ============================================================================

/// Model tuning shared across providers plus per-provider settings.
/// Credentials are not read from the config file; `credentials_from_env`
/// fills them in once at startup.
#[derive(Debug, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub default_provider: String,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    #[serde(default)]
    pub openai: OpenAiSettings,
    #[serde(default)]
    pub anthropic: AnthropicSettings,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            default_provider: default_provider(),
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            openai: OpenAiSettings::default(),
            anthropic: AnthropicSettings::default(),
        }
    }
}

impl LlmConfig {
    /// Read provider credentials from the environment.
    pub fn credentials_from_env(&mut self) {
        if self.openai.api_key.is_none() {
            self.openai.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        if self.anthropic.api_key.is_none() {
            self.anthropic.api_key = std::env::var("ANTHROPIC_API_KEY").ok();
        }
    }

    /// Model identifier configured for a provider.
    pub fn model_for(&self, provider: Provider) -> &str {
        match provider {
            Provider::OpenAI => &self.openai.model,
            Provider::Anthropic => &self.anthropic.model,
        }
    }
}

fn default_provider() -> String {
    "anthropic".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    1000
}

// ============================================================================
// Per-provider settings
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct OpenAiSettings {
    #[serde(default = "default_openai_model")]
    pub model: String,
    #[serde(default = "default_openai_base_url")]
    pub base_url: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for OpenAiSettings {
    fn default() -> Self {
        Self {
            model: default_openai_model(),
            base_url: default_openai_base_url(),
            api_key: None,
        }
    }
}

fn default_openai_model() -> String {
    "gpt-4".to_string()
}

fn default_openai_base_url() -> String {
    OpenAIProvider::DEFAULT_BASE_URL.to_string()
}

#[derive(Debug, Deserialize)]
pub struct AnthropicSettings {
    #[serde(default = "default_anthropic_model")]
    pub model: String,
    #[serde(default = "default_anthropic_base_url")]
    pub base_url: String,
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for AnthropicSettings {
    fn default() -> Self {
        Self {
            model: default_anthropic_model(),
            base_url: default_anthropic_base_url(),
            api_key: None,
        }
    }
}

fn default_anthropic_model() -> String {
    "claude-3-5-sonnet-20241022".to_string()
}

fn default_anthropic_base_url() -> String {
    AnthropicProvider::DEFAULT_BASE_URL.to_string()
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Yaml(#[from] serde_saphyr::Error),
}

// ============================================================================
// Tests
// ============================================================================
