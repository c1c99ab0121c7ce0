//! Configuration type definitions
//!
//! Every section is optional in the YAML file and falls back to defaults
//! that match the hosted deployment: DexScreener as the market source and an
//! OpenAI-compatible endpoint resolved from the `AI_INTEGRATIONS_*`
//! environment variables.

use crate::errors::ElyraError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ElyraConfig {
    /// HTTP backend settings
    #[serde(default)]
    pub server: ServerSettings,

    /// Market data source settings
    #[serde(default)]
    pub market: MarketConfig,

    /// Language model settings for the `ask` command
    #[serde(default)]
    pub llm: LlmConfig,

    /// Environment variables and env files
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_true")]
    pub enable_cors: bool,

    /// Allowed CORS origins. `None` allows any origin.
    #[serde(default)]
    pub cors_origins: Option<Vec<String>>,

    /// Log every request with an id and its duration.
    #[serde(default = "default_true")]
    pub enable_logging: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            enable_cors: true,
            cors_origins: None,
            enable_logging: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConfig {
    #[serde(default = "default_market_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: default_market_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl MarketConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_model")]
    pub model: String,

    /// Explicit API base. Takes precedence over `api_base_env`.
    #[serde(default)]
    pub api_base: Option<String>,

    #[serde(default = "default_api_base_env")]
    pub api_base_env: Option<String>,

    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub auth: LlmAuth,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: None,
            api_base_env: default_api_base_env(),
            max_tokens: default_max_tokens(),
            timeout_secs: default_timeout_secs(),
            auth: LlmAuth::default(),
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmAuth {
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_api_key_env")]
    pub api_key_env: Option<String>,
}

impl Default for LlmAuth {
    fn default() -> Self {
        Self {
            api_key: None,
            api_key_env: default_api_key_env(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EnvironmentConfig {
    #[serde(default)]
    pub env_files: Vec<PathBuf>,

    #[serde(default)]
    pub variables: HashMap<String, String>,
}

impl ElyraConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ElyraError> {
        if self.server.bind_addr.trim().is_empty() {
            return Err(ElyraError::ConfigError(
                "Server bind_addr cannot be empty".to_string(),
            ));
        }

        if !self.market.base_url.starts_with("http://")
            && !self.market.base_url.starts_with("https://")
        {
            return Err(ElyraError::ConfigError(format!(
                "Market base_url must be an http(s) URL, got '{}'",
                self.market.base_url
            )));
        }

        if self.llm.model.is_empty() {
            return Err(ElyraError::ConfigError(
                "LLM model cannot be empty".to_string(),
            ));
        }

        if self.llm.max_tokens == 0 {
            return Err(ElyraError::ConfigError(
                "LLM max_tokens must be greater than 0".to_string(),
            ));
        }

        if self.market.timeout_secs == 0 || self.llm.timeout_secs == 0 {
            return Err(ElyraError::ConfigError(
                "Timeouts must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_market_base_url() -> String {
    "https://api.dexscreener.com".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_api_key_env() -> Option<String> {
    Some("AI_INTEGRATIONS_OPENAI_API_KEY".to_string())
}

fn default_api_base_env() -> Option<String> {
    Some("AI_INTEGRATIONS_OPENAI_BASE_URL".to_string())
}
