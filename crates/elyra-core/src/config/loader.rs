//! Configuration loader for YAML files and environment resolution

use crate::config::types::*;
use crate::errors::ElyraError;
use std::env;
use std::path::Path;
use tokio::fs;

/// Configuration loader with environment resolution
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<ElyraConfig, ElyraError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            ElyraError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_str(&content)
    }

    /// Load the file when it exists, otherwise start from defaults.
    ///
    /// Environment resolution runs in both cases so that the LLM key and
    /// base URL are still picked up without a config file.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> Result<ElyraConfig, ElyraError> {
        let path = path.as_ref();
        if path.exists() {
            log::info!("Loading configuration from file: {}", path.display());
            return Self::from_file(path).await;
        }

        log::info!(
            "No configuration file at {}, using defaults",
            path.display()
        );
        let mut config = ElyraConfig::default();
        Self::resolve_environment(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_str(content: &str) -> Result<ElyraConfig, ElyraError> {
        let mut config: ElyraConfig = if content.trim().is_empty() {
            ElyraConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                ElyraError::ConfigError(format!("Failed to parse YAML config: {}", e))
            })?
        };

        Self::resolve_environment(&mut config)?;
        config.validate()?;

        Ok(config)
    }

    /// Resolve environment variables in the configuration
    fn resolve_environment(config: &mut ElyraConfig) -> Result<(), ElyraError> {
        for env_file in &config.environment.env_files {
            if env_file.exists() {
                Self::load_env_file(env_file)?;
            } else {
                log::debug!("Skipping missing env file {}", env_file.display());
            }
        }

        for (key, value) in &config.environment.variables {
            env::set_var(key, value);
        }

        Self::resolve_llm(&mut config.llm);

        Ok(())
    }

    fn load_env_file<P: AsRef<Path>>(path: P) -> Result<(), ElyraError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ElyraError::ConfigError(format!(
                "Failed to read env file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let value = value.trim().trim_matches('"').trim_matches('\'');
                env::set_var(key, value);
            }
        }

        Ok(())
    }

    /// Fill the API key and base URL from their environment variables when
    /// the file does not set them directly.
    fn resolve_llm(llm: &mut LlmConfig) {
        if llm.auth.api_key.is_none() {
            if let Some(env_var) = &llm.auth.api_key_env {
                if let Ok(api_key) = env::var(env_var) {
                    llm.auth.api_key = Some(api_key);
                }
            }
        }

        if llm.api_base.is_none() {
            if let Some(env_var) = &llm.api_base_env {
                if let Ok(api_base) = env::var(env_var) {
                    if !api_base.trim().is_empty() {
                        llm.api_base = Some(api_base);
                    }
                }
            }
        }
    }
}
