//! Error types shared by the market-data, language model and configuration
//! layers.
//!
//! Errors are grouped by the subsystem that raised them so that callers can
//! tell a missing token apart from an unreachable upstream without parsing
//! messages.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ElyraError {
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("Upstream request failed: {0}")]
    Upstream(String),
    #[error("LLM interaction failed: {0}")]
    LLMError(String),
    #[error("Parsing error: {0}")]
    ParsingError(String),
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("I/O error: {0}")]
    IoError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl ElyraError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ElyraError::NotFound(_))
    }
}

impl From<std::io::Error> for ElyraError {
    fn from(err: std::io::Error) -> Self {
        ElyraError::IoError(err.to_string())
    }
}

impl From<reqwest::Error> for ElyraError {
    fn from(err: reqwest::Error) -> Self {
        ElyraError::Upstream(err.to_string())
    }
}
