use async_trait::async_trait;
use elyra_core::service::{NewPair, ScanReport, SolStatus, TokenSummary, TrendingToken};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Token not found: {0}")]
    NotFound(String),

    #[error("Upstream failure: {0}")]
    Upstream(String),
}

/// Source of market data and answers for the interpreter.
#[async_trait]
pub trait TerminalGateway: Send + Sync {
    async fn trending(&self) -> Result<Vec<TrendingToken>, GatewayError>;

    async fn new_pairs(&self) -> Result<Vec<NewPair>, GatewayError>;

    async fn sol(&self) -> Result<SolStatus, GatewayError>;

    async fn scan(&self, address: &str) -> Result<ScanReport, GatewayError>;

    /// Compact market view of one token, as shown by the live monitor.
    async fn token_summary(&self, address: &str) -> Result<TokenSummary, GatewayError>;

    async fn ask(&self, question: &str, token_address: Option<&str>)
        -> Result<String, GatewayError>;
}
