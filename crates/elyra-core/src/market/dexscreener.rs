use super::types::{DexPair, DexTokensResponse, TokenListing};
use super::MarketData;
use crate::config::MarketConfig;
use crate::errors::ElyraError;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client for the public DexScreener API.
///
/// Each call is a single attempt. Non-success statuses and transport errors
/// both surface as `ElyraError::Upstream`.
#[derive(Debug, Clone)]
pub struct DexScreenerClient {
    client: Client,
    base_url: String,
}

impl DexScreenerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            });
        self
    }

    pub fn from_config(config: &MarketConfig) -> Self {
        Self::new(config.base_url.clone()).with_timeout(config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json(&self, path: &str) -> Result<Value, ElyraError> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("DexScreener request: GET {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(ElyraError::Upstream(format!(
                "DexScreener API returned {}",
                response.status()
            )));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ElyraError::ParsingError(format!("Invalid DexScreener response: {}", e)))
    }

    async fn listings(&self, path: &str) -> Result<Vec<TokenListing>, ElyraError> {
        let body = self.get_json(path).await?;
        let Value::Array(entries) = body else {
            log::warn!("DexScreener {} returned a non-array body, treating as empty", path);
            return Ok(Vec::new());
        };

        Ok(entries
            .into_iter()
            .map(|entry| serde_json::from_value::<TokenListing>(entry).unwrap_or_default())
            .collect())
    }
}

#[async_trait]
impl MarketData for DexScreenerClient {
    async fn token_pairs(&self, address: &str) -> Result<Vec<DexPair>, ElyraError> {
        let path = format!("/latest/dex/tokens/{}", urlencoding::encode(address));
        let body = self.get_json(&path).await?;
        let response: DexTokensResponse = serde_json::from_value(body)
            .map_err(|e| ElyraError::ParsingError(format!("Invalid pair payload: {}", e)))?;

        Ok(response.pairs.unwrap_or_default())
    }

    async fn top_boosts(&self) -> Result<Vec<TokenListing>, ElyraError> {
        self.listings("/token-boosts/top/v1").await
    }

    async fn latest_profiles(&self) -> Result<Vec<TokenListing>, ElyraError> {
        self.listings("/token-profiles/latest/v1").await
    }
}
