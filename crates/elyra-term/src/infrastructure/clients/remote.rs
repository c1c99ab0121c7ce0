#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use std::time::Duration;

use async_trait::async_trait;
use elyra_core::service::{
    AskAnswer, AskRequest, NewPair, NewPairsResponse, ScanReport, SolStatus, TokenSummary,
    TrendingResponse, TrendingToken,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::configuration::{Config, ConfigKey};
use crate::domain::models::{GatewayError, TerminalGateway};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Gateway backed by a running `elyra-server`.
pub struct RemoteGateway {
    url: String,
    timeout: Duration,
    client: reqwest::Client,
}

impl Default for RemoteGateway {
    fn default() -> RemoteGateway {
        let gateway = RemoteGateway::new(&Config::get(ConfigKey::ApiUrl));
        let configured = Config::get(ConfigKey::TimeoutSecs);
        return match configured.parse::<u64>() {
            Ok(secs) if secs > 0 => gateway.with_timeout(Duration::from_secs(secs)),
            _ => {
                log::warn!("Ignoring invalid timeout '{}', using {:?}", configured, DEFAULT_TIMEOUT);
                gateway
            }
        };
    }
}

impl RemoteGateway {
    pub fn new(url: &str) -> RemoteGateway {
        let gateway = RemoteGateway {
            url: url.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
            client: reqwest::Client::new(),
        };
        return gateway.with_timeout(DEFAULT_TIMEOUT);
    }

    pub fn with_timeout(mut self, timeout: Duration) -> RemoteGateway {
        self.timeout = timeout;
        self.client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to a client without timeout: {}", e);
                reqwest::Client::new()
            });
        return self;
    }

    pub fn url(&self) -> &str {
        return &self.url;
    }

    pub fn timeout(&self) -> Duration {
        return self.timeout;
    }

    /// Checks that the backend answers on `/health`.
    pub async fn health_check(&self) -> Result<(), GatewayError> {
        let health_url = format!("{}/health", self.url);
        let response = self
            .client
            .get(&health_url)
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("Backend is not reachable: {}", e)))?;

        if !response.status().is_success() {
            return Err(GatewayError::Upstream(format!(
                "Backend health check failed with {}",
                response.status()
            )));
        }

        return Ok(());
    }

    async fn read<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        path: &str,
    ) -> Result<T, GatewayError> {
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Upstream(format!("{} failed: {}", path, e)))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(GatewayError::NotFound(path.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("{} returned {}: {}", path, status, body);
            return Err(GatewayError::Upstream(format!("{} returned {}", path, status)));
        }

        return response
            .json::<T>()
            .await
            .map_err(|e| GatewayError::Upstream(format!("{} sent an invalid body: {}", path, e)));
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, GatewayError> {
        let request = self.client.get(format!("{}{}", self.url, path));
        return self.read(request, path).await;
    }
}

#[async_trait]
impl TerminalGateway for RemoteGateway {
    async fn trending(&self) -> Result<Vec<TrendingToken>, GatewayError> {
        let response: TrendingResponse = self.get("/api/terminal/trending").await?;
        return Ok(response.tokens);
    }

    async fn new_pairs(&self) -> Result<Vec<NewPair>, GatewayError> {
        let response: NewPairsResponse = self.get("/api/terminal/newpairs").await?;
        return Ok(response.pairs);
    }

    async fn sol(&self) -> Result<SolStatus, GatewayError> {
        return self.get("/api/terminal/sol").await;
    }

    async fn scan(&self, address: &str) -> Result<ScanReport, GatewayError> {
        let path = format!("/api/terminal/scan/{}", urlencoding::encode(address));
        return self.get(&path).await;
    }

    async fn token_summary(&self, address: &str) -> Result<TokenSummary, GatewayError> {
        let path = format!("/api/token/{}", urlencoding::encode(address));
        return self.get(&path).await;
    }

    async fn ask(&self, question: &str, token_address: Option<&str>) -> Result<String, GatewayError> {
        let path = "/api/terminal/ask";
        let body = AskRequest {
            question: Some(question.to_string()),
            token_address: token_address.map(str::to_string),
        };
        let request = self.client.post(format!("{}{}", self.url, path)).json(&body);
        let answer: AskAnswer = self.read(request, path).await?;
        return Ok(answer.answer);
    }
}
