use std::sync::Arc;

use async_trait::async_trait;
use elyra_core::llm::providers::openai::create_client;
use elyra_core::market::DexScreenerClient;
use elyra_core::service::{NewPair, ScanReport, SolStatus, TokenSummary, TrendingToken};
use elyra_core::{ElyraConfig, ElyraError, TerminalService};

use crate::domain::models::{GatewayError, TerminalGateway};

/// Gateway that runs the backend logic in-process, without `elyra-server`.
pub struct DirectGateway {
    service: TerminalService,
}

impl DirectGateway {
    pub fn new(service: TerminalService) -> DirectGateway {
        return DirectGateway { service };
    }

    /// Builds the DexScreener and language model clients from configuration.
    /// A missing model key only disables `ask`.
    pub fn from_config(config: &ElyraConfig) -> DirectGateway {
        let market = DexScreenerClient::from_config(&config.market);
        let mut service = TerminalService::new(Arc::new(market));
        match create_client(&config.llm) {
            Ok(llm) => service = service.with_llm(llm),
            Err(e) => log::warn!("Language model unavailable: {}", e),
        }
        return DirectGateway::new(service);
    }
}

fn gateway_error(err: ElyraError) -> GatewayError {
    return match err {
        ElyraError::NotFound(detail) => GatewayError::NotFound(detail),
        other => GatewayError::Upstream(other.to_string()),
    };
}

#[async_trait]
impl TerminalGateway for DirectGateway {
    async fn trending(&self) -> Result<Vec<TrendingToken>, GatewayError> {
        return self.service.trending().await.map_err(gateway_error);
    }

    async fn new_pairs(&self) -> Result<Vec<NewPair>, GatewayError> {
        return self.service.new_pairs().await.map_err(gateway_error);
    }

    async fn sol(&self) -> Result<SolStatus, GatewayError> {
        return self.service.sol_status().await.map_err(gateway_error);
    }

    async fn scan(&self, address: &str) -> Result<ScanReport, GatewayError> {
        return self.service.scan(address).await.map_err(gateway_error);
    }

    async fn token_summary(&self, address: &str) -> Result<TokenSummary, GatewayError> {
        return self
            .service
            .token_summary(address)
            .await
            .map_err(gateway_error);
    }

    async fn ask(&self, question: &str, token_address: Option<&str>) -> Result<String, GatewayError> {
        return self
            .service
            .ask(question, token_address)
            .await
            .map_err(gateway_error);
    }
}
