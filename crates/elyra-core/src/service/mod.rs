//! Request handling shared by the HTTP backend and the in-process terminal.
//!
//! `TerminalService` turns upstream market data into the payloads of
//! `payloads` and drives the language model for `ask`. It holds no state
//! beyond its clients, so it is cheap to clone into every handler.

use crate::core_types::Message;
use crate::errors::ElyraError;
use crate::llm::LLM;
use crate::market::{MarketData, RiskAssessment, TokenListing, TokenSnapshot, WRAPPED_SOL_MINT};
use std::sync::Arc;

pub mod payloads;
pub mod prompt;

pub use payloads::*;

/// Maximum number of entries returned by listing endpoints.
pub const LISTING_LIMIT: usize = 10;

/// Answer used when the model returns no text.
pub const EMPTY_ANSWER: &str = "Unable to process your question.";

#[derive(Clone)]
pub struct TerminalService {
    market: Arc<dyn MarketData>,
    llm: Option<Arc<dyn LLM>>,
}

impl TerminalService {
    pub fn new(market: Arc<dyn MarketData>) -> Self {
        Self { market, llm: None }
    }

    pub fn with_llm(mut self, llm: Arc<dyn LLM>) -> Self {
        self.llm = Some(llm);
        self
    }

    pub fn has_llm(&self) -> bool {
        self.llm.is_some()
    }

    /// Snapshot of the first pair for `address`.
    pub async fn snapshot(&self, address: &str) -> Result<TokenSnapshot, ElyraError> {
        let pairs = self.market.token_pairs(address).await?;
        let pair = pairs
            .first()
            .ok_or_else(|| ElyraError::NotFound(format!("No pairs found for token {}", address)))?;

        Ok(TokenSnapshot::from_pair(address, pair))
    }

    pub async fn token_summary(&self, address: &str) -> Result<TokenSummary, ElyraError> {
        let snapshot = self.snapshot(address).await?;
        Ok(TokenSummary::from(&snapshot))
    }

    pub async fn scan(&self, address: &str) -> Result<ScanReport, ElyraError> {
        let snapshot = self.snapshot(address).await?;
        let risk = RiskAssessment::assess(snapshot.liquidity_usd, snapshot.price_change_24h_pct);
        log::debug!(
            "Scanned {} ({}): risk {} with {} factor(s)",
            snapshot.symbol,
            address,
            risk.level,
            risk.factors.len()
        );

        Ok(ScanReport {
            snapshot,
            risk_score: risk.level,
            risk_factors: risk.factors,
        })
    }

    pub async fn trending(&self) -> Result<Vec<TrendingToken>, ElyraError> {
        let listings = self.market.top_boosts().await?;
        Ok(listings
            .iter()
            .take(LISTING_LIMIT)
            .map(trending_token)
            .collect())
    }

    pub async fn new_pairs(&self) -> Result<Vec<NewPair>, ElyraError> {
        let listings = self.market.latest_profiles().await?;
        Ok(listings
            .iter()
            .take(LISTING_LIMIT)
            .map(new_pair)
            .collect())
    }

    /// Price and activity of wrapped SOL. Missing pairs yield zeroed fields
    /// rather than a not-found error.
    pub async fn sol_status(&self) -> Result<SolStatus, ElyraError> {
        let pairs = self.market.token_pairs(WRAPPED_SOL_MINT).await?;
        let status = match pairs.first() {
            Some(pair) => {
                let snapshot = TokenSnapshot::from_pair(WRAPPED_SOL_MINT, pair);
                SolStatus {
                    price: snapshot.price_usd,
                    price_change_24h: snapshot.price_change_24h_pct,
                    volume_24h: snapshot.volume_24h_usd,
                    liquidity: snapshot.liquidity_usd,
                }
            }
            None => SolStatus {
                price: "0".to_string(),
                price_change_24h: 0.0,
                volume_24h: 0.0,
                liquidity: 0.0,
            },
        };

        Ok(status)
    }

    /// Answers a free-form question, optionally grounded in one token's data.
    ///
    /// The token lookup is best effort: any failure there is logged and the
    /// question is sent without context.
    pub async fn ask(
        &self,
        question: &str,
        token_address: Option<&str>,
    ) -> Result<String, ElyraError> {
        if question.trim().is_empty() {
            return Err(ElyraError::ValidationError(
                "Question is required".to_string(),
            ));
        }

        let llm = self.llm.as_ref().ok_or_else(|| {
            ElyraError::ConfigError("No language model is configured".to_string())
        })?;

        let context = match token_address.map(str::trim).filter(|a| !a.is_empty()) {
            Some(address) => match self.snapshot(address).await {
                Ok(snapshot) => Some(prompt::token_context(&snapshot)),
                Err(e) => {
                    log::error!("Error fetching token context for {}: {}", address, e);
                    None
                }
            },
            None => None,
        };

        let messages = vec![
            Message::system(prompt::system_prompt(context.as_deref())),
            Message::user(question),
        ];

        let response = llm.generate(messages).await?;
        Ok(response
            .content
            .filter(|answer| !answer.is_empty())
            .unwrap_or_else(|| EMPTY_ANSWER.to_string()))
    }
}

fn prefix(text: &str, chars: usize) -> String {
    text.chars().take(chars).collect()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn trending_token(listing: &TokenListing) -> TrendingToken {
    TrendingToken {
        name: non_empty(listing.token_address.as_deref())
            .map(|a| prefix(a, 8))
            .unwrap_or_else(|| "Unknown".to_string()),
        symbol: non_empty(listing.description.as_deref())
            .unwrap_or("???")
            .to_string(),
        chain: non_empty(listing.chain_id.as_deref())
            .unwrap_or("solana")
            .to_string(),
        url: listing.url.clone().unwrap_or_default(),
    }
}

fn new_pair(listing: &TokenListing) -> NewPair {
    NewPair {
        address: non_empty(listing.token_address.as_deref())
            .map(|a| prefix(a, 12))
            .unwrap_or_else(|| "Unknown".to_string()),
        chain: non_empty(listing.chain_id.as_deref())
            .unwrap_or("unknown")
            .to_string(),
        description: listing.description.clone().unwrap_or_default(),
    }
}

#[cfg(test)]
#[path = "service_test.rs"]
mod tests;
