//! JSON payloads served by the backend and read back by the terminal.
//!
//! Field names follow the camelCase shape the web front end already
//! consumes.

use crate::market::{RiskLevel, TokenSnapshot};
use serde::{Deserialize, Serialize};

/// Compact token view used by the live monitoring cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSummary {
    pub name: String,
    pub symbol: String,
    pub price: String,
    pub price_change_24h: f64,
    pub liquidity: f64,
    pub fdv: f64,
    pub market_cap: f64,
    pub volume_24h: f64,
    pub txns_24h: u64,
    pub buys_24h: u64,
    pub sells_24h: u64,
    pub chain: String,
    pub dex: String,
}

impl From<&TokenSnapshot> for TokenSummary {
    fn from(snapshot: &TokenSnapshot) -> Self {
        Self {
            name: snapshot.name.clone(),
            symbol: snapshot.symbol.clone(),
            price: snapshot.price_usd.clone(),
            price_change_24h: snapshot.price_change_24h_pct,
            liquidity: snapshot.liquidity_usd,
            fdv: snapshot.fdv_usd,
            market_cap: snapshot.market_cap_usd,
            volume_24h: snapshot.volume_24h_usd,
            txns_24h: snapshot.buys_24h + snapshot.sells_24h,
            buys_24h: snapshot.buys_24h,
            sells_24h: snapshot.sells_24h,
            chain: snapshot.chain.clone(),
            dex: snapshot.dex.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingToken {
    pub name: String,
    pub symbol: String,
    pub chain: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingResponse {
    pub tokens: Vec<TrendingToken>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPair {
    pub address: String,
    pub chain: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPairsResponse {
    pub pairs: Vec<NewPair>,
}

/// Full scan result: the snapshot plus its risk classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(flatten)]
    pub snapshot: TokenSnapshot,
    pub risk_score: RiskLevel,
    pub risk_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolStatus {
    pub price: String,
    pub price_change_24h: f64,
    pub volume_24h: f64,
    pub liquidity: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AskRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskAnswer {
    pub answer: String,
}
