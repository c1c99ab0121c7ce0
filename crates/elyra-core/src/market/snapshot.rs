use super::types::{text_or, DexPair};
use serde::{Deserialize, Serialize};

/// Point-in-time market data for one token, taken from the first pair the
/// market source reports for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenSnapshot {
    pub name: String,
    pub symbol: String,
    pub address: String,
    pub chain: String,
    pub dex: String,
    #[serde(rename = "price")]
    pub price_usd: String,
    #[serde(rename = "priceChange1h")]
    pub price_change_1h_pct: f64,
    #[serde(rename = "priceChange24h")]
    pub price_change_24h_pct: f64,
    #[serde(rename = "marketCap")]
    pub market_cap_usd: f64,
    #[serde(rename = "fdv")]
    pub fdv_usd: f64,
    #[serde(rename = "liquidity")]
    pub liquidity_usd: f64,
    #[serde(rename = "volume24h")]
    pub volume_24h_usd: f64,
    #[serde(rename = "buys24h")]
    pub buys_24h: u64,
    #[serde(rename = "sells24h")]
    pub sells_24h: u64,
}

impl TokenSnapshot {
    pub fn from_pair(address: &str, pair: &DexPair) -> Self {
        Self {
            name: text_or(pair.name(), "Unknown").to_string(),
            symbol: text_or(pair.symbol(), "???").to_string(),
            address: address.to_string(),
            chain: text_or(pair.chain_id.as_deref(), "unknown").to_string(),
            dex: text_or(pair.dex_id.as_deref(), "unknown").to_string(),
            price_usd: text_or(pair.price_usd.as_deref(), "0").to_string(),
            price_change_1h_pct: pair.change_1h(),
            price_change_24h_pct: pair.change_24h(),
            market_cap_usd: pair.market_cap.unwrap_or(0.0),
            fdv_usd: pair.fdv.unwrap_or(0.0),
            liquidity_usd: pair.liquidity_usd(),
            volume_24h_usd: pair.volume_24h(),
            buys_24h: pair.buys_24h(),
            sells_24h: pair.sells_24h(),
        }
    }
}
