//! Wire types for the DexScreener API.
//!
//! Every field is optional because the API omits or nulls fields freely.
//! Defaults are applied once, when a pair is turned into a snapshot.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DexTokensResponse {
    pub pairs: Option<Vec<DexPair>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DexPair {
    pub chain_id: Option<String>,
    pub dex_id: Option<String>,
    pub pair_address: Option<String>,
    pub base_token: Option<BaseToken>,
    pub price_usd: Option<String>,
    pub price_change: Option<PriceChange>,
    pub liquidity: Option<Liquidity>,
    pub fdv: Option<f64>,
    pub market_cap: Option<f64>,
    pub volume: Option<Volume>,
    pub txns: Option<Txns>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaseToken {
    pub address: Option<String>,
    pub name: Option<String>,
    pub symbol: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PriceChange {
    pub h1: Option<f64>,
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Liquidity {
    pub usd: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Volume {
    pub h24: Option<f64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Txns {
    pub h24: Option<TxnCount>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TxnCount {
    pub buys: Option<u64>,
    pub sells: Option<u64>,
}

/// Entry of the token-boosts and token-profiles listings. Both endpoints
/// share these fields.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TokenListing {
    pub token_address: Option<String>,
    pub chain_id: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
}

impl DexPair {
    pub fn name(&self) -> Option<&str> {
        self.base_token.as_ref().and_then(|t| t.name.as_deref())
    }

    pub fn symbol(&self) -> Option<&str> {
        self.base_token.as_ref().and_then(|t| t.symbol.as_deref())
    }

    pub fn change_1h(&self) -> f64 {
        self.price_change.as_ref().and_then(|c| c.h1).unwrap_or(0.0)
    }

    pub fn change_24h(&self) -> f64 {
        self.price_change.as_ref().and_then(|c| c.h24).unwrap_or(0.0)
    }

    pub fn liquidity_usd(&self) -> f64 {
        self.liquidity.as_ref().and_then(|l| l.usd).unwrap_or(0.0)
    }

    pub fn volume_24h(&self) -> f64 {
        self.volume.as_ref().and_then(|v| v.h24).unwrap_or(0.0)
    }

    pub fn buys_24h(&self) -> u64 {
        self.txns
            .as_ref()
            .and_then(|t| t.h24.as_ref())
            .and_then(|c| c.buys)
            .unwrap_or(0)
    }

    pub fn sells_24h(&self) -> u64 {
        self.txns
            .as_ref()
            .and_then(|t| t.h24.as_ref())
            .and_then(|c| c.sells)
            .unwrap_or(0)
    }
}

/// Returns `value` unless it is missing or empty.
pub fn text_or<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => default,
    }
}
