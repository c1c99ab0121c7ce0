//! Market data access and derived token analytics.
//!
//! `MarketData` is the seam between the terminal service and the upstream
//! price source. The DexScreener client is the only production
//! implementation; tests plug in canned data.

use crate::errors::ElyraError;
use async_trait::async_trait;

pub mod dexscreener;
pub mod risk;
pub mod snapshot;
pub mod types;

pub use dexscreener::DexScreenerClient;
pub use risk::{RiskAssessment, RiskLevel};
pub use snapshot::TokenSnapshot;
pub use types::{DexPair, TokenListing};

/// Mint address of wrapped SOL.
pub const WRAPPED_SOL_MINT: &str = "So11111111111111111111111111111111111111112";

#[async_trait]
pub trait MarketData: Send + Sync {
    /// All pairs the source knows for a token address, most relevant first.
    async fn token_pairs(&self, address: &str) -> Result<Vec<DexPair>, ElyraError>;

    /// Tokens with the most active boosts.
    async fn top_boosts(&self) -> Result<Vec<TokenListing>, ElyraError>;

    /// Most recently published token profiles.
    async fn latest_profiles(&self) -> Result<Vec<TokenListing>, ElyraError>;
}
