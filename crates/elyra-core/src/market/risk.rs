//! Liquidity-based risk classification.
//!
//! The level only looks at liquidity. Volatility adds a factor but never
//! raises the level, so a deep pool with a 75% swing still reports LOW.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const LOW_LIQUIDITY_USD: f64 = 10_000.0;
pub const MEDIUM_LIQUIDITY_USD: f64 = 50_000.0;
pub const HIGH_VOLATILITY_PCT: f64 = 50.0;

pub const LOW_LIQUIDITY_FACTOR: &str = "Low liquidity (<$10K)";
pub const MEDIUM_LIQUIDITY_FACTOR: &str = "Medium liquidity (<$50K)";
pub const HIGH_VOLATILITY_FACTOR: &str = "High volatility (>50% 24h change)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    pub level: RiskLevel,
    pub factors: Vec<String>,
}

impl RiskAssessment {
    pub fn assess(liquidity_usd: f64, price_change_24h_pct: f64) -> Self {
        let mut factors = Vec::new();

        let level = if liquidity_usd < LOW_LIQUIDITY_USD {
            factors.push(LOW_LIQUIDITY_FACTOR.to_string());
            RiskLevel::High
        } else if liquidity_usd < MEDIUM_LIQUIDITY_USD {
            factors.push(MEDIUM_LIQUIDITY_FACTOR.to_string());
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        };

        if price_change_24h_pct.abs() > HIGH_VOLATILITY_PCT {
            factors.push(HIGH_VOLATILITY_FACTOR.to_string());
        }

        Self { level, factors }
    }
}
