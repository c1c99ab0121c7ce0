//! Text panels for gateway results.

#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use elyra_core::format::{
    fixed, format_price, format_usd, pad, parse_price, signed_percent, signed_percent_fixed,
};
use elyra_core::service::{
    NewPair, ScanReport, SolStatus, TokenSummary, TrendingToken, LISTING_LIMIT,
};

const PANEL_TOP: &str = "╔═══════════════════════════════════════════════════════╗";
const PANEL_DIVIDER: &str = "╠═══════════════════════════════════════════════════════╣";
const PANEL_BOTTOM: &str = "╚═══════════════════════════════════════════════════════╝";

const FIELD_WIDTH: usize = 40;
const PRICE_WIDTH: usize = 39;
const RISK_WIDTH: usize = 34;
const FACTOR_WIDTH: usize = 48;

pub fn trending(tokens: &[TrendingToken]) -> String {
    let mut output = String::from("\nTOP TRENDING TOKENS\n─────────────────────\n");
    if tokens.is_empty() {
        output.push_str("No trending tokens found.\n");
    }
    for (i, token) in tokens.iter().take(LISTING_LIMIT).enumerate() {
        let label = if token.symbol.is_empty() {
            &token.name
        } else {
            &token.symbol
        };
        output.push_str(&format!("{}. {} ({})\n", i + 1, label, token.chain));
    }
    return output;
}

pub fn new_pairs(pairs: &[NewPair]) -> String {
    let mut output = String::from("\nRECENTLY LAUNCHED TOKENS\n─────────────────────────\n");
    if pairs.is_empty() {
        output.push_str("No new pairs found.\n");
    }
    for (i, pair) in pairs.iter().take(LISTING_LIMIT).enumerate() {
        output.push_str(&format!("{}. {}... ({})\n", i + 1, pair.address, pair.chain));
    }
    return output;
}

pub fn sol(status: &SolStatus) -> String {
    return format!(
        "\nSOL NETWORK STATUS\n─────────────────────\nPrice:      ${} ({})\nVolume 24h: {}\nLiquidity:  {}",
        fixed(parse_price(&status.price), 2),
        signed_percent_fixed(status.price_change_24h),
        format_usd(status.volume_24h),
        format_usd(status.liquidity),
    );
}

/// Live monitoring card for one token.
pub fn token_card(summary: &TokenSummary) -> String {
    return format!(
        "{} (${})  {} / {}\nPrice:       {}\n24h Change:  {}\nMCap:        {}\nLiquidity:   {}\nVolume 24h:  {}\nTxns 24h:    {} ({} buys / {} sells)",
        summary.name,
        summary.symbol,
        summary.chain,
        summary.dex,
        format_price(parse_price(&summary.price)),
        signed_percent_fixed(summary.price_change_24h),
        format_usd(summary.market_cap),
        format_usd(summary.liquidity),
        format_usd(summary.volume_24h),
        summary.txns_24h,
        summary.buys_24h,
        summary.sells_24h,
    );
}

fn row(label: &str, value: &str) -> String {
    return format!("║  {:<12}{}║", label, pad(value, FIELD_WIDTH));
}

fn heading(title: &str, underline: &str) -> [String; 2] {
    return [
        format!("║  {}║", pad(title, 53)),
        format!("║  {}║", pad(underline, 53)),
    ];
}

/// The bordered intelligence panel printed by `scan`.
pub fn scan_panel(report: &ScanReport) -> String {
    let token = &report.snapshot;
    let mut rows: Vec<String> = vec![
        String::new(),
        PANEL_TOP.to_string(),
        format!("║  {}║", pad("TOKEN INTELLIGENCE SCAN", 53)),
        PANEL_DIVIDER.to_string(),
        row("Name:", &token.name),
        row("Symbol:", &token.symbol),
        row("Chain:", &token.chain),
        row("DEX:", &token.dex),
        PANEL_DIVIDER.to_string(),
    ];

    rows.extend(heading("PRICE DATA", "───────────"));
    rows.push(format!("║  {:<12}${}║", "Price:", pad(&token.price_usd, PRICE_WIDTH)));
    rows.push(row("1h Change:", &signed_percent(token.price_change_1h_pct)));
    rows.push(row("24h Change:", &signed_percent(token.price_change_24h_pct)));
    rows.push(PANEL_DIVIDER.to_string());

    rows.extend(heading("MARKET DATA", "───────────"));
    rows.push(row("Market Cap:", &format_usd(token.market_cap_usd)));
    rows.push(row("FDV:", &format_usd(token.fdv_usd)));
    rows.push(row("Liquidity:", &format_usd(token.liquidity_usd)));
    rows.push(row("Volume 24h:", &format_usd(token.volume_24h_usd)));
    rows.push(PANEL_DIVIDER.to_string());

    rows.extend(heading("TRADING ACTIVITY", "────────────────"));
    rows.push(row("Buys 24h:", &token.buys_24h.to_string()));
    rows.push(row("Sells 24h:", &token.sells_24h.to_string()));
    rows.push(PANEL_DIVIDER.to_string());

    rows.push(format!(
        "║  RISK ASSESSMENT: {}║",
        pad(&report.risk_score.to_string(), RISK_WIDTH)
    ));
    for factor in &report.risk_factors {
        rows.push(format!("║  - {}║", pad(factor, FACTOR_WIDTH)));
    }
    rows.push(PANEL_BOTTOM.to_string());

    return rows.join("\n");
}
