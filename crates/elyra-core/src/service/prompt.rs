//! System prompt assembly for the `ask` command.

use crate::format::grouped;
use crate::market::TokenSnapshot;

const PERSONA: &str = "You are Elyra, an AI assistant specializing in DeFi, cryptocurrency, and blockchain analysis.
You are part of the ElyraOS terminal interface.
Be concise, helpful, and technical when appropriate.
If analyzing a token, consider factors like liquidity, volume, price action, and potential risks.
Always remind users that this is not financial advice.
";

/// Summary of one token appended to the system prompt.
pub fn token_context(snapshot: &TokenSnapshot) -> String {
    format!(
        "Token Data for {symbol}:
- Price: ${price}
- 24h Change: {change}%
- Market Cap: ${market_cap}
- Liquidity: ${liquidity}
- 24h Volume: ${volume}
- Chain: {chain}
- DEX: {dex}
",
        symbol = snapshot.symbol,
        price = snapshot.price_usd,
        change = snapshot.price_change_24h_pct,
        market_cap = grouped(snapshot.market_cap_usd),
        liquidity = grouped(snapshot.liquidity_usd),
        volume = grouped(snapshot.volume_24h_usd),
        chain = snapshot.chain,
        dex = snapshot.dex,
    )
}

pub fn system_prompt(context: Option<&str>) -> String {
    match context {
        Some(context) if !context.is_empty() => format!("{}\nContext:\n{}", PERSONA, context),
        _ => PERSONA.to_string(),
    }
}
