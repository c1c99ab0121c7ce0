//! Live monitor: one token's market card, refreshed on an interval.

use std::io::{self, IsTerminal, Write};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::queue;
use crossterm::style::{Print, PrintStyledContent, Stylize};

use crate::domain::models::{GatewayError, TerminalGateway};
use crate::domain::services::{render, texts};

/// ElizaOS on Solana, the token tracked on the landing page.
pub const DEFAULT_ADDRESS: &str = "DuMbhu7mvQvqQHGcnikDgb4XegXJRyhUBfdU22uELiZA";

pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(30);

const FETCH_FAILED: &str = "Failed to fetch token data";

/// Fetches the token once and prints its card, or the reason it is missing.
/// Gateway failures are reported inline so the monitor keeps polling.
pub async fn refresh<W: Write>(
    gateway: &dyn TerminalGateway,
    address: &str,
    styled: bool,
    out: &mut W,
) -> Result<()> {
    let message = match gateway.token_summary(address).await {
        Ok(summary) => {
            queue!(out, Print(render::token_card(&summary)), Print("\n\n"))?;
            out.flush()?;
            return Ok(());
        }
        Err(GatewayError::NotFound(detail)) => {
            log::warn!("Monitor found nothing: {}", detail);
            texts::TOKEN_NOT_FOUND
        }
        Err(e) => {
            log::error!("Monitor refresh for {} failed: {}", address, e);
            FETCH_FAILED
        }
    };

    if styled {
        queue!(out, PrintStyledContent(message.red()), Print("\n\n"))?;
    } else {
        queue!(out, Print(message), Print("\n\n"))?;
    }
    out.flush()?;
    return Ok(());
}

/// Polls `address` every `interval` until Ctrl+C.
pub async fn run(gateway: Arc<dyn TerminalGateway>, address: &str, interval: Duration) -> Result<()> {
    let mut stdout = io::stdout();
    let styled = stdout.is_terminal();
    let header = format!(
        "Live Network Monitoring: {} (every {}s, Ctrl+C to stop)\n\n",
        address,
        interval.as_secs()
    );
    if styled {
        queue!(stdout, PrintStyledContent(header.magenta().bold()))?;
    } else {
        queue!(stdout, Print(header))?;
    }

    let mut ticker = tokio::time::interval(interval);
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                refresh(gateway.as_ref(), address, styled, &mut stdout).await?;
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("Received Ctrl+C, leaving monitor");
                break;
            }
        }
    }

    return Ok(());
}
