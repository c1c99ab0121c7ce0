//! ElyraOS backend binary.
//!
//! Loads `elyra.yaml` (optional), builds the DexScreener and language model
//! clients and serves the terminal API until Ctrl+C or SIGTERM.

use anyhow::Result;
use clap::Parser;
use elyra_core::llm::providers::openai::create_client;
use elyra_core::market::DexScreenerClient;
use elyra_core::{ConfigLoader, TerminalService};
use elyra_server::{shutdown_signal, ElyraServer, ServerConfig};
use log::LevelFilter;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[clap(author, version, about = "ElyraOS backend - DexScreener proxy and Elyra question answering")]
struct Cli {
    #[clap(long, short, default_value = "elyra.yaml", help = "Path to the YAML configuration file")]
    config: String,

    #[clap(long, env = "ELYRA_BIND_ADDR", help = "Override the bind address from the configuration")]
    bind_addr: Option<String>,

    #[clap(long, short, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level_filter = cli.log_level.parse().unwrap_or(LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .init();

    let config = ConfigLoader::load_or_default(&cli.config).await?;

    let market = DexScreenerClient::from_config(&config.market);
    log::info!("Market data source: {}", market.base_url());

    let mut service = TerminalService::new(Arc::new(market));
    match create_client(&config.llm) {
        Ok(llm) => {
            log::info!("Language model: {}", config.llm.model);
            service = service.with_llm(llm);
        }
        Err(e) => log::warn!("Language model unavailable: {}", e),
    }

    let mut server_config = ServerConfig::from_settings(&config.server)?;
    if let Some(bind_addr) = cli.bind_addr.as_deref() {
        server_config = server_config.with_bind_addr_str(bind_addr)?;
    }

    let server = ElyraServer::with_config(service, server_config);
    if let Err(e) = server.serve_with_shutdown(shutdown_signal()).await {
        log::error!("Server failed: {}", e);
        return Err(e.into());
    }

    Ok(())
}
