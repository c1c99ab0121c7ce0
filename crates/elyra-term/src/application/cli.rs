use std::fs::OpenOptions;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use elyra_core::ConfigLoader;
use log::LevelFilter;

use crate::application::{boot, chat, monitor, ui};
use crate::configuration::{Config, ConfigKey};
use crate::domain::models::TerminalGateway;
use crate::domain::services::Interpreter;
use crate::infrastructure::clients::{DirectGateway, RemoteGateway};

#[derive(Parser, Debug)]
#[clap(name = "elyra-term", author, version, about = "ElyraOS Terminal")]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Option<Commands>,

    #[clap(long, env = "ELYRA_API_URL", help = "Backend URL (default http://127.0.0.1:5000)")]
    pub api_url: Option<String>,

    #[clap(long, env = "ELYRA_TIMEOUT", help = "Backend request timeout in seconds (default 30)")]
    pub timeout: Option<String>,

    #[clap(long, help = "Run the backend logic in-process instead of calling elyra-server")]
    pub direct: bool,

    #[clap(long, short, help = "Configuration file used with --direct (default elyra.yaml)")]
    pub config: Option<String>,

    #[clap(long, help = "Skip the loading sequence")]
    pub no_boot: bool,

    #[clap(long, short = 'e', help = "Run a single command, print its output and exit")]
    pub exec: Option<String>,

    #[clap(long, short, default_value = "warn")]
    pub log_level: String,

    #[clap(long, help = "Log destination (default elyra-term.log)")]
    pub log_file: Option<String>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Chat with Elyra using canned replies
    Chat,
    /// Watch one token's price, market cap and liquidity
    Monitor {
        /// Token contract address (defaults to ElizaOS)
        address: Option<String>,

        #[clap(long, default_value_t = 30, help = "Refresh interval in seconds")]
        interval: u64,
    },
}

/// Logs go to a file so they never interleave with the transcript.
fn init_logging(level: &str) {
    let filter = level.parse().unwrap_or(LevelFilter::Warn);
    let mut builder = env_logger::Builder::new();
    builder.filter_level(filter);

    let path = Config::get(ConfigKey::LogFile);
    match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(e) => {
            eprintln!("Cannot open log file {}: {}. Logging to stderr.", path, e);
        }
    }

    builder.init();
}

async fn build_gateway(direct: bool) -> Result<Arc<dyn TerminalGateway>> {
    if direct {
        let config = ConfigLoader::load_or_default(Config::get(ConfigKey::ConfigFile)).await?;
        log::info!("Using in-process gateway against {}", config.market.base_url);
        return Ok(Arc::new(DirectGateway::from_config(&config)));
    }

    let gateway = RemoteGateway::default();
    if let Err(e) = gateway.health_check().await {
        log::warn!("{} is not healthy: {}", gateway.url(), e);
    }
    return Ok(Arc::new(gateway));
}

pub async fn run(cli: Cli) -> Result<()> {
    Config::load(&[
        (ConfigKey::ApiUrl, cli.api_url.as_deref()),
        (ConfigKey::ConfigFile, cli.config.as_deref()),
        (ConfigKey::LogFile, cli.log_file.as_deref()),
        (ConfigKey::TimeoutSecs, cli.timeout.as_deref()),
    ]);
    init_logging(&cli.log_level);

    if cli.command == Some(Commands::Chat) {
        return chat::run().await;
    }

    let gateway = build_gateway(cli.direct).await?;

    if let Some(Commands::Monitor { address, interval }) = &cli.command {
        let address = address.as_deref().unwrap_or(monitor::DEFAULT_ADDRESS);
        let interval = Duration::from_secs((*interval).max(1));
        return monitor::run(gateway, address, interval).await;
    }

    if let Some(command) = cli.exec.as_deref() {
        return ui::run_once(gateway, command).await;
    }

    if !cli.no_boot {
        boot::run(boot::BootTimings::default(), &mut io::stdout()).await?;
    }

    return ui::start_loop(Arc::new(Interpreter::new(gateway))).await;
}
