use anyhow::Result;
use clap::Parser;
use elyra_term::application::cli::{self, Cli};

#[tokio::main]
async fn main() -> Result<()> {
    return cli::run(Cli::parse()).await;
}
