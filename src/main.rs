// src/main.rs
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod cli;
mod config;
mod web_scraper;

use config::{load_config, Config};

#[tokio::main]
async fn main() -> web_scraper::Result<()> {
    dotenv::dotenv().ok();

    let args = cli::Cli::parse();

    // Load configuration
    let config = load_config(&args.config).await.ok();

    // Setup logging
    let level = config
        .as_ref()
        .map(|c| c.logging.level.clone())
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(format!("company_scraper={}", level))),
        )
        .init();

    let config = config.unwrap_or_else(|| {
        warn!("Failed to load {}. Using defaults.", args.config);
        Config::default()
    });

    cli::run(args, config).await
}
