// src/cli.rs
use crate::config::Config;
use crate::web_scraper::{CompanyScraper, Result, ScrapeConfig};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};

/// Company information web scraper.
///
/// Fetches one website's homepage and extracts identity, contact details,
/// a business description, and key sub-page links, each value tagged with
/// its provenance (found / inferred / not_found).
#[derive(Parser, Debug)]
#[command(name = "company-scraper", version)]
pub struct Cli {
    /// Company website URL to scrape
    pub url: String,

    /// Output JSON file (default: print to console)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Max pages to crawl (default: 15)
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Request timeout in seconds (default: 10)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Configuration file
    #[arg(long, default_value = "config.yml")]
    pub config: String,
}

pub async fn run(args: Cli, config: Config) -> Result<()> {
    let scrape_config = ScrapeConfig {
        max_pages: args.max_pages.unwrap_or(config.scraping.max_pages),
        timeout_seconds: args.timeout.unwrap_or(config.scraping.timeout_seconds),
        user_agent: config.scraping.user_agent.clone(),
    };

    let scraper = CompanyScraper::new(&scrape_config);
    let result = scraper.scrape(&args.url).await;

    if result.is_failed() {
        warn!("Scrape of {} did not produce a page", args.url);
    }

    let json = if config.output.pretty_json {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };

    // A failed scrape is still a normally-reported result; only I/O faults
    // below propagate a non-zero exit.
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, &json).await?;
            info!("Results saved to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
