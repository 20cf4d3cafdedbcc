//! hnscrape - Hacker News keyword scraper
//!
//! ## Usage
//!
//! ```bash
//! hnscrape --words "rust,wasm" --since 48
//! hnscrape --file words.json --score 10 --output hits.csv
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use hnscrape::algolia::ALGOLIA_SEARCH_URL;
use hnscrape::pipeline::{self, RunConfig};
use std::path::PathBuf;
use tracing::{error, Level};
use tracing_subscriber::{fmt, EnvFilter};

// ============================================================================
// CLI Definition
// ============================================================================

/// Search Hacker News for recent stories matching a list of words
#[derive(Parser)]
#[command(name = "hnscrape")]
#[command(version, about, long_about = None)]
struct Cli {
    /// (conditional) Comma-separated list of words to scrape for
    #[arg(short, long)]
    words: Option<String>,

    /// (conditional) Path to a JSON file with an array of words to scrape for
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only retrieve stories with a score equal to or less than this (0 = no limit)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    score: i64,

    /// Retrieve stories from the past number of hours
    #[arg(long, default_value_t = 24, allow_negative_numbers = true)]
    since: i64,

    /// Target CSV file to write results to (default: log to console)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Search endpoint
    #[arg(long, default_value = ALGOLIA_SEARCH_URL)]
    api_url: String,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            words: cli.words,
            file: cli.file,
            score: cli.score,
            since_hours: cli.since,
            output: cli.output,
            api_url: cli.api_url,
        }
    }
}

// ============================================================================
// Main Entry Point
// ============================================================================

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.debug { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level.to_string()));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .init();

    if let Err(e) = run_scrape(RunConfig::from(cli)).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

async fn run_scrape(config: RunConfig) -> Result<()> {
    pipeline::run(&config).await.context("Scrape failed")?;
    Ok(())
}
