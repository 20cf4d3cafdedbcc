//! End-to-end scrape run: resolve terms, fetch each one in turn, merge, write.
//!
//! The first error from any stage ends the run and is returned to the caller.

use crate::aggregate::{Aggregator, ResultTable};
use crate::algolia::{AlgoliaClient, ALGOLIA_SEARCH_URL};
use crate::error::Result;
use crate::output::{self, OutputTarget};
use crate::query::{self, SearchQuery};
use crate::terms;
use chrono::Utc;
use std::path::PathBuf;
use tracing::info;

/// Settings for one run
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Inline comma-separated terms
    pub words: Option<String>,
    /// JSON word list file
    pub file: Option<PathBuf>,
    /// Max points; non-positive disables the filter
    pub score: i64,
    /// Lookback window in hours
    pub since_hours: i64,
    /// CSV destination; `None` logs rows to the console
    pub output: Option<PathBuf>,
    /// Search endpoint
    pub api_url: String,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            words: None,
            file: None,
            score: 0,
            since_hours: 24,
            output: None,
            api_url: ALGOLIA_SEARCH_URL.to_string(),
        }
    }
}

/// Run against the current time.
pub async fn run(config: &RunConfig) -> Result<ResultTable> {
    run_at(config, Utc::now().timestamp()).await
}

/// Run with an explicit "now" (Unix seconds).
pub async fn run_at(config: &RunConfig, now_unix: i64) -> Result<ResultTable> {
    let terms = terms::resolve(config.words.as_deref(), config.file.as_deref())?;
    let client = AlgoliaClient::with_base_url(&config.api_url)?;
    let created_after = query::created_after(now_unix, config.since_hours)?;

    info!(
        terms = terms.len(),
        since_hours = config.since_hours,
        score = config.score,
        "Starting scrape"
    );

    let table = collect(&client, &terms, created_after, config.score).await?;

    let target = OutputTarget::from_path(config.output.clone());
    output::write(&table, &target)?;

    info!(rows = table.len(), output = ?target, "Scrape complete");
    Ok(table)
}

/// Fetch every term sequentially and merge the hits in term order.
pub async fn collect(
    client: &AlgoliaClient,
    terms: &[String],
    created_after: i64,
    score: i64,
) -> Result<ResultTable> {
    let mut aggregator = Aggregator::new();

    for term in terms {
        let query = SearchQuery::new(term.as_str(), created_after, score);
        let hits = client.search(&query).await?;
        let added = aggregator.merge(&hits);
        info!(term = %term, hits = hits.len(), added = added, "Merged search results");
    }

    Ok(aggregator.into_table())
}
