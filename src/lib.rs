//! # hnscrape
//!
//! Hacker News keyword scraper: searches the Algolia HN API for recent
//! stories matching a list of words and writes the deduplicated hits as CSV.
//!
//! ## Modules
//!
//! - [`terms`] - Search term resolution (inline list or JSON file)
//! - [`query`] - Time and score bounded query strings
//! - [`algolia`] - Algolia search API client
//! - [`aggregate`] - Cross-term deduplication
//! - [`output`] - Console and CSV writers
//! - [`pipeline`] - One full run
//! - [`error`] - Custom error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use hnscrape::pipeline::{self, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = RunConfig {
//!         words: Some("rust,wasm".to_string()),
//!         ..Default::default()
//!     };
//!     let table = pipeline::run(&config).await?;
//!     println!("Found {} stories", table.len());
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod algolia;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod query;
pub mod terms;

pub use error::{Result, ScrapeError};
