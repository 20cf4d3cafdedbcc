//! Hacker News Algolia API client
//!
//! Fetches one page of `search_by_date` results per query.
//!
//! API Details:
//! - Endpoint: GET /api/v1/search_by_date
//! - No API key required
//! - `points`, `title` and `num_comments` may be `null` on some items
//! - Extra fields and trailing data after the response object are ignored

use crate::error::{Result, ScrapeError};
use crate::query::SearchQuery;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

/// Default search endpoint
pub const ALGOLIA_SEARCH_URL: &str = "https://hn.algolia.com/api/v1/search_by_date";

/// One search result
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hit {
    pub object_id: String,
    pub title: String,
    pub points: i64,
    pub num_comments: i64,
}

/// Algolia API response structures
#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    hits: Option<Vec<AlgoliaHit>>,
}

#[derive(Debug, Deserialize)]
struct AlgoliaHit {
    #[serde(rename = "objectID", default)]
    object_id: Option<String>,
    title: Option<String>,
    points: Option<i64>,
    num_comments: Option<i64>,
}

impl From<AlgoliaHit> for Hit {
    fn from(hit: AlgoliaHit) -> Self {
        Self {
            object_id: hit.object_id.unwrap_or_default(),
            title: hit.title.unwrap_or_default(),
            points: hit.points.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or_default(),
        }
    }
}

/// Search client. Requests carry no timeout and are never retried.
pub struct AlgoliaClient {
    client: Client,
    base_url: Url,
}

impl AlgoliaClient {
    /// Create a client for the public Algolia endpoint
    pub fn new() -> Result<Self> {
        Self::with_base_url(ALGOLIA_SEARCH_URL)
    }

    /// Create a client for a custom endpoint
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| ScrapeError::Config(format!("invalid API URL {:?}: {}", base_url, e)))?;

        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Full request URL for a query
    pub fn request_url(&self, query: &SearchQuery) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(Some(&query.to_query_string()));
        url
    }

    /// Run one search and decode its hits, in API order.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Hit>> {
        let url = self.request_url(query);
        debug!(url = %url, term = %query.term, "Fetching Algolia search");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::Api {
                code: status.as_u16(),
                message: format!("Algolia API error: {}", status),
            });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Parse an Algolia search response body.
///
/// Only the first JSON value is read; anything after it is ignored. Missing
/// or `null` fields take their defaults, so an object without `hits` yields
/// no hits.
pub fn parse_response(json_str: &str) -> Result<Vec<Hit>> {
    let mut de = serde_json::Deserializer::from_str(json_str);
    let response = SearchResponse::deserialize(&mut de)?;
    Ok(response
        .hits
        .unwrap_or_default()
        .into_iter()
        .map(Hit::from)
        .collect())
}
