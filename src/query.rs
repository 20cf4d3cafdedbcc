//! Search query construction for the Algolia `search_by_date` endpoint.

use crate::error::{Result, ScrapeError};

/// Content types included in every search
pub const TAGS: &str = "(story,show_hn,ask_hn)";

/// Seconds per hour, for the lookback window
const SECS_PER_HOUR: i64 = 3600;

/// Lower bound on creation time: `now` minus the lookback window.
pub fn created_after(now_unix: i64, since_hours: i64) -> Result<i64> {
    since_hours
        .checked_mul(SECS_PER_HOUR)
        .and_then(|secs| now_unix.checked_sub(secs))
        .ok_or_else(|| {
            ScrapeError::Config(format!("lookback window of {} hours is out of range", since_hours))
        })
}

/// A non-positive score means "no score filter".
pub fn score_threshold(score: i64) -> Option<i64> {
    (score > 0).then_some(score)
}

/// One term's search request parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub term: String,
    /// Only posts created strictly after this Unix timestamp
    pub created_after: i64,
    /// Only posts with at most this many points
    pub max_points: Option<i64>,
}

impl SearchQuery {
    pub fn new(term: impl Into<String>, created_after: i64, score: i64) -> Self {
        Self {
            term: term.into(),
            created_after,
            max_points: score_threshold(score),
        }
    }

    /// Value of the `numericFilters` parameter
    pub fn numeric_filters(&self) -> String {
        let mut filters = format!("created_at_i>{}", self.created_after);
        if let Some(points) = self.max_points {
            filters.push_str(&format!(",points<={}", points));
        }
        filters
    }

    /// Encoded query string, without the leading `?`
    pub fn to_query_string(&self) -> String {
        format!(
            "query={}&tags={}&numericFilters={}",
            urlencoding::encode(&self.term),
            TAGS,
            self.numeric_filters()
        )
    }
}
