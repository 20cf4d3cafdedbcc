//! Cross-term deduplication.
//!
//! Hits from every term are merged into one table. An identifier seen for an
//! earlier term (or earlier in the same term) is dropped, so each story keeps
//! the position of its first occurrence.

use crate::algolia::Hit;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Fixed header row of every result table
pub const HEADER: [&str; 5] = ["URL", "ID", "TITLE", "POINTS", "COMMENTS"];

/// Base of the synthesized story URL
pub const ITEM_URL_BASE: &str = "https://news.ycombinator.com/item?id=";

/// One output row, in `HEADER` order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct OutputRow {
    pub url: String,
    pub id: String,
    pub title: String,
    pub points: i64,
    pub comments: i64,
}

impl OutputRow {
    /// Row fields as strings, in `HEADER` order
    pub fn fields(&self) -> [String; 5] {
        [
            self.url.clone(),
            self.id.clone(),
            self.title.clone(),
            self.points.to_string(),
            self.comments.to_string(),
        ]
    }
}

impl From<&Hit> for OutputRow {
    fn from(hit: &Hit) -> Self {
        Self {
            url: format!("{}{}", ITEM_URL_BASE, hit.object_id),
            id: hit.object_id.clone(),
            title: hit.title.clone(),
            points: hit.points,
            comments: hit.num_comments,
        }
    }
}

/// Deduplicated rows; the header is implied
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    pub rows: Vec<OutputRow>,
}

impl ResultTable {
    /// Header followed by every row, all as string fields
    pub fn records(&self) -> impl Iterator<Item = [String; 5]> + '_ {
        std::iter::once(HEADER.map(str::to_string)).chain(self.rows.iter().map(OutputRow::fields))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Accumulates rows across terms, tracking identifiers already emitted.
#[derive(Debug, Default)]
pub struct Aggregator {
    seen: HashSet<String>,
    table: ResultTable,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append every hit whose identifier is new. Returns the number of rows added.
    pub fn merge(&mut self, hits: &[Hit]) -> usize {
        let before = self.table.rows.len();
        for hit in hits {
            if self.seen.insert(hit.object_id.clone()) {
                self.table.rows.push(OutputRow::from(hit));
            }
        }
        self.table.rows.len() - before
    }

    pub fn into_table(self) -> ResultTable {
        self.table
    }
}
