//! Search term resolution.
//!
//! Terms come from exactly one of two sources: an inline comma-separated
//! string or a JSON file holding an array of strings.

use crate::error::{Result, ScrapeError};
use std::path::Path;
use tracing::debug;

/// Resolve the search terms for a run.
///
/// An empty inline string or an empty path counts as "not provided". Terms
/// are returned in source order, verbatim; duplicates are kept.
pub fn resolve(words: Option<&str>, file: Option<&Path>) -> Result<Vec<String>> {
    let words = words.filter(|w| !w.is_empty());
    let file = file.filter(|f| !f.as_os_str().is_empty());

    let terms = match (words, file) {
        (Some(_), Some(_)) => {
            return Err(ScrapeError::Config(
                "only provide one scrape word source (string or file)".to_string(),
            ))
        }
        (None, None) => {
            return Err(ScrapeError::Config(
                "one scrape word source must be provided (string or file)".to_string(),
            ))
        }
        (Some(words), None) => split_words(words),
        (None, Some(path)) => load_word_file(path)?,
    };

    if terms.is_empty() {
        return Err(ScrapeError::Config(
            "at least one scrape word must be provided".to_string(),
        ));
    }

    debug!(count = terms.len(), "Resolved search terms");
    Ok(terms)
}

fn split_words(words: &str) -> Vec<String> {
    words.split(',').map(str::to_string).collect()
}

/// Read a JSON array of strings from disk.
///
/// A top-level `null` reads as no words; a `null` entry reads as `""`.
pub fn load_word_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path).map_err(|source| ScrapeError::Input {
        path: path.to_path_buf(),
        source,
    })?;

    let words: Option<Vec<Option<String>>> =
        serde_json::from_str(&content).map_err(|source| ScrapeError::InputFormat {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(words
        .unwrap_or_default()
        .into_iter()
        .map(Option::unwrap_or_default)
        .collect())
}
