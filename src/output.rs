//! Result table output: console log lines or a CSV file.

use crate::aggregate::{ResultTable, HEADER};
use crate::error::{Result, ScrapeError};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the result table goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// One log line per row
    Console,
    /// CSV file, created or truncated
    Csv(PathBuf),
}

impl OutputTarget {
    /// No path (or an empty one) selects console output.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) if !path.as_os_str().is_empty() => Self::Csv(path),
            _ => Self::Console,
        }
    }
}

/// Write the table, header first.
pub fn write(table: &ResultTable, target: &OutputTarget) -> Result<()> {
    match target {
        OutputTarget::Console => {
            write_console(table);
            Ok(())
        }
        OutputTarget::Csv(path) => write_csv(path, table),
    }
}

/// Render one row as a bracketed, space-separated list
pub fn console_line(fields: &[String]) -> String {
    format!("[{}]", fields.join(" "))
}

pub fn write_console(table: &ResultTable) {
    for record in table.records() {
        info!("{}", console_line(&record));
    }
}

/// Save the table to a CSV file.
///
/// The file is closed on every return path; a failed write can leave it
/// partially written.
pub fn write_csv(path: &Path, table: &ResultTable) -> Result<()> {
    let file = File::create(path).map_err(|source| ScrapeError::Output {
        path: path.to_path_buf(),
        source,
    })?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    wtr.write_record(HEADER)?;
    for row in &table.rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|source| ScrapeError::Output {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = ?path, rows = table.len(), "Saved CSV");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::OutputRow;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tempfile::TempDir;

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0
                .lock()
                .map_err(|_| io::Error::other("log buffer poisoned"))?
                .extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Log lines emitted by `f`, message part only
    fn captured_lines(f: impl FnOnce()) -> Vec<String> {
        let buf = SharedBuf::default();
        let writer = buf.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .with_level(false)
            .finish();

        tracing::subscriber::with_default(subscriber, f);

        let bytes = buf.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes)
            .lines()
            .map(|line| line.trim().to_string())
            .collect()
    }

    fn row(id: &str, title: &str, points: i64, comments: i64) -> OutputRow {
        OutputRow {
            url: format!("https://news.ycombinator.com/item?id={}", id),
            id: id.to_string(),
            title: title.to_string(),
            points,
            comments,
        }
    }

    #[test]
    fn test_target_from_path() {
        assert_eq!(OutputTarget::from_path(None), OutputTarget::Console);
        assert_eq!(
            OutputTarget::from_path(Some(PathBuf::new())),
            OutputTarget::Console
        );
        assert_eq!(
            OutputTarget::from_path(Some(PathBuf::from("out.csv"))),
            OutputTarget::Csv(PathBuf::from("out.csv"))
        );
    }

    #[test]
    fn test_console_line() {
        let header = HEADER.map(str::to_string);
        assert_eq!(console_line(&header), "[URL ID TITLE POINTS COMMENTS]");
        assert_eq!(
            console_line(&row("1", "Show HN: thing", 3, 0).fields()),
            "[https://news.ycombinator.com/item?id=1 1 Show HN: thing 3 0]"
        );
    }

    #[test]
    fn test_console_one_line_per_row() {
        let table = ResultTable {
            rows: vec![row("1", "A", 10, 2), row("2", "B", 5, 0)],
        };

        let lines = captured_lines(|| write_console(&table));
        assert_eq!(
            lines,
            vec![
                "[URL ID TITLE POINTS COMMENTS]",
                "[https://news.ycombinator.com/item?id=1 1 A 10 2]",
                "[https://news.ycombinator.com/item?id=2 2 B 5 0]",
            ]
        );
    }

    #[test]
    fn test_console_empty_table_logs_header() {
        let mut result = None;
        let lines = captured_lines(|| {
            result = Some(write(&ResultTable::default(), &OutputTarget::Console));
        });
        assert!(matches!(result, Some(Ok(()))));
        assert_eq!(lines, vec!["[URL ID TITLE POINTS COMMENTS]"]);
    }

    #[test]
    fn test_csv_round_trip() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("hits.csv");
        let table = ResultTable {
            rows: vec![
                row("1", "Plain title", 10, 2),
                row("2", "Commas, \"quotes\" and\nnewlines", 5, 0),
            ],
        };

        write_csv(&path, &table)?;

        let mut reader = csv::Reader::from_path(&path)?;
        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        assert_eq!(headers, HEADER.to_vec());

        let rows: Vec<OutputRow> = reader.deserialize().collect::<std::result::Result<_, _>>()?;
        assert_eq!(rows, table.rows);
        Ok(())
    }

    #[test]
    fn test_csv_header_only() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("empty.csv");
        write_csv(&path, &ResultTable::default())?;
        assert_eq!(std::fs::read_to_string(&path)?, "URL,ID,TITLE,POINTS,COMMENTS\n");
        Ok(())
    }

    #[test]
    fn test_csv_overwrites_existing() -> std::result::Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new()?;
        let path = dir.path().join("hits.csv");
        std::fs::write(&path, "stale content that is longer than the new table\n".repeat(10))?;

        write_csv(&path, &ResultTable::default())?;
        assert_eq!(std::fs::read_to_string(&path)?, "URL,ID,TITLE,POINTS,COMMENTS\n");
        Ok(())
    }

    #[test]
    fn test_csv_unwritable_path() {
        let err = write_csv(Path::new("/nonexistent/dir/hits.csv"), &ResultTable::default());
        assert!(matches!(err, Err(ScrapeError::Output { .. })));
    }
}
