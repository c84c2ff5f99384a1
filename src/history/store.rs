use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::fs::OpenOptions;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::pagination::paginate;
use super::types::{PaginatedHistory, QueryHistoryEntry};
use crate::error::HistoryError;
use crate::search::types::SearchResult;

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Append-only store of executed queries, backed by a newline-delimited JSON
/// file. Every operation performs its own open/read-or-append/close cycle;
/// there is no in-memory cache and no write buffering across calls.
pub struct QueryHistoryStore {
    file_path: PathBuf,
}

impl QueryHistoryStore {
    pub fn new(file_path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: file_path.into(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Records one executed query with the current timestamp.
    ///
    /// The entry is flushed to disk before this returns. A failed append is
    /// surfaced once, naming the query, and never retried.
    pub async fn add_query(
        &self,
        query: &str,
        results: &[SearchResult],
    ) -> Result<(), HistoryError> {
        self.ensure_parent_dir().await;

        let entry = QueryHistoryEntry {
            query: query.to_string(),
            timestamp: Utc::now(),
            data: results.to_vec(),
        };
        let mut line = serde_json::to_string(&entry).map_err(|source| HistoryError::Encode {
            query: query.to_string(),
            source,
        })?;
        line.push('\n');

        if let Err(source) = self.append_line(&line).await {
            tracing::error!(
                "Error appending query {:?} to history file: {}",
                query,
                source
            );
            return Err(HistoryError::Append {
                query: query.to_string(),
                source,
            });
        }

        tracing::info!(
            "Query {:?} added to history with {} results",
            query,
            results.len()
        );
        Ok(())
    }

    /// Serves one recency-ordered page of the history.
    ///
    /// Never fails: a read error degrades to an empty projection carrying the
    /// clamped request parameters. Every call re-reads and re-sorts the whole
    /// file.
    pub async fn get_history(&self, page: usize, page_size: usize) -> PaginatedHistory {
        let page = page.max(1);
        let page_size = page_size.max(1);

        let mut entries = match self.read_all_entries().await {
            Ok(entries) => entries,
            Err(err) => {
                tracing::error!("Error retrieving paginated history: {}", err);
                return PaginatedHistory::empty(page, page_size);
            }
        };

        entries.sort_unstable_by(|a, b| b.timestamp.cmp(&a.timestamp));

        let total_count = entries.len();
        let (page_entries, total_pages, current_page) = paginate(entries, page, page_size);

        PaginatedHistory {
            entries: page_entries,
            total_count,
            total_pages,
            current_page,
            page_size,
        }
    }

    /// Number of pages the history currently spans for the given page size.
    /// Performs its own full read of the store.
    pub async fn total_pages(&self, page_size: usize) -> usize {
        let page_size = page_size.max(1);
        match self.read_all_entries().await {
            Ok(entries) => entries.len().div_ceil(page_size),
            Err(err) => {
                tracing::error!("Error counting history entries: {}", err);
                0
            }
        }
    }

    async fn append_line(&self, line: &str) -> Result<(), std::io::Error> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.file_path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    async fn read_all_entries(&self) -> Result<Vec<QueryHistoryEntry>, HistoryError> {
        let file = match tokio::fs::File::open(&self.file_path).await {
            Ok(file) => file,
            // A store that has never been written to is empty, not broken.
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(HistoryError::Read(err)),
        };

        let mut entries = Vec::new();
        let mut lines = BufReader::new(file).lines();
        while let Some(line) = lines.next_line().await? {
            if line.is_empty() {
                continue;
            }
            match serde_json::from_str::<QueryHistoryEntry>(&line) {
                Ok(entry) => entries.push(entry),
                Err(err) => {
                    tracing::error!("Error parsing history line: {} - {}", line, err);
                }
            }
        }

        Ok(entries)
    }

    async fn ensure_parent_dir(&self) {
        let Some(dir) = self.file_path.parent() else {
            return;
        };
        if dir.as_os_str().is_empty() {
            return;
        }
        // Creation failures are logged only; the append itself decides
        // whether recording is possible.
        if let Err(err) = tokio::fs::create_dir_all(dir).await {
            tracing::error!("Error creating directory {}: {}", dir.display(), err);
        }
    }
}
