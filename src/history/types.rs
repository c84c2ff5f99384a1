//! History Data Types
//!
//! The persisted log record and the read-time pagination projection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::search::types::SearchResult;

/// One persisted record of an executed search.
///
/// Serialized as a single JSON line in the history log. The field layout is
/// the log's wire format; pre-existing log files must keep parsing, so the
/// shape is fixed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryHistoryEntry {
    /// The original search string.
    pub query: String,
    /// Assigned at write time. Monotone in write order only to the extent the
    /// wall clock is.
    pub timestamp: DateTime<Utc>,
    /// The results the external search returned, possibly empty.
    pub data: Vec<SearchResult>,
}

/// Read-time projection of the history log, sliced and ordered for display.
/// Never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedHistory {
    pub entries: Vec<QueryHistoryEntry>,
    pub total_count: usize,
    pub total_pages: usize,
    /// The page actually served, after clamping.
    pub current_page: usize,
    pub page_size: usize,
}

impl PaginatedHistory {
    /// The projection returned when the log cannot be read.
    pub fn empty(current_page: usize, page_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            total_count: 0,
            total_pages: 0,
            current_page,
            page_size,
        }
    }
}
