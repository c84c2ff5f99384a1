//! Query-History Module
//!
//! Durable record of past search queries and their results, backed by an
//! append-only newline-delimited JSON file with read-time pagination.
//!
//! ## Core Mechanics
//! - **Append-only log**: every executed query becomes one self-contained
//!   JSON line; existing lines are never rewritten or deleted.
//! - **Read-time projection**: `get_history` re-reads the whole file, sorts
//!   entries by timestamp descending and slices out the requested page. There
//!   is no index; the full scan per read is the store's performance ceiling
//!   and caps it at small histories.
//! - **Degraded reads**: malformed lines are skipped and logged; a failed
//!   read yields an empty projection instead of an error.
//!
//! A single service instance is assumed. Concurrent appends rely on
//! append-mode single-line writes; there is no cross-process locking.
//!
//! ## Submodules
//! - **`store`**: The file-backed `QueryHistoryStore`.
//! - **`pagination`**: Pure page computation over an ordered collection.
//! - **`types`**: The persisted entry and the paginated projection DTOs.

pub mod pagination;
pub mod store;
pub mod types;
