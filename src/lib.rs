//! Search API Proxy Library
//!
//! This library crate defines the core modules of the search proxy service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! The service is composed of four loosely coupled subsystems:
//!
//! - **`config`**: Environment-driven runtime configuration (listen port,
//!   deployment mode, provider URL, history file location).
//! - **`error`**: The error surface. Typed failures of the history store and
//!   the JSON error responses of the HTTP API.
//! - **`history`**: The query-history store. An append-only, line-delimited
//!   log of executed queries with read-time, recency-ordered pagination.
//! - **`search`**: The proxy core. Forwards queries to the external search
//!   provider and maps its response format to flat results.

pub mod config;
pub mod error;
pub mod history;
pub mod search;
