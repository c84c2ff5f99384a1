//! Search Proxy Module
//!
//! Bridges the HTTP API layer with the external search provider.
//!
//! ## Overview
//! Queries are forwarded to the DuckDuckGo Instant Answer API and the
//! provider's related topics are mapped to flat `{title, url}` results.
//! Every successful search is recorded in the query-history log before the
//! response is returned; a history write failure is logged but never fails
//! the search itself.
//!
//! ## Submodules
//! - **`client`**: HTTP client for the external provider plus response mapping.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: DTOs for API communication and provider decoding.

pub mod client;
pub mod handlers;
pub mod types;
