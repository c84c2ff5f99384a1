//! Search Data Types
//!
//! DTOs for the search API surface and for decoding the external provider's
//! response format.

use serde::{Deserialize, Serialize};

/// One search hit, returned to the client and recorded in the query history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

/// Subset of the DuckDuckGo Instant Answer payload the proxy consumes.
///
/// Only `RelatedTopics` is read; every other provider field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct ProviderResponse {
    #[serde(rename = "RelatedTopics", default)]
    pub related_topics: Vec<RelatedTopic>,
}

/// A single related topic. Category/group entries carry neither `Text` nor
/// `FirstURL` and are dropped during mapping.
#[derive(Debug, Default, Deserialize)]
pub struct RelatedTopic {
    #[serde(rename = "Text", default)]
    pub text: Option<String>,
    #[serde(rename = "FirstURL", default)]
    pub first_url: Option<String>,
}
