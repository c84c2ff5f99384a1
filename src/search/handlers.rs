use std::sync::Arc;
use std::time::Instant;

use axum::extract::Query;
use axum::{Extension, Json};
use serde::Deserialize;

use super::client::SearchClient;
use super::types::SearchResult;
use crate::error::ApiError;
use crate::history::store::QueryHistoryStore;
use crate::history::types::PaginatedHistory;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchBody {
    pub query: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HistoryParams {
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

pub async fn handle_get_search(
    Query(params): Query<SearchParams>,
    Extension(client): Extension<Arc<SearchClient>>,
    Extension(history): Extension<Arc<QueryHistoryStore>>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let started = Instant::now();

    let result = async {
        let query = require_query(params.q, "Bad request: Malformed params")?;
        run_search(&query, &client, &history).await
    }
    .await;

    log_outcome("search.get", started, result.is_ok());
    result.map(Json)
}

pub async fn handle_post_search(
    Extension(client): Extension<Arc<SearchClient>>,
    Extension(history): Extension<Arc<QueryHistoryStore>>,
    Json(body): Json<SearchBody>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let started = Instant::now();

    let result = async {
        let query = require_query(body.query, "Bad request: Malformed body")?;
        run_search(&query, &client, &history).await
    }
    .await;

    log_outcome("search.post", started, result.is_ok());
    result.map(Json)
}

pub async fn handle_get_history(
    Query(params): Query<HistoryParams>,
    Extension(history): Extension<Arc<QueryHistoryStore>>,
) -> Result<Json<PaginatedHistory>, ApiError> {
    let started = Instant::now();

    let (page, page_size) = match parse_history_params(&params) {
        Ok(parsed) => parsed,
        Err(err) => {
            log_outcome("search.history", started, false);
            return Err(err);
        }
    };

    let page = history.get_history(page, page_size).await;
    log_outcome("search.history", started, true);
    Ok(Json(page))
}

async fn run_search(
    query: &str,
    client: &SearchClient,
    history: &QueryHistoryStore,
) -> Result<Vec<SearchResult>, ApiError> {
    let results = client.search(query).await?;

    // History failure never fails the search itself.
    if let Err(err) = history.add_query(query, &results).await {
        tracing::error!("Failed to record query in history: {}", err);
    }

    Ok(results)
}

pub(crate) fn require_query(raw: Option<String>, message: &str) -> Result<String, ApiError> {
    match raw {
        Some(query) if !query.is_empty() => Ok(query),
        _ => Err(ApiError::bad_request(message)),
    }
}

pub(crate) fn parse_history_params(params: &HistoryParams) -> Result<(usize, usize), ApiError> {
    let page = parse_positive("page", params.page.as_deref())?;
    let page_size = parse_positive("pageSize", params.page_size.as_deref())?;
    Ok((page, page_size))
}

fn parse_positive(name: &str, raw: Option<&str>) -> Result<usize, ApiError> {
    let raw = raw.ok_or_else(|| {
        ApiError::bad_request(format!("Bad request: Malformed params: [{name}] is required"))
    })?;
    let value: usize = raw.parse().map_err(|_| {
        ApiError::bad_request(format!(
            "Bad request: Malformed params: [{name}] must be a valid number"
        ))
    })?;
    if value < 1 {
        return Err(ApiError::bad_request(format!(
            "Bad request: Malformed params: [{name}] must be greater than or equal to 1"
        )));
    }
    Ok(value)
}

fn log_outcome(handler: &str, started: Instant, ok: bool) {
    let elapsed_ms = started.elapsed().as_millis();
    if ok {
        tracing::info!("{}: OK took: {}ms", handler, elapsed_ms);
    } else {
        tracing::error!("{}: FAILED took: {}ms", handler, elapsed_ms);
    }
}
