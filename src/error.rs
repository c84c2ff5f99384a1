//! Error Types
//!
//! Failures of the query-history store and the error responses of the HTTP
//! API. Store write failures are surfaced once and never retried; read
//! failures are recovered inside the store and only logged.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Failures of the query-history store.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The entry could not be serialized to its log line.
    #[error("Failed to encode history entry for query: {query}")]
    Encode {
        query: String,
        #[source]
        source: serde_json::Error,
    },

    /// The append to the backing file failed.
    #[error("Failed to add query to history: {query}")]
    Append {
        query: String,
        #[source]
        source: std::io::Error,
    },

    /// The backing file could not be read.
    #[error("Failed to read history file")]
    Read(#[from] std::io::Error),
}

/// Error surface of the HTTP API, rendered as a JSON body
/// `{"statusCode": <n>, "message": "<text>"}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(json!({
            "statusCode": status.as_u16(),
            "message": self.to_string(),
        }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_append_error_names_query() {
        let err = HistoryError::Append {
            query: "rust language".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("rust language"));
        assert!(err.to_string().contains("Failed to add query to history"));
    }

    #[test]
    fn test_history_read_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HistoryError = io_err.into();
        assert!(err.to_string().contains("Failed to read history file"));
    }

    #[test]
    fn test_api_error_bad_request_status() {
        let err = ApiError::bad_request("Bad request: Malformed params");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Bad request: Malformed params");
    }

    #[test]
    fn test_api_error_internal_status() {
        let err = ApiError::internal("Problem getting data from external service");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_into_response_status() {
        let response = ApiError::bad_request("Bad request: Malformed body").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
