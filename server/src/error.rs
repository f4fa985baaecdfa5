//! HTTP error responses.
//!
//! Every error renders as `{"error": <message>}` with the matching status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use todo_core::TodoError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be parsed. Carries the parser's message.
    #[error("{0}")]
    BadRequest(String),

    #[error("Todo Not Found")]
    NotFound,

    /// Response serialization failed.
    #[error("Internal Server Error")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Internal(detail) => tracing::error!(%detail, "request failed"),
            other => tracing::debug!(error = %other, "request rejected"),
        }
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<TodoError> for ApiError {
    fn from(e: TodoError) -> Self {
        match e {
            TodoError::NotFound { .. } => ApiError::NotFound,
        }
    }
}
