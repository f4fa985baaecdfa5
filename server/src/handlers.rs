//! Route handlers.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use todo_core::{Todo, TodoError, TodoPayload};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::AppState;

/// JSON response rendered with indentation.
pub struct PrettyJson<T>(pub T);

impl<T: Serialize> IntoResponse for PrettyJson<T> {
    fn into_response(self) -> Response {
        match serde_json::to_string_pretty(&self.0) {
            Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(e) => ApiError::Internal(e.to_string()).into_response(),
        }
    }
}

fn log_not_found(e: &TodoError) {
    tracing::info!(error = %e, "todo not found");
}

pub async fn ping() -> Json<Value> {
    Json(json!({ "message": "pong" }))
}

pub async fn list_todos(State(state): State<AppState>) -> PrettyJson<Vec<Todo>> {
    PrettyJson(state.todos.list().await)
}

pub async fn get_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.todos.get(&id).await.inspect_err(log_not_found)?;
    Ok(Json(todo))
}

pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TodoPayload>,
) -> (StatusCode, Json<Todo>) {
    let todo = state.todos.create(payload).await;
    tracing::info!(id = %todo.id, "created todo");
    (StatusCode::CREATED, Json(todo))
}

pub async fn update_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(payload): JsonBody<TodoPayload>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state
        .todos
        .update(&id, payload)
        .await
        .inspect_err(log_not_found)?;
    tracing::info!(id = %todo.id, "updated todo");
    Ok(Json(todo))
}

pub async fn delete_todo(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    state.todos.delete(&id).await.inspect_err(log_not_found)?;
    tracing::info!(%id, "deleted todo");
    Ok(Json(json!({ "message": "Successfully Deleted Todo" })))
}
