//! Task API handlers

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::storage::Task;

// ============================================================================
// Request DTOs
// ============================================================================

/// Create task request. Fields are optional so validation happens here, not
/// inside the deserializer — a missing `task` is a 400, not a rejection page.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub task: Option<String>,
}

/// Update task request
#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    pub completed: Option<bool>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /tasks
/// List all tasks in creation order
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.store.list()?;
    Ok(Json(tasks))
}

/// POST /tasks
/// Create a new task with `completed = false`
pub async fn create_task(
    State(state): State<AppState>,
    body: Result<Json<CreateTaskRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let Json(req) = body.map_err(|_| ApiError::InvalidInput)?;

    let description = match req.task.as_deref() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(ApiError::InvalidInput),
    };

    let task = state.store.create(description)?;
    tracing::info!(id = task.id, "task created");
    Ok((StatusCode::CREATED, Json(task)))
}

/// PUT /tasks/{id}
/// Set the completion flag of a task. Both transitions are legal and
/// idempotent; the task text is never changed here.
pub async fn update_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
    body: Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> ApiResult<Json<Task>> {
    // Existence first: an unknown id is 404 even with a bad body
    state.store.get(task_id)?.ok_or(ApiError::NotFound)?;

    let Json(req) = body.map_err(|_| ApiError::InvalidInput)?;
    let completed = req.completed.ok_or(ApiError::InvalidInput)?;

    let task = state
        .store
        .set_completed(task_id, completed)?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(task))
}

/// DELETE /tasks/{id}
/// Remove a task permanently
pub async fn delete_task(
    State(state): State<AppState>,
    Path(task_id): Path<i64>,
) -> ApiResult<StatusCode> {
    if !state.store.delete(task_id)? {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id = task_id, "task deleted");
    Ok(StatusCode::NO_CONTENT)
}
