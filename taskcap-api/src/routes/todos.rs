/// Todo endpoints
///
/// All of these run behind gates (see `middleware`): the caller is resolved
/// from the `username` header before the handler executes, and the item
/// routes additionally resolve the addressed todo. Handlers therefore read
/// their subjects from request extensions and go back through the store by
/// id for mutation.
///
/// # Endpoints
///
/// - `GET /todos` - List the caller's todos
/// - `POST /todos` - Create a todo (free plan: capped at 10)
/// - `PUT /todos/:id` - Overwrite a todo's title and deadline
/// - `PATCH /todos/:id/done` - Mark a todo done
/// - `DELETE /todos/:id` - Delete a todo

use crate::{
    app::AppState,
    error::ApiResult,
    middleware::{CurrentTodo, CurrentUser},
};
use axum::{extract::State, http::StatusCode, Extension, Json};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use taskcap_shared::models::todo::{CreateTodo, Todo, UpdateTodo};

/// Create todo request
#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    /// Title
    pub title: String,

    /// Deadline (RFC 3339)
    pub deadline: DateTime<Utc>,
}

/// Update todo request
///
/// Both fields are overwritten; there is no partial update.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    /// New title
    pub title: String,

    /// New deadline (RFC 3339)
    pub deadline: DateTime<Utc>,
}

/// List the caller's todos in creation order
///
/// # Errors
///
/// - `404 Not Found`: unknown username (raised by the gate)
pub async fn list_todos(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> ApiResult<Json<Vec<Todo>>> {
    let todos = state.store.todos_for_user(user.id).await?;

    Ok(Json(todos))
}

/// Create a new todo for the caller
///
/// Runs behind the user-exists and plan-limit gates; by the time this
/// handler executes the caller is known and within quota.
///
/// # Endpoint
///
/// ```text
/// POST /todos
/// username: johndoe
/// Content-Type: application/json
///
/// {
///   "title": "Write report",
///   "deadline": "2026-09-01T12:00:00Z"
/// }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: unknown username (gate)
/// - `400 Bad Request`: free plan todo cap reached (gate)
pub async fn create_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateTodoRequest>,
) -> ApiResult<(StatusCode, Json<Todo>)> {
    let todo = state
        .store
        .create_todo(
            user.id,
            CreateTodo {
                title: req.title,
                deadline: req.deadline,
            },
        )
        .await?;

    tracing::info!(user_id = %user.id, todo_id = %todo.id, "todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// Overwrite a todo's title and deadline
///
/// `id`, `done` and `created_at` are untouched.
///
/// # Errors
///
/// - `400 Bad Request`: malformed todo id (gate)
/// - `404 Not Found`: unknown username or todo (gate)
pub async fn update_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(CurrentTodo(todo)): Extension<CurrentTodo>,
    Json(req): Json<UpdateTodoRequest>,
) -> ApiResult<Json<Todo>> {
    let updated = state
        .store
        .update_todo(
            user.id,
            todo.id,
            UpdateTodo {
                title: req.title,
                deadline: req.deadline,
            },
        )
        .await?;

    Ok(Json(updated))
}

/// Mark a todo as done
///
/// Unconditional: already-done todos stay done, and the call still succeeds.
///
/// # Errors
///
/// - `400 Bad Request`: malformed todo id (gate)
/// - `404 Not Found`: unknown username or todo (gate)
pub async fn mark_done(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(CurrentTodo(todo)): Extension<CurrentTodo>,
) -> ApiResult<Json<Todo>> {
    let updated = state.store.mark_done(user.id, todo.id).await?;

    Ok(Json(updated))
}

/// Delete a todo
///
/// The gate already resolved the todo, but the store re-checks its presence
/// on removal and answers 404 if it disappeared in between.
///
/// # Errors
///
/// - `400 Bad Request`: malformed todo id (gate)
/// - `404 Not Found`: unknown username or todo
pub async fn delete_todo(
    State(state): State<AppState>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Extension(CurrentTodo(todo)): Extension<CurrentTodo>,
) -> ApiResult<StatusCode> {
    state.store.delete_todo(user.id, todo.id).await?;

    tracing::info!(user_id = %user.id, todo_id = %todo.id, "todo deleted");

    Ok(StatusCode::NO_CONTENT)
}
