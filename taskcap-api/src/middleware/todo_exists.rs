/// Access gate: "todo exists"
///
/// Runs before todo update, mark-done and deletion. Checks, in order:
///
/// 1. The `:id` path parameter is a well-formed UUID — rejected before any
///    lookup happens
/// 2. The `username` header resolves to a user
/// 3. That user's list contains a todo with the given id
///
/// On success both the user and the todo are attached to the request.
///
/// # Errors
///
/// - `400 Bad Request` with `{"error": "Id: '<id>' invalid."}`
/// - `404 Not Found` with `{"error": "Username: '<username>' not found."}`
/// - `404 Not Found` with `{"error": "Todo: '<id>' not found."}`

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{request_username, CurrentTodo, CurrentUser};
use axum::{
    extract::{Path, Request, State},
    middleware::Next,
    response::Response,
};
use taskcap_shared::store::StoreError;
use uuid::Uuid;

/// Todo-exists gate middleware
pub async fn todo_exists_gate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    // Format check comes first: a malformed id must fail before the user
    // lookup runs.
    let todo_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::Validation(format!("Id: '{}' invalid.", id)))?;

    let username = request_username(&req);

    let user = state
        .store
        .user_by_username(&username)
        .await
        .ok_or_else(|| StoreError::UnknownUsername(username.clone()))?;

    let todo = user
        .todos
        .iter()
        .find(|todo| todo.id == todo_id)
        .cloned()
        .ok_or_else(|| {
            tracing::debug!(user_id = %user.id, %todo_id, "todo not found");
            StoreError::TodoNotFound(todo_id)
        })?;

    req.extensions_mut().insert(CurrentUser(user));
    req.extensions_mut().insert(CurrentTodo(todo));

    Ok(next.run(req).await)
}
