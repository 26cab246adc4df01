/// Access gate: "user exists"
///
/// Runs before todo listing, creation and deletion. Resolves the caller from
/// the `username` header and attaches the user to the request for downstream
/// gates and handlers.
///
/// # Errors
///
/// - `404 Not Found` with `{"error": "Username: '<username>' not found."}`
///   if no user matches the header

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::{request_username, CurrentUser};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use taskcap_shared::store::StoreError;

/// User-exists gate middleware
pub async fn user_account_gate(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = request_username(&req);

    let user = state
        .store
        .user_by_username(&username)
        .await
        .ok_or_else(|| {
            tracing::debug!(%username, "username not found");
            StoreError::UnknownUsername(username.clone())
        })?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
