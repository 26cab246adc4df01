/// User registry endpoints
///
/// This module provides the user lifecycle endpoints:
/// - Creation
/// - Lookup by id
/// - Upgrade to the pro plan
///
/// # Endpoints
///
/// - `POST /users` - Create a user
/// - `GET /users/:id` - Get a user by id
/// - `PATCH /users/:id/pro` - Upgrade a user to pro
///
/// None of these run behind gates; `GET` and `PATCH` resolve the id
/// themselves.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use taskcap_shared::models::user::{CreateUser, User};
use uuid::Uuid;

/// Create user request
///
/// Both fields are required plain strings; no format validation is applied.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Display name
    pub name: String,

    /// Requested username
    pub username: String,
}

/// Create a new user
///
/// # Endpoint
///
/// ```text
/// POST /users
/// Content-Type: application/json
///
/// {
///   "name": "John Doe",
///   "username": "johndoe"
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: username already exists
pub async fn create_user(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> ApiResult<(StatusCode, Json<User>)> {
    let user = state
        .store
        .create_user(CreateUser {
            name: req.name,
            username: req.username,
        })
        .await?;

    tracing::info!(user_id = %user.id, username = %user.username, "user created");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by id
///
/// A malformed UUID in the path is treated the same as an unknown id: there
/// is no user it could name, so the answer is 404 either way.
///
/// # Errors
///
/// - `404 Not Found`: no user with this id
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::NotFound(format!("User: '{}' not found.", id)))?;

    let user = state
        .store
        .user_by_id(user_id)
        .await
        .ok_or_else(|| ApiError::NotFound(format!("User: '{}' not found.", user_id)))?;

    Ok(Json(user))
}

/// Upgrade a user to the pro plan
///
/// The upgrade is one-way; repeating it fails.
///
/// # Errors
///
/// - `400 Bad Request`: pro plan already activated
/// - `404 Not Found`: no user with this id
pub async fn upgrade_to_pro(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<User>> {
    let user_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::NotFound(format!("User: '{}' not found.", id)))?;

    let user = state.store.upgrade_to_pro(user_id).await?;

    tracing::info!(user_id = %user.id, username = %user.username, "user upgraded to pro");

    Ok(Json(user))
}
