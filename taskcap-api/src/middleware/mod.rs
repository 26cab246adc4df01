/// Request gates
///
/// Gates are pre-handler validation steps composed per route group in
/// `app::build_router`. Each gate either short-circuits the request with an
/// `ApiError` response or attaches resolved context to the request
/// extensions and passes control on:
///
/// - `user_account`: resolves the `username` header → `CurrentUser`
/// - `todo_exists`: id format check + user + todo resolution → `CurrentUser`
///   and `CurrentTodo`
/// - `plan_limit`: free-plan todo cap, reads the upstream `CurrentUser`

use axum::extract::Request;
use taskcap_shared::models::todo::Todo;
use taskcap_shared::models::user::User;

pub mod plan_limit;
pub mod todo_exists;
pub mod user_account;

/// Header carrying the caller's identity
///
/// Plaintext by design: the service has no credential mechanism beyond the
/// username itself.
pub const USERNAME_HEADER: &str = "username";

/// Resolved user, attached to the request by the access gates
///
/// A snapshot clone: handlers go back through the store by id for any
/// mutation, so a record deleted mid-request surfaces as not-found rather
/// than acting on stale data.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Resolved todo, attached to the request by the todo-exists gate
#[derive(Debug, Clone)]
pub struct CurrentTodo(pub Todo);

/// Reads the username header, treating a missing or non-UTF-8 value as empty
///
/// An empty username never matches a user, so the gates answer the same 404
/// for "header absent" and "unknown username".
pub(crate) fn request_username(req: &Request) -> String {
    req.headers()
        .get(USERNAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string()
}
