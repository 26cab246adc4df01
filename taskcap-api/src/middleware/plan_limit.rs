/// Plan-limit gate
///
/// Enforces the free-tier todo cap. Runs only on todo creation, layered
/// inside the user-exists gate, and reads the already-resolved `CurrentUser`
/// from the request instead of resolving the caller again.
///
/// Pro users pass unconditionally, regardless of how many todos they hold.
///
/// # Errors
///
/// - `400 Bad Request` with
///   `{"error": "This user has exceeded the free plan limit."}`

use crate::error::ApiError;
use crate::middleware::CurrentUser;
use axum::{extract::Request, middleware::Next, response::Response};
use taskcap_shared::quota;

/// Plan-limit gate middleware
pub async fn plan_limit_gate(req: Request, next: Next) -> Result<Response, ApiError> {
    let CurrentUser(user) = req.extensions().get::<CurrentUser>().ok_or_else(|| {
        // Router wiring bug: this gate must sit inside the user-exists gate
        ApiError::InternalError("plan-limit gate ran without a resolved user".to_string())
    })?;

    quota::enforce(user).map_err(|err| {
        tracing::warn!(
            user_id = %user.id,
            todos = user.todos.len(),
            "free plan todo cap reached"
        );
        ApiError::from(err)
    })?;

    Ok(next.run(req).await)
}
