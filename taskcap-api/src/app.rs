/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskcap_api::{app::AppState, config::Config};
/// use taskcap_shared::store::UserStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let store = UserStore::new();
/// let state = AppState::new(store, config);
/// let app = taskcap_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::config::Config;
use crate::middleware::{
    plan_limit::plan_limit_gate, todo_exists::todo_exists_gate,
    user_account::user_account_gate, USERNAME_HEADER,
};
use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    routing::{delete, get, patch, post, put},
    Router,
};
use std::sync::Arc;
use taskcap_shared::store::UserStore;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The store handle and config are Arc-backed, so cloning is cheap.
#[derive(Clone)]
pub struct AppState {
    /// In-memory user registry, the single root of all service state
    pub store: UserStore,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state
    pub fn new(store: UserStore, config: Config) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                 # Health check (no gates)
/// ├── /users                  # User registry (no gates)
/// │   ├── POST  /
/// │   ├── GET   /:id
/// │   └── PATCH /:id/pro
/// └── /todos                  # Todo operations (gated)
///     ├── GET    /            # user-exists
///     ├── POST   /            # user-exists → plan-limit
///     ├── PUT    /:id         # todo-exists
///     ├── PATCH  /:id/done    # todo-exists
///     └── DELETE /:id         # user-exists → todo-exists
/// ```
///
/// # Gate composition
///
/// Gates are attached with `route_layer`, so they run only after the route
/// has matched. Within a route group the layer added last is outermost and
/// runs first, which is how the user-exists gate precedes the plan-limit
/// gate on creation and the todo-exists gate on deletion.
pub fn build_router(state: AppState) -> Router {
    // Import route handlers
    use crate::routes;

    // Health check (no gates)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    // User registry (no gates; id resolution happens in the handlers)
    let user_routes = Router::new()
        .route("/users", post(routes::users::create_user))
        .route("/users/:id", get(routes::users::get_user))
        .route("/users/:id/pro", patch(routes::users::upgrade_to_pro));

    // Todo listing (user-exists)
    let todo_list_routes = Router::new()
        .route("/todos", get(routes::todos::list_todos))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            user_account_gate,
        ));

    // Todo creation (user-exists, then plan-limit)
    let todo_create_routes = Router::new()
        .route("/todos", post(routes::todos::create_todo))
        .route_layer(axum::middleware::from_fn(plan_limit_gate))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            user_account_gate,
        ));

    // Todo update and mark-done (todo-exists)
    let todo_item_routes = Router::new()
        .route("/todos/:id", put(routes::todos::update_todo))
        .route("/todos/:id/done", patch(routes::todos::mark_done))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            todo_exists_gate,
        ));

    // Todo deletion (user-exists, then todo-exists)
    let todo_delete_routes = Router::new()
        .route("/todos/:id", delete(routes::todos::delete_todo))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            todo_exists_gate,
        ))
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            user_account_gate,
        ));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        // Development mode: permissive CORS
        CorsLayer::permissive()
    } else {
        // Production mode: configure allowed origins
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([
                header::CONTENT_TYPE,
                HeaderName::from_static(USERNAME_HEADER),
            ])
            .max_age(std::time::Duration::from_secs(3600))
    };

    // Combine all routes with middleware stack
    Router::new()
        .merge(health_routes)
        .merge(user_routes)
        .merge(todo_list_routes)
        .merge(todo_create_routes)
        .merge(todo_item_routes)
        .merge(todo_delete_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
