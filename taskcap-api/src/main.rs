//! # TaskCap API Server
//!
//! Single-process HTTP service managing users and their todos, with a
//! free/pro plan distinction capping free users at 10 todos.
//!
//! All state lives in an in-memory registry constructed here and injected
//! into the router; nothing survives a restart.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskcap-api
//! ```

use taskcap_api::app::{build_router, AppState};
use taskcap_api::config::Config;
use taskcap_shared::store::UserStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "taskcap_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskCap API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    // The store lives for the whole process; every handler works against
    // this one instance through the application state.
    let store = UserStore::new();
    let state = AppState::new(store, config.clone());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    tracing::info!("Server listening on http://{}", config.bind_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown signal received, exiting...");

    Ok(())
}

/// Resolves when ctrl-c is received
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install ctrl-c handler");
}
