/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Test context with a fresh in-memory store per test
/// - Seed helpers that write through the store directly
/// - Request builders and response decoding

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use chrono::{TimeZone, Utc};
use taskcap_api::app::{build_router, AppState};
use taskcap_api::config::Config;
use taskcap_shared::models::todo::CreateTodo;
use taskcap_shared::models::user::{CreateUser, User};
use taskcap_shared::store::UserStore;

/// Test context containing the router and a handle to its store
///
/// Every test builds its own context, so tests never share state.
pub struct TestContext {
    pub app: axum::Router,
    pub store: UserStore,
}

impl TestContext {
    /// Creates a new test context with a fresh store
    pub fn new() -> Self {
        let store = UserStore::new();
        let state = AppState::new(store.clone(), Config::default());
        let app = build_router(state);

        TestContext { app, store }
    }

    /// Seeds a user directly through the store
    pub async fn seed_user(&self, username: &str) -> User {
        self.store
            .create_user(CreateUser {
                name: format!("Test {}", username),
                username: username.to_string(),
            })
            .await
            .expect("seed user")
    }

    /// Seeds a pro user directly through the store
    pub async fn seed_pro_user(&self, username: &str) -> User {
        let user = self.seed_user(username).await;
        self.store.upgrade_to_pro(user.id).await.expect("upgrade")
    }

    /// Seeds `count` todos for a user directly through the store
    pub async fn seed_todos(&self, user: &User, count: usize) {
        for i in 0..count {
            self.store
                .create_todo(
                    user.id,
                    CreateTodo {
                        title: format!("todo {}", i),
                        deadline: Utc.with_ymd_and_hms(2026, 12, 31, 0, 0, 0).unwrap(),
                    },
                )
                .await
                .expect("seed todo");
        }
    }
}

/// Builds a JSON request, optionally carrying the username identity header
pub fn json_request(
    method: &str,
    uri: &str,
    username: Option<&str>,
    body: serde_json::Value,
) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json");

    if let Some(username) = username {
        builder = builder.header("username", username);
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Builds a bodyless request, optionally carrying the username identity header
pub fn empty_request(method: &str, uri: &str, username: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(username) = username {
        builder = builder.header("username", username);
    }

    builder.body(Body::empty()).unwrap()
}

/// Decodes a response body as JSON
pub async fn response_json(response: Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
