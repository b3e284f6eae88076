//! Common test utilities for integration tests
//!
//! - In-memory store seeded with a track, exercise and owner
//! - Requester token generation
//! - Request helpers that run the router via `oneshot`

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use exercism_api::app::{build_router, AppState};
use exercism_api::config::{ApiConfig, Config, DatabaseConfig, JwtConfig, SiteConfig};
use exercism_shared::auth::token::{create_token, Claims};
use exercism_shared::models::{
    exercise::Exercise,
    solution::{CreateSolution, Solution},
    track::Track,
    user::User,
    user_track::CreateUserTrack,
};
use exercism_shared::store::memory::MemoryStore;
use exercism_shared::store::Store;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub const JWT_SECRET: &str = "test-secret-key-at-least-32-bytes-long";
pub const BASE_URL: &str = "https://test.exercism.io";

/// Builds a configuration without reading the environment
pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            production: false,
            cors_origins: vec!["*".to_string()],
        },
        database: DatabaseConfig {
            url: "postgresql://unused".to_string(),
            max_connections: 1,
        },
        jwt: JwtConfig {
            secret: JWT_SECRET.to_string(),
        },
        site: SiteConfig {
            base_url: BASE_URL.to_string(),
        },
    }
}

/// Test context backed by [`MemoryStore`]
pub struct TestContext {
    pub store: Arc<MemoryStore>,
    pub app: axum::Router,
    pub track: Track,
    pub exercise: Exercise,
    pub owner: User,
}

impl TestContext {
    /// Seeds a `ruby` track with a `two-fer` exercise and an owner `alice`
    /// who has joined the track without an alias
    pub async fn new() -> Self {
        let store = Arc::new(MemoryStore::new());

        let track = store.add_track("ruby", "Ruby").await;
        let exercise = store.add_exercise(track.id, "two-fer").await;
        let owner = store.add_user("alice").await;
        store
            .add_user_track(CreateUserTrack {
                user_id: owner.id,
                track_id: track.id,
                anonymous: false,
                handle: None,
            })
            .await;

        Self::with_store(store, track, exercise, owner)
    }

    pub fn with_store(store: Arc<MemoryStore>, track: Track, exercise: Exercise, owner: User) -> Self {
        let dyn_store: Arc<dyn Store> = store.clone();
        let app = build_router(AppState::new(dyn_store, test_config()));

        Self {
            store,
            app,
            track,
            exercise,
            owner,
        }
    }

    /// Adds a solution by the owner
    pub async fn solution(&self, published_at: Option<chrono::DateTime<chrono::Utc>>) -> Solution {
        self.store
            .add_solution(CreateSolution {
                user_id: self.owner.id,
                exercise_id: self.exercise.id,
                published_at,
            })
            .await
    }

    /// Returns `Authorization` header value for `user_id`
    pub fn auth_header(&self, user_id: Uuid) -> String {
        let token = create_token(&Claims::new(user_id), JWT_SECRET).unwrap();
        format!("Bearer {}", token)
    }

    /// Sends a GET request, optionally authenticated, and decodes the JSON body
    pub async fn get(&self, uri: &str, auth: Option<String>) -> (StatusCode, serde_json::Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(auth) = auth {
            builder = builder.header("authorization", auth);
        }

        let response = self
            .app
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            serde_json::Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, json)
    }
}
