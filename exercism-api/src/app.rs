/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use exercism_api::{app::{build_router, AppState}, config::Config};
/// use exercism_shared::store::postgres::PgStore;
/// use sqlx::PgPool;
/// use std::sync::Arc;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(Arc::new(PgStore::new(pool)), config);
/// let app = build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    middleware::{requester::requester_auth_layer, security::SecurityHeadersLayer},
    routes,
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use exercism_shared::routes::{SiteRoutes, SolutionRoutes};
use exercism_shared::store::Store;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned per request via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    /// Record storage
    pub store: Arc<dyn Store>,

    /// URL builder for rendered solutions
    pub routes: Arc<dyn SolutionRoutes>,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates state with [`SiteRoutes`] built from the configured base URL
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        let routes: Arc<dyn SolutionRoutes> = Arc::new(SiteRoutes::new(config.site.base_url.clone()));
        Self {
            store,
            routes,
            config: Arc::new(config),
        }
    }

    /// Secret used to validate requester tokens
    pub fn jwt_secret(&self) -> &str {
        &self.config.jwt.secret
    }
}

/// Builds the router with all routes and middleware
///
/// ```text
/// /
/// ├── GET /health
/// ├── GET /blog-posts
/// ├── GET /blog-posts/:slug
/// └── /v1/
///     └── GET /solutions/:uuid    (bearer token)
/// ```
pub fn build_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(routes::health::health_check))
        .route("/blog-posts", get(routes::blog_posts::list_blog_posts))
        .route("/blog-posts/:slug", get(routes::blog_posts::show_blog_post));

    let v1_routes = Router::new()
        .route("/solutions/:uuid", get(routes::solutions::show_solution))
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            requester_auth_layer,
        ));

    Router::new()
        .merge(public_routes)
        .nest("/v1", v1_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors_layer(&state.config))
        .layer(SecurityHeadersLayer::new(state.config.api.production))
        .with_state(state)
}

fn cors_layer(config: &Config) -> CorsLayer {
    if config.api.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .max_age(std::time::Duration::from_secs(3600))
}
