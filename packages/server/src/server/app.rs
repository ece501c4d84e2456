//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::kernel::ServerDeps;
use crate::server::routes::{correct_address_handler, health_handler, lead_handler};
use crate::server::static_files::serve_site;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
    pub config: Arc<Config>,
}

/// Build the Axum application router
///
/// API routes first, then the embedded marketing site as the fallback so any
/// non-API path serves the page.
pub fn build_app(deps: ServerDeps, config: Config) -> Router {
    let state = AppState {
        deps: Arc::new(deps),
        config: Arc::new(config),
    };

    // CORS: the site and API share an origin in production, but keep the API
    // callable from local dev servers
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/api/lead", post(lead_handler))
        .route("/api/address/correct", post(correct_address_handler))
        .route("/health", get(health_handler))
        .fallback(serve_site)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
