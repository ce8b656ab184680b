//! Axum router configuration with middleware.
//!
//! Routes:
//! - `/api/history` (any method) and `POST /api/chat`
//! - any other `/api/...` path answers 404; other methods on `/api/chat` 405
//! - everything outside `/api/` is served from the web directory
//!
//! Middleware: CORS, tracing.

use std::path::Path;

use axum::Router;
use axum::routing::{any, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::http::handlers;
use crate::state::AppState;

/// Build the complete router with all routes, static serving and middleware.
pub fn build_router(state: AppState, web_dir: &Path) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    if !web_dir.is_dir() {
        tracing::warn!(
            path = %web_dir.display(),
            "Web directory not found; static requests will return 404"
        );
    }

    Router::new()
        .route("/api/history", any(handlers::history::get_history))
        .route(
            "/api/chat",
            post(handlers::chat::post_chat).fallback(handlers::method_not_allowed),
        )
        .route("/api/", any(handlers::api_not_found))
        .route("/api/{*rest}", any(handlers::api_not_found))
        .fallback_service(ServeDir::new(web_dir))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
