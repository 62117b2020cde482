use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::handlers::{ApiState, get_prices, health};

/// Create the price feed router
///
/// Routes:
/// - GET /api/prices - Live tick (always 200)
/// - GET /health     - Baseline freshness and refresh counters
///
/// Any other path is served from `static_dir` when given.
pub fn create_router(state: ApiState, static_dir: Option<&str>) -> Router {
    let router = Router::new()
        .route("/api/prices", get(get_prices))
        .route("/health", get(health))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
