//! Route definitions

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use domain::LOCALITIES;
use serde_json::json;

use crate::{handlers, state::AppState};

/// Create the main router with all routes.
///
/// One literal weather route is registered per entry of the fixed
/// locality table; each handler captures its own table entry, so
/// dispatch never parses slugs at request time.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Discovery and health endpoints
        .route("/", get(handlers::discovery::discovery))
        .route("/api/health", get(handlers::health::health_check));

    // Weather API: one route per configured locality
    for locality in &LOCALITIES {
        router = router.route(
            &locality.route_path(),
            get(move |State(state): State<AppState>| {
                handlers::weather::locality_forecast(state, locality)
            }),
        );
    }

    router.fallback(not_found).with_state(state)
}

/// Unmatched paths
async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "not found" })))
}
