//! Route configuration.

pub mod apps;
pub mod health;

use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/apps", get(apps::list_apps).post(apps::create_app))
        .route(
            "/apps/{id}",
            get(apps::get_app)
                .put(apps::update_app)
                .delete(apps::delete_app),
        )
        .route("/health", get(health::health_check));

    Router::new()
        .nest("/api", api_routes)
        // Unmatched paths, including anything under /api, get a JSON 404
        // rather than falling through to a static-asset handler.
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not Found" })),
    )
}
