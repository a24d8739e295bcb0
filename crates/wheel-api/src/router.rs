//! Axum router construction.
//!
//! Assembles the page, API and static-file routes into a single [`Router`]
//! with CORS and request tracing enabled.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::control;
use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /` -- wheel display page
/// - `GET /control` -- operator control page
/// - `GET /api/get_wheel_data` -- wheel entries
/// - `GET /api/check_status` -- game state snapshot
/// - `POST /api/send_command` -- apply a control command
/// - `GET /static/*` -- files under the configured static directory
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(state.static_dir());

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/control", get(handlers::control_page))
        // Display API
        .route("/api/get_wheel_data", get(handlers::get_wheel_data))
        .route("/api/check_status", get(handlers::check_status))
        // Control API
        .route("/api/send_command", post(control::send_command))
        // Images and other static assets
        .nest_service("/static", static_files)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
