//! Display-side endpoint handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Wheel display page |
//! | `GET` | `/control` | Operator control page |
//! | `GET` | `/api/get_wheel_data` | Wheel entries from the image directory |
//! | `GET` | `/api/check_status` | Current game state snapshot |

use std::sync::Arc;

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use axum::Json;

use crate::error::ApiError;
use crate::state::AppState;

const DISPLAY_PAGE: &str = include_str!("../pages/index.html");
const CONTROL_PAGE: &str = include_str!("../pages/control.html");

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Serve the wheel display page.
#[allow(clippy::unused_async)]
pub async fn index() -> impl IntoResponse {
    Html(DISPLAY_PAGE)
}

/// Serve the operator control page.
#[allow(clippy::unused_async)]
pub async fn control_page() -> impl IntoResponse {
    Html(CONTROL_PAGE)
}

// ---------------------------------------------------------------------------
// GET /api/get_wheel_data
// ---------------------------------------------------------------------------

/// List the wheel entries.
///
/// The directory scan runs on the blocking pool; it never touches the
/// state store.
pub async fn get_wheel_data(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let assets = state.assets.clone();
    let entries = tokio::task::spawn_blocking(move || assets.list())
        .await
        .map_err(|e| ApiError::Internal(format!("asset listing task failed: {e}")))?;

    Ok(Json(entries))
}

// ---------------------------------------------------------------------------
// GET /api/check_status
// ---------------------------------------------------------------------------

/// Return a snapshot of the game state.
///
/// Safe to poll at any rate; each response is a consistent copy.
pub async fn check_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(state.store().read().await)
}
