//! Control endpoint: the one write path into the game state.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `POST` | `/api/send_command` | Validate and apply one command |

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use wheel_types::{CommandRequest, GameState};

use crate::error::ApiError;
use crate::state::AppState;

/// Response body for an accepted command.
#[derive(Debug, Serialize)]
pub struct CommandResponse {
    /// Always `"success"`.
    pub status: &'static str,
    /// The state published by this command.
    pub state: GameState,
}

// ---------------------------------------------------------------------------
// POST /api/send_command
// ---------------------------------------------------------------------------

/// Submit a command from the control view.
///
/// Accepted commands answer `200 {"status": "success", "state": ...}`.
/// Unknown actions, invalid payloads and unparsable bodies answer `400`
/// with the [`ApiError`] envelope and leave the state untouched.
pub async fn send_command(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CommandRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(request) = body.map_err(|rejection| ApiError::MalformedBody(rejection.body_text()))?;
    let action = request.action.unwrap_or_default();

    let published = state.dispatcher.submit(&action, &request.payload).await?;

    Ok(Json(CommandResponse {
        status: "success",
        state: published,
    }))
}
