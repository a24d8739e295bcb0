//! Command types for control-to-server communication.
//!
//! The control view posts a loosely typed [`CommandRequest`]; the dispatcher
//! in `wheel-core` validates it into a [`Command`], which carries only the
//! fields its action needs. Only a validated [`Command`] ever reaches the
//! state store.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CommandKind, Side, TimerState};

/// Raw body of `POST /api/send_command`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CommandRequest {
    /// The action name, e.g. `"spin"` or `"update_score"`.
    #[serde(default)]
    pub action: Option<String>,
    /// Action-specific fields. Missing or `null` means no fields.
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// A validated control command.
///
/// Each variant corresponds to one [`CommandKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Start the wheel animation. Touches nothing but the command stamp.
    Spin,
    /// Return the display to the idle wheel. Touches nothing but the stamp.
    Reset,
    /// Add `change` points to `side`, clamped at zero.
    UpdateScore {
        /// Side to adjust.
        side: Side,
        /// Points to add (negative to subtract).
        change: i64,
    },
    /// Zero both scores.
    ResetScores,
    /// Update whichever durations are present.
    ///
    /// Setting `global_time` also stops the global countdown.
    SetTimers {
        /// New result countdown in seconds (> 0).
        result_duration: Option<u32>,
        /// New global countdown in seconds (> 0).
        global_time: Option<u32>,
    },
    /// Start or stop the global countdown.
    ControlGlobalTimer {
        /// Requested countdown state.
        state: TimerState,
    },
}

impl Command {
    /// The action tag recorded in the game state when this command applies.
    pub const fn kind(&self) -> CommandKind {
        match self {
            Self::Spin => CommandKind::Spin,
            Self::Reset => CommandKind::Reset,
            Self::UpdateScore { .. } => CommandKind::UpdateScore,
            Self::ResetScores => CommandKind::ResetScores,
            Self::SetTimers { .. } => CommandKind::SetTimers,
            Self::ControlGlobalTimer { .. } => CommandKind::ControlGlobalTimer,
        }
    }
}
