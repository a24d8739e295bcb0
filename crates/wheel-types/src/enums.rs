//! Enumeration types for the prize wheel game.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Command tags
// ---------------------------------------------------------------------------

/// The tag of the last command applied to the game state.
///
/// Serialized in `snake_case` so the wire value matches the action name the
/// control view submits (`"update_score"`, `"control_global_timer"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum CommandKind {
    /// Start the wheel animation on the display.
    Spin,
    /// Return the display to the idle wheel.
    Reset,
    /// Add or subtract points for one side.
    UpdateScore,
    /// Zero both scores.
    ResetScores,
    /// Change the result countdown and/or the global timer duration.
    SetTimers,
    /// Start or stop the global countdown.
    ControlGlobalTimer,
}

impl CommandKind {
    /// All action tags, in wire order.
    pub const ALL: [Self; 6] = [
        Self::Spin,
        Self::Reset,
        Self::UpdateScore,
        Self::ResetScores,
        Self::SetTimers,
        Self::ControlGlobalTimer,
    ];

    /// The action name as it appears on the wire.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spin => "spin",
            Self::Reset => "reset",
            Self::UpdateScore => "update_score",
            Self::ResetScores => "reset_scores",
            Self::SetTimers => "set_timers",
            Self::ControlGlobalTimer => "control_global_timer",
        }
    }

    /// Look up an action by its exact wire name.
    ///
    /// Matching is case-sensitive: `"Spin"` is not an action.
    pub fn from_action(action: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == action)
    }
}

impl core::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Score sides
// ---------------------------------------------------------------------------

/// One of the two competing sides shown on the scoreboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "bindings/")]
pub enum Side {
    /// The left-hand team.
    Left,
    /// The right-hand team.
    Right,
}

impl Side {
    /// Parse a side from its exact wire name (`"left"` or `"right"`).
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Global timer control
// ---------------------------------------------------------------------------

/// Requested state of the global countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerState {
    /// Run the countdown.
    Start,
    /// Halt the countdown.
    Stop,
}

impl TimerState {
    /// Interpret a wire value leniently: only `"start"` starts the timer,
    /// anything else (including a missing value) stops it.
    pub fn from_wire(value: Option<&str>) -> Self {
        match value {
            Some("start") => Self::Start,
            _ => Self::Stop,
        }
    }

    /// Whether this state means the countdown is running.
    pub const fn is_running(self) -> bool {
        matches!(self, Self::Start)
    }
}
