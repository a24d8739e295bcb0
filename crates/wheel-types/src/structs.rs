//! Core records: the shared game state and the wheel entries shown on the
//! display.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{CommandKind, Side};
use crate::ids::CommandId;

/// Default seconds the result screen counts down after a spin.
pub const DEFAULT_RESULT_DURATION: u32 = 60;

/// Default seconds on the global countdown.
pub const DEFAULT_GLOBAL_TIME_SET: u32 = 600;

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Points for each side. Scores never go below zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Scores {
    /// Points for the left side.
    #[ts(type = "number")]
    pub left: u64,
    /// Points for the right side.
    #[ts(type = "number")]
    pub right: u64,
}

impl Scores {
    /// Current points for `side`.
    pub const fn get(&self, side: Side) -> u64 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Add `change` points to `side`, clamping at zero (and at `u64::MAX`).
    ///
    /// Returns the new score for that side.
    pub const fn adjust(&mut self, side: Side, change: i64) -> u64 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        let magnitude = change.unsigned_abs();
        *slot = if change < 0 {
            slot.saturating_sub(magnitude)
        } else {
            slot.saturating_add(magnitude)
        };
        *slot
    }

    /// Zero both sides.
    pub const fn clear(&mut self) {
        self.left = 0;
        self.right = 0;
    }
}

// ---------------------------------------------------------------------------
// Timer configuration
// ---------------------------------------------------------------------------

/// Countdown settings shared by the display and control views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct TimerConfig {
    /// Seconds the result screen counts down after a spin (always > 0).
    pub result_duration: u32,
    /// Seconds on the global countdown (always > 0).
    pub global_time_set: u32,
    /// Whether the global countdown is running.
    pub global_timer_running: bool,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            result_duration: DEFAULT_RESULT_DURATION,
            global_time_set: DEFAULT_GLOBAL_TIME_SET,
            global_timer_running: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Game state
// ---------------------------------------------------------------------------

/// The single authoritative record pollers read and commands mutate.
///
/// Serializes with exactly the field names the display view polls for:
/// `command_id`, `command`, `scores` and `config`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameState {
    /// Id of the most recent accepted command (`0` before the first one).
    pub command_id: CommandId,
    /// Tag of the most recent accepted command, `null` at startup.
    pub command: Option<CommandKind>,
    /// Current scoreboard.
    pub scores: Scores,
    /// Current countdown settings.
    pub config: TimerConfig,
}

impl GameState {
    /// A fresh state with the given countdown durations and no command.
    pub fn with_durations(result_duration: u32, global_time_set: u32) -> Self {
        Self {
            config: TimerConfig {
                result_duration,
                global_time_set,
                global_timer_running: false,
            },
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Wheel entries
// ---------------------------------------------------------------------------

/// One sector of the wheel, derived from an image file on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct WheelEntry {
    /// Image file name, e.g. `a.jpg`.
    pub filename: String,
    /// Path relative to the static root, e.g. `wheel_images/a.jpg`.
    pub path: String,
    /// Text shown when this sector wins.
    pub text: String,
}
