//! Command validation and dispatch.
//!
//! [`CommandDispatcher::submit`] is the single entry point for control
//! actions. It parses the action name and its loosely typed payload into a
//! [`Command`], then hands the command's state transition to the
//! [`StateStore`]. Anything that fails to parse is rejected before the store
//! is touched, so a rejected action never bumps the command id and never
//! overwrites the last recorded command.
//!
//! # Payload rules
//!
//! | action | payload | rejected when |
//! |--------|---------|---------------|
//! | `spin`, `reset`, `reset_scores` | ignored | never |
//! | `update_score` | `side`, `change` | `side` is not `left`/`right`, `change` is not an integer |
//! | `set_timers` | `result_duration?`, `global_time?` | a present value is not a positive integer |
//! | `control_global_timer` | `state` | never (anything but `start` means stop) |

use std::sync::Arc;

use serde_json::Value;
use tracing::{info, warn};
use wheel_types::{Command, CommandKind, GameState, Side, TimerState};

use crate::store::StateStore;

/// Reasons a submitted action is refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DispatchError {
    /// The action name is not one of the known commands.
    #[error("unknown action: {0:?}")]
    InvalidAction(String),

    /// The action is known but its payload is missing or malformed.
    #[error("invalid payload for {action}: {reason}")]
    InvalidPayload {
        /// The action whose payload was rejected.
        action: CommandKind,
        /// What was wrong with it.
        reason: String,
    },
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

/// Validate a raw action name and payload into a [`Command`].
///
/// A `null` payload is treated as an empty object.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidAction`] for an unknown action name and
/// [`DispatchError::InvalidPayload`] when a required field is missing or has
/// the wrong type.
pub fn parse_command(action: &str, payload: &Value) -> Result<Command, DispatchError> {
    let kind = CommandKind::from_action(action)
        .ok_or_else(|| DispatchError::InvalidAction(action.to_owned()))?;

    match kind {
        CommandKind::Spin => Ok(Command::Spin),
        CommandKind::Reset => Ok(Command::Reset),
        CommandKind::ResetScores => Ok(Command::ResetScores),
        CommandKind::UpdateScore => {
            let fields = Fields::new(kind, payload)?;
            let side = fields
                .text("side")
                .and_then(Side::from_wire)
                .ok_or_else(|| fields.invalid("side must be \"left\" or \"right\""))?;
            let change = fields
                .get("change")
                .and_then(Value::as_i64)
                .ok_or_else(|| fields.invalid("change must be an integer"))?;
            Ok(Command::UpdateScore { side, change })
        }
        CommandKind::SetTimers => {
            let fields = Fields::new(kind, payload)?;
            Ok(Command::SetTimers {
                result_duration: fields.positive_seconds("result_duration")?,
                global_time: fields.positive_seconds("global_time")?,
            })
        }
        CommandKind::ControlGlobalTimer => {
            let fields = Fields::new(kind, payload)?;
            Ok(Command::ControlGlobalTimer {
                state: TimerState::from_wire(fields.text("state")),
            })
        }
    }
}

/// Read-only view over a payload object, tagged with its action for errors.
struct Fields<'a> {
    kind: CommandKind,
    object: Option<&'a serde_json::Map<String, Value>>,
}

impl<'a> Fields<'a> {
    fn new(kind: CommandKind, payload: &'a Value) -> Result<Self, DispatchError> {
        match payload {
            Value::Null => Ok(Self { kind, object: None }),
            Value::Object(map) => Ok(Self {
                kind,
                object: Some(map),
            }),
            _ => Err(DispatchError::InvalidPayload {
                action: kind,
                reason: "payload must be an object".to_owned(),
            }),
        }
    }

    /// A field's value, with explicit `null` treated as absent.
    fn get(&self, key: &str) -> Option<&'a Value> {
        self.object
            .and_then(|map| map.get(key))
            .filter(|value| !value.is_null())
    }

    fn text(&self, key: &str) -> Option<&'a str> {
        self.get(key).and_then(Value::as_str)
    }

    fn positive_seconds(&self, key: &str) -> Result<Option<u32>, DispatchError> {
        let Some(value) = self.get(key) else {
            return Ok(None);
        };
        value
            .as_u64()
            .filter(|seconds| *seconds > 0)
            .and_then(|seconds| u32::try_from(seconds).ok())
            .map(Some)
            .ok_or_else(|| self.invalid(&format!("{key} must be a positive integer")))
    }

    fn invalid(&self, reason: &str) -> DispatchError {
        DispatchError::InvalidPayload {
            action: self.kind,
            reason: reason.to_owned(),
        }
    }
}

// ---------------------------------------------------------------------------
// Transitions
// ---------------------------------------------------------------------------

/// Apply a command's effect to a state, without touching the command stamp.
///
/// The store records the command tag and mints the id around this call.
pub const fn apply_command(command: &Command, state: &mut GameState) {
    match *command {
        Command::Spin | Command::Reset => {}
        Command::UpdateScore { side, change } => {
            state.scores.adjust(side, change);
        }
        Command::ResetScores => state.scores.clear(),
        Command::SetTimers {
            result_duration,
            global_time,
        } => {
            // Durations are positive; a zero leaves the field unchanged.
            if let Some(seconds @ 1..) = result_duration {
                state.config.result_duration = seconds;
            }
            if let Some(seconds @ 1..) = global_time {
                // A new duration invalidates any running deadline.
                state.config.global_time_set = seconds;
                state.config.global_timer_running = false;
            }
        }
        Command::ControlGlobalTimer { state: timer } => {
            state.config.global_timer_running = timer.is_running();
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

/// Validates control actions and applies them through the [`StateStore`].
#[derive(Debug, Clone)]
pub struct CommandDispatcher {
    store: Arc<StateStore>,
}

impl CommandDispatcher {
    /// Create a dispatcher writing to `store`.
    pub const fn new(store: Arc<StateStore>) -> Self {
        Self { store }
    }

    /// The store this dispatcher writes to.
    pub const fn store(&self) -> &Arc<StateStore> {
        &self.store
    }

    /// Validate and apply one control action.
    ///
    /// On success returns the published state, whose `command_id` is
    /// strictly greater than any previously returned one.
    ///
    /// # Errors
    ///
    /// Returns a [`DispatchError`] when the action is unknown or its payload
    /// is invalid; the state is left untouched in that case.
    pub async fn submit(&self, action: &str, payload: &Value) -> Result<GameState, DispatchError> {
        let command = parse_command(action, payload).map_err(|error| {
            warn!(action, %error, "command rejected");
            error
        })?;
        Ok(self.execute(command).await)
    }

    /// Apply an already validated command.
    async fn execute(&self, command: Command) -> GameState {
        let state = self
            .store
            .apply(command.kind(), |state| apply_command(&command, state))
            .await;
        info!(
            command = %command.kind(),
            command_id = %state.command_id,
            left = state.scores.left,
            right = state.scores.right,
            global_timer_running = state.config.global_timer_running,
            "command applied"
        );
        state
    }
}
