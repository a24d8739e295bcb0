//! Shared type definitions for the prize wheel service.
//!
//! Every type that crosses the HTTP boundary lives here so the display and
//! control views see exactly one shape for each payload. Types flow to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- The [`CommandId`] token pollers compare between reads
//! - [`enums`] -- Action tags, score sides, timer states
//! - [`structs`] -- [`GameState`] and its parts, plus [`WheelEntry`]
//! - [`commands`] -- The validated [`Command`] variants and the raw request body

pub mod commands;
pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use commands::{Command, CommandRequest};
pub use enums::{CommandKind, Side, TimerState};
pub use ids::CommandId;
pub use structs::{GameState, Scores, TimerConfig, WheelEntry};
