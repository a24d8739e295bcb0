//! Command/state synchronization core for the prize wheel service.
//!
//! The display view polls a single game-state record; the control view
//! submits commands that mutate it. This crate owns both halves of that
//! exchange plus the asset listing that feeds the wheel.
//!
//! # Modules
//!
//! - [`config`] -- Configuration loading from `wheel-config.yaml` into
//!   strongly-typed structs.
//! - [`store`] -- [`StateStore`], the lock-guarded owner of the game state
//!   and the only place command ids are minted.
//! - [`dispatcher`] -- [`CommandDispatcher`], which validates raw actions
//!   into [`Command`]s and applies them through the store.
//! - [`assets`] -- Image directory listing joined with display-text
//!   overrides.
//!
//! [`StateStore`]: store::StateStore
//! [`CommandDispatcher`]: dispatcher::CommandDispatcher
//! [`Command`]: wheel_types::Command

pub mod assets;
pub mod config;
pub mod dispatcher;
pub mod store;
