//! HTTP API server for the prize wheel service.
//!
//! This crate provides an Axum HTTP server that exposes:
//!
//! - **Display endpoints** (`GET /`, `GET /api/check_status`,
//!   `GET /api/get_wheel_data`) that the wheel view polls
//! - **Control endpoints** (`GET /control`, `POST /api/send_command`) that
//!   the operator view uses to spin, reset, score and time the game
//! - **Static files** (`GET /static/...`) including the wheel images
//!
//! # Architecture
//!
//! All handlers share one [`AppState`] holding the
//! [`CommandDispatcher`](wheel_core::dispatcher::CommandDispatcher) and its
//! [`StateStore`](wheel_core::store::StateStore). Status reads take the
//! store's read lock and return a copy; commands serialize on its write
//! lock. Pollers detect new commands by comparing `command_id` between
//! reads.

pub mod control;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

// Re-export primary types for convenience.
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;
