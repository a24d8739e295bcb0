//! Shared application state for the HTTP server.
//!
//! [`AppState`] is built once at startup and injected into every handler
//! through Axum's `State` extractor. There is no ambient global: the
//! [`StateStore`] lives exactly as long as the router that owns it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use wheel_core::assets::AssetSource;
use wheel_core::dispatcher::CommandDispatcher;
use wheel_core::store::StateStore;

/// Shared state for the Axum application.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Validates and applies control commands.
    pub dispatcher: CommandDispatcher,
    /// Lists the wheel images on each data request.
    pub assets: AssetSource,
    /// Root directory served under `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    /// Create application state around an existing store.
    pub fn new(store: Arc<StateStore>, assets: AssetSource, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            dispatcher: CommandDispatcher::new(store),
            assets,
            static_dir: static_dir.into(),
        }
    }

    /// The game state store.
    pub const fn store(&self) -> &Arc<StateStore> {
        self.dispatcher.store()
    }

    /// The directory served under `/static`.
    pub fn static_dir(&self) -> &Path {
        &self.static_dir
    }
}
