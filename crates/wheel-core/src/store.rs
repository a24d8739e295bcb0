//! The authoritative owner of the game state.
//!
//! [`StateStore`] guards one [`GameState`] behind a single
//! [`tokio::sync::RwLock`]. Pollers take the read lock and walk away with a
//! copy; every command runs its whole read-modify-write under the write
//! lock, so two concurrent score updates can never lose an increment.
//!
//! The store is also the only place [`CommandId`]s are minted. Ids are the
//! wall-clock time in milliseconds, bumped past the previous id when two
//! commands land in the same millisecond.

use tokio::sync::RwLock;
use tracing::debug;
use wheel_types::{CommandId, CommandKind, GameState};

/// Source of the current Unix time in milliseconds.
pub type Clock = fn() -> u64;

/// Read the system clock as Unix milliseconds.
///
/// A clock before the epoch reads as `0`; id minting still moves forward
/// because each id is at least the previous one plus one.
pub fn system_clock() -> u64 {
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}

/// Lock-guarded owner of the single [`GameState`].
///
/// Constructed once at startup and shared via [`Arc`](std::sync::Arc).
#[derive(Debug)]
pub struct StateStore {
    state: RwLock<GameState>,
    clock: Clock,
}

impl StateStore {
    /// Create a store holding `initial`, minting ids from the system clock.
    pub fn new(initial: GameState) -> Self {
        Self::with_clock(initial, system_clock)
    }

    /// Create a store with an explicit clock.
    pub fn with_clock(initial: GameState, clock: Clock) -> Self {
        Self {
            state: RwLock::new(initial),
            clock,
        }
    }

    /// Return a consistent copy of the current state.
    ///
    /// The copy is taken under the read lock, so it never reflects a
    /// half-applied command.
    pub async fn read(&self) -> GameState {
        *self.state.read().await
    }

    /// Apply one state transition and publish the result.
    ///
    /// Under the write lock: copies the current state, runs `transition` on
    /// the copy, stamps it with `kind` and a fresh [`CommandId`] strictly
    /// greater than the previous one, then publishes it. Returns the
    /// published state.
    pub async fn apply<F>(&self, kind: CommandKind, transition: F) -> GameState
    where
        F: FnOnce(&mut GameState),
    {
        let mut guard = self.state.write().await;
        let mut next = *guard;
        transition(&mut next);
        next.command = Some(kind);
        next.command_id = guard.command_id.next((self.clock)());
        *guard = next;
        drop(guard);

        debug!(command = %kind, command_id = %next.command_id, "state updated");
        next
    }

    /// The id of the most recently applied command.
    pub async fn command_id(&self) -> CommandId {
        self.state.read().await.command_id
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new(GameState::default())
    }
}
