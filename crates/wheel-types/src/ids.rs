//! The identifier stamped on every accepted command.
//!
//! Pollers keep the last [`CommandId`] they acted on and fire an effect only
//! when a read returns a different, non-zero id. The store guarantees ids are
//! strictly increasing, so "different" and "newer" are the same test.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Opaque, strictly increasing token for the most recent accepted command.
///
/// The value is a Unix timestamp in milliseconds, bumped past the previous
/// id whenever two commands land in the same millisecond. `0` means no
/// command has been accepted yet.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(transparent)]
#[ts(export, export_to = "bindings/")]
pub struct CommandId(#[ts(type = "number")] pub u64);

impl CommandId {
    /// The id of a freshly started server, before any command.
    pub const ZERO: Self = Self(0);

    /// Return the inner value.
    pub const fn into_inner(self) -> u64 {
        self.0
    }

    /// The next id after `self`, given the current wall-clock time.
    ///
    /// Returns `max(self + 1, now_millis)`, so the result is strictly greater
    /// than `self` even when the clock has not advanced or went backwards.
    pub const fn next(self, now_millis: u64) -> Self {
        let bumped = self.0.saturating_add(1);
        if now_millis > bumped {
            Self(now_millis)
        } else {
            Self(bumped)
        }
    }
}

impl core::fmt::Display for CommandId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}
