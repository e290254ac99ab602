//! Error types for the simulation core.

use std::path::PathBuf;

use thiserror::Error;

/// Art required to build a sprite or character is missing or unreadable.
///
/// Always fatal at startup: nothing in the tick loop can recover from it.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("character has no idle art: at least one of idle-left/idle-right is required")]
    MissingIdleArt,

    #[error("failed to read image '{}': {reason}", path.display())]
    Unreadable { path: PathBuf, reason: String },

    #[error("animation '{}' has no frames", path.display())]
    EmptyAnimation { path: PathBuf },
}

impl AssetError {
    pub fn unreadable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        AssetError::Unreadable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// The clock handed to the timebase went backwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ClockError {
    #[error("non-monotonic clock: last tick at {last_ms}ms, now {now_ms}ms")]
    NonMonotonic { last_ms: u64, now_ms: u64 },
}
