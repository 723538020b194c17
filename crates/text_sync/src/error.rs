//! Error types for settings persistence

use thiserror::Error;

/// Errors raised while reading or writing [`SyncSettings`](crate::SyncSettings).
///
/// Syncing itself never fails: a missing input or text is a silent no-op.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Settings JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;
