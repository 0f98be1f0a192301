//! Error types for reading preference profiles.
//!
//! Ranking itself never fails; only turning external input into a
//! [`PreferenceProfile`](crate::PreferenceProfile) can.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProfileError {
    /// Profile file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Profile is not valid JSON or has wrongly typed fields
    #[error("Invalid profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProfileError>;
