//! Error types for the catalog crate.

use thiserror::Error;

/// Errors that can occur while loading or validating a movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON catalog could not be decoded
    #[error("Invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    /// Line in a `.dat` catalog couldn't be parsed
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// Two entries share a name (compared case-insensitively)
    #[error("Duplicate movie in catalog: {name}")]
    DuplicateMovie { name: String },

    /// Catalog validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
