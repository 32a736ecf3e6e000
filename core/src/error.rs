//! Error types for the portlist-core library.

use thiserror::Error;

/// Result type alias for portlist operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while enumerating and reporting sockets.
///
/// Unparseable lines and sockets without a resolvable owner are not errors;
/// they are skipped or reported as unknown respectively.
#[derive(Error, Debug)]
pub enum Error {
    /// The selected enumeration command could not be executed.
    #[error("Command execution failed: {0}")]
    CommandFailed(String),

    /// No supported enumeration command is available.
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
