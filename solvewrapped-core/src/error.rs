//! Error types for solvewrapped-core

use thiserror::Error;

/// Main error type for the solvewrapped-core library
///
/// The aggregation functions themselves are total: malformed feed data
/// degrades to empty statistics instead of producing an error. Errors only
/// surface at the I/O and configuration boundary.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for solvewrapped-core
pub type Result<T> = std::result::Result<T, Error>;
