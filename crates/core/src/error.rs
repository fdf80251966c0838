//! Error types for the core domain.

use thiserror::Error;

/// Core domain error type.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid package name: {0}")]
    InvalidPackageName(String),

    #[error("invalid package scope: {0}")]
    InvalidScope(String),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, Error>;
