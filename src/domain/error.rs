//! Domain Errors
//!
//! Shared error types for the store boundary and the engine boundary.

use std::fmt;

/// Result type for remote store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors reported by a remote list store implementation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The remote call failed outright (network, HTTP status, service down)
    Unavailable(String),
    /// The referenced row does not exist
    NotFound(String),
    /// The service answered with a payload that could not be decoded
    Decode(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "store unavailable: {}", msg),
            StoreError::NotFound(msg) => write!(f, "not found: {}", msg),
            StoreError::Decode(msg) => write!(f, "decode error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

/// Result type for engine operations
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors surfaced by the list synchronization engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A remote call failed; the message carries the store detail
    StoreUnavailable(String),
    /// One or more updates of a concurrent reorder batch failed
    PartialReorderFailure { failed: usize, total: usize },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::StoreUnavailable(msg) => write!(f, "store unavailable: {}", msg),
            EngineError::PartialReorderFailure { failed, total } => {
                write!(f, "reorder batch failed: {} of {} updates", failed, total)
            }
        }
    }
}

impl std::error::Error for EngineError {}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        EngineError::StoreUnavailable(err.to_string())
    }
}
