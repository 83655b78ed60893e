//! Error types for talking to the event store.

use thiserror::Error;

use crate::validate::ValidationErrors;

/// Errors that can occur when reading from or writing to the event store.
///
/// Every variant is recoverable: connectivity and rejection errors can be
/// retried, not-found means the record is gone, and validation errors are
/// raised before any request leaves the client.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Cannot reach the event store: {0}")]
    Connectivity(String),

    #[error("The event store rejected the request: {0}")]
    Rejected(String),

    #[error("No event with id '{0}'")]
    NotFound(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrors),
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
