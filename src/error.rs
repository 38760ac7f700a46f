//! Error types for the Memorizer service.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for the failures that can occur while storing records or running the server.

use sqlx::migrate::MigrateError;
use thiserror::Error;

/// The main error type for the Memorizer service.
///
/// Services, stores and the server bootstrap all return this error type,
/// so the HTTP layer has a single mapping to status codes.
///
/// # Example
///
/// ```
/// use memorizer::error::MemorizerError;
///
/// let error = MemorizerError::Storage(sqlx::Error::PoolClosed);
/// assert!(error.to_string().starts_with("Storage error"));
/// ```
#[derive(Debug, Error)]
pub enum MemorizerError {
    /// The relational store rejected or failed a query.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// The embedded schema migrations could not be applied.
    #[error("Failed to apply database migrations: {0}")]
    Migration(#[from] MigrateError),

    /// The HTTP listener could not be bound or failed while serving.
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}

/// A type alias for Results that return MemorizerError.
pub type MemorizerResult<T> = Result<T, MemorizerError>;
