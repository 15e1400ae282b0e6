//! Error types for the effective ACL resolver.
//!
//! The root error type, `Error`, wraps the subsystem-specific errors so
//! that callers can handle every failure of a resolution request in one
//! place. Non-ACL policy shapes are never an error; they are skipped.

use thiserror::Error;

/// Root error type for the resolver.
#[derive(Debug, Error)]
pub enum Error {
    /// The target resource does not exist
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    /// The policy provider failed to deliver policies
    #[error("Policy provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The privilege hierarchy is malformed
    #[error("Privilege error: {0}")]
    Privilege(#[from] PrivilegeError),

    /// The inbound request could not be understood
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Configuration is invalid
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Errors raised by a policy provider.
///
/// These are terminal for the request that triggered them.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The backing store could not be reached
    #[error("Policy store unavailable: {0}")]
    Unavailable(String),
}

/// Errors related to the privilege aggregation hierarchy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PrivilegeError {
    /// The aggregation graph contains a cycle
    #[error("Privilege aggregation cycle: {0}")]
    Cycle(String),

    /// An aggregate privilege declares no children
    #[error("Aggregate privilege has no children: {0}")]
    EmptyAggregate(String),

    /// A privilege name is empty
    #[error("Privilege name cannot be empty")]
    EmptyName,
}

/// Result type used throughout the resolver.
pub type Result<T> = std::result::Result<T, Error>;
