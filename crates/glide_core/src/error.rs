//! Error types for the navigator core

use thiserror::Error;

/// Errors surfaced by the navigator
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GlideError {
    /// The container had no children at registration time
    ///
    /// Fatal to the affected navigator instance only; a bootstrap loop
    /// processing several containers must keep going.
    #[error("container has no slides to register")]
    EmptyRegistration,

    /// A slide index escaped the registry bounds
    ///
    /// Internal logic fault (e.g. a stale index against a torn-down
    /// registry); never shown to a user.
    #[error("slide index {index} out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for navigator operations
pub type Result<T> = std::result::Result<T, GlideError>;
