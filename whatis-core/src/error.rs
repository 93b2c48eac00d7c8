//! Error types for whatis configuration paths.
//!
//! Rendering itself never fails. These errors come from building
//! descriptors out of raw data and from registering error types.

/// Main error type for fallible whatis operations.
#[derive(Debug, thiserror::Error)]
pub enum WhatisError {
    /// A raw channel direction outside `1..=3`.
    #[error("Unknown channel direction: {0}\n  Hint: expected 1 (receive), 2 (send) or 3 (both)")]
    UnknownChanDir(u8),

    /// The error type already has a registration.
    #[error("Error type already registered: {type_name}")]
    AlreadyRegistered { type_name: &'static str },
}

/// Convenient Result type for whatis operations.
pub type Result<T> = std::result::Result<T, WhatisError>;
