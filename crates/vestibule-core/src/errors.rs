//! Unified error system for Vestibule.
//!
//! A single error type covers the whole workspace. Authorization denials are
//! deliberately collapsed to one variant with no sub-code: an unauthenticated
//! caller must not learn which check failed. The internal reason is emitted
//! through `tracing` at the decision site instead.

use serde::{Deserialize, Serialize};

/// Unified error type for all Vestibule operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum VestibuleError {
    /// The request was not admitted. Covers every denial cause: no visitor
    /// attached, invalid visitor, scope mismatch, usage limit exceeded.
    #[error("Access denied")]
    AccessDenied {
        /// Internal diagnostic message, not shown to the requester
        message: String,
    },

    /// Persistence failure. Distinct from denial: the caller must not treat
    /// a broken store as either an admission or a refusal.
    #[error("Storage error: {message}")]
    Storage {
        /// Error message describing the storage failure
        message: String,
    },

    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },
}

impl VestibuleError {
    /// Create an access denied error
    pub fn access_denied(message: impl Into<String>) -> Self {
        Self::AccessDenied {
            message: message.into(),
        }
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Whether this error is a denial (as opposed to an infrastructure
    /// failure).
    pub fn is_denial(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }
}

/// Standard Result type for Vestibule operations
pub type VestibuleResult<T> = std::result::Result<T, VestibuleError>;
