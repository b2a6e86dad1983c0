//! Pure guard evaluation.
//!
//! [`evaluate`] covers the synchronous part of the decision: visitor
//! presence, validity, and scope match. The usage limit is not decided
//! here; it belongs to the store's atomic admission call, which is the
//! serialization point for concurrent requests.

use chrono::{DateTime, Utc};
use vestibule_core::{Scope, Visitor};

/// Internal denial cause, used for tracing only.
///
/// Callers of the guard see the single collapsed
/// [`AccessDenied`](vestibule_core::VestibuleError::AccessDenied) kind; the
/// specific cause is never surfaced in the error itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DenialReason {
    /// No visitor credential attached to the request
    NoVisitor,
    /// A credential is attached but is deactivated or expired
    InvalidVisitor,
    /// The credential's scope does not cover the required scope
    ScopeMismatch,
    /// The persisted visit counter already stands at the cap
    LimitReached,
}

impl std::fmt::Display for DenialReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            Self::NoVisitor => "no visitor principal",
            Self::InvalidVisitor => "visitor inactive or expired",
            Self::ScopeMismatch => "scope mismatch",
            Self::LimitReached => "usage limit exceeded",
        };
        write!(f, "{reason}")
    }
}

/// Evaluate presence, validity, and scope for an attached visitor.
///
/// Returns the visitor on pass-through so the caller can proceed to the
/// admission call without re-resolving it.
pub fn evaluate<'a>(
    required: &Scope,
    visitor: Option<&'a Visitor>,
    now: DateTime<Utc>,
) -> Result<&'a Visitor, DenialReason> {
    let visitor = visitor.ok_or(DenialReason::NoVisitor)?;
    if !visitor.is_valid(now) {
        return Err(DenialReason::InvalidVisitor);
    }
    if !visitor.scope.matches(required) {
        return Err(DenialReason::ScopeMismatch);
    }
    Ok(visitor)
}
