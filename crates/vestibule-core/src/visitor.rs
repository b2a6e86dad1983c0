//! The visitor credential and its scope.
//!
//! A [`Visitor`] is a scoped, optionally usage-limited temporary-access
//! credential. It is the long-lived entity of the system: audit entries
//! reference it but never own it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{VestibuleError, VestibuleResult};
use crate::identifiers::VisitorId;

/// The distinguished scope value matching any required scope.
pub const ANY_SCOPE: &str = "*";

/// A scope tag partitioning which protected operations a credential may
/// invoke.
///
/// Matching is exact-string and case-sensitive, with one distinguished
/// wildcard value [`ANY_SCOPE`] that matches everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope(String);

impl Scope {
    /// Create a scope from a non-empty tag.
    pub fn new(tag: impl Into<String>) -> VestibuleResult<Self> {
        let tag = tag.into();
        if tag.is_empty() {
            return Err(VestibuleError::invalid("scope tag must not be empty"));
        }
        Ok(Self(tag))
    }

    /// The wildcard scope
    pub fn any() -> Self {
        Self(ANY_SCOPE.to_string())
    }

    /// Whether this is the wildcard scope
    pub fn is_any(&self) -> bool {
        self.0 == ANY_SCOPE
    }

    /// Whether a credential carrying this scope satisfies `required`.
    ///
    /// True iff the tags are equal or this scope is the wildcard. The
    /// wildcard on the `required` side has no special meaning: a guard
    /// protecting scope `"*"` admits only wildcard credentials.
    pub fn matches(&self, required: &Scope) -> bool {
        self.is_any() || self.0 == required.0
    }

    /// The raw tag
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A scoped, optionally usage-limited temporary-access credential.
///
/// Invariant: `visits` never exceeds `max_visits` when the latter is set.
/// The counter is only ever advanced through the store's atomic
/// [`admit_visit`](crate::effects::VisitorStoreEffects::admit_visit), which
/// refuses the increment at the limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Visitor {
    /// Credential identifier
    pub id: VisitorId,
    /// Opaque external contact reference (e.g. an email address). Not
    /// unique-constrained at this layer.
    pub contact: String,
    /// The scope this credential may access
    pub scope: Scope,
    /// Maximum admitted requests; `None` means unlimited
    pub max_visits: Option<u32>,
    /// Admitted requests so far, monotonically non-decreasing
    pub visits: u32,
    /// Deactivated credentials are denied as if absent
    pub is_active: bool,
    /// Expiry instant; `None` means no expiry
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl Visitor {
    /// Create an active, unlimited, non-expiring credential.
    pub fn new(contact: impl Into<String>, scope: Scope) -> Self {
        Self {
            id: VisitorId::new(),
            contact: contact.into(),
            scope,
            max_visits: None,
            visits: 0,
            is_active: true,
            expires_at: None,
            created_at: Utc::now(),
        }
    }

    /// Cap the credential at `max` admitted requests.
    ///
    /// A zero cap is rejected: a credential that can never admit is a
    /// caller bug, not a useful state.
    pub fn with_max_visits(mut self, max: u32) -> VestibuleResult<Self> {
        if max == 0 {
            return Err(VestibuleError::invalid("max_visits must be positive"));
        }
        self.max_visits = Some(max);
        Ok(self)
    }

    /// Set an expiry instant.
    pub fn with_expiry(mut self, expires_at: DateTime<Utc>) -> Self {
        self.expires_at = Some(expires_at);
        self
    }

    /// Whether the credential may still be presented at `now`: active and
    /// not past its expiry. Validity is independent of the usage limit,
    /// which is enforced at admission time against persisted state.
    pub fn is_valid(&self, now: DateTime<Utc>) -> bool {
        self.is_active && self.expires_at.map_or(true, |at| now < at)
    }

    /// Whether the observed counter has reached the cap.
    pub fn at_limit(&self) -> bool {
        self.max_visits.is_some_and(|max| self.visits >= max)
    }

    /// Admitted requests still available, `None` if unlimited.
    pub fn remaining_visits(&self) -> Option<u32> {
        self.max_visits.map(|max| max.saturating_sub(self.visits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use proptest::prelude::*;

    fn scope(tag: &str) -> Scope {
        Scope::new(tag).expect("valid scope tag")
    }

    #[test]
    fn test_scope_matches_equal() {
        assert!(scope("foo").matches(&scope("foo")));
        assert!(!scope("foo").matches(&scope("bar")));
    }

    #[test]
    fn test_scope_matching_is_case_sensitive() {
        assert!(!scope("Foo").matches(&scope("foo")));
    }

    #[test]
    fn test_wildcard_matches_anything() {
        assert!(Scope::any().matches(&scope("foo")));
        assert!(Scope::any().matches(&Scope::any()));
    }

    #[test]
    fn test_wildcard_required_is_not_special() {
        // A guard protecting "*" admits only wildcard credentials.
        assert!(!scope("foo").matches(&Scope::any()));
    }

    #[test]
    fn test_empty_scope_rejected() {
        assert!(Scope::new("").is_err());
    }

    #[test]
    fn test_new_visitor_defaults() {
        let v = Visitor::new("fred@example.com", scope("foo"));
        assert_eq!(v.visits, 0);
        assert!(v.max_visits.is_none());
        assert!(v.is_active);
        assert!(v.is_valid(Utc::now()));
        assert!(!v.at_limit());
        assert!(v.remaining_visits().is_none());
    }

    #[test]
    fn test_zero_max_visits_rejected() {
        let err = Visitor::new("fred@example.com", scope("foo"))
            .with_max_visits(0)
            .unwrap_err();
        assert!(matches!(err, VestibuleError::Invalid { .. }));
    }

    #[test]
    fn test_at_limit_and_remaining() {
        let mut v = Visitor::new("fred@example.com", scope("foo"))
            .with_max_visits(2)
            .expect("positive cap");
        assert_eq!(v.remaining_visits(), Some(2));
        v.visits = 2;
        assert!(v.at_limit());
        assert_eq!(v.remaining_visits(), Some(0));
    }

    #[test]
    fn test_expired_visitor_is_invalid() {
        let now = Utc::now();
        let v = Visitor::new("fred@example.com", scope("foo"))
            .with_expiry(now - Duration::seconds(1));
        assert!(!v.is_valid(now));
    }

    #[test]
    fn test_expiry_boundary_is_exclusive() {
        let now = Utc::now();
        let v = Visitor::new("fred@example.com", scope("foo")).with_expiry(now);
        assert!(!v.is_valid(now));
        assert!(v.is_valid(now - Duration::seconds(1)));
    }

    #[test]
    fn test_deactivated_visitor_is_invalid() {
        let mut v = Visitor::new("fred@example.com", scope("foo"));
        v.is_active = false;
        assert!(!v.is_valid(Utc::now()));
    }

    proptest! {
        #[test]
        fn prop_scope_matches_iff_equal_or_wildcard(
            held in "[a-z]{1,8}",
            required in "[a-z]{1,8}",
        ) {
            let held_scope = scope(&held);
            let required_scope = scope(&required);
            prop_assert_eq!(held_scope.matches(&required_scope), held == required);
            prop_assert!(Scope::any().matches(&required_scope));
        }
    }
}
