//! Effect trait definitions for visitor persistence and auditing.
//!
//! These traits are the seam between the authorization decision and its
//! collaborators. The traits themselves are pure signatures; state lives
//! behind the implementations (`vestibule-store` provides the in-memory
//! reference backend, a database-backed one plugs in the same way).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::VestibuleResult;
use crate::identifiers::VisitorId;
use crate::log::VisitorLog;
use crate::visitor::{Scope, Visitor};

/// Outcome of an atomic admission attempt against persisted state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitAdmission {
    /// The counter was incremented; `visits` is the post-increment value.
    Admitted {
        /// Counter value after this admission
        visits: u32,
    },
    /// The counter already stood at or above `max_visits`. Nothing was
    /// incremented.
    LimitReached,
}

impl VisitAdmission {
    /// Whether the attempt was admitted
    pub fn is_admitted(&self) -> bool {
        matches!(self, Self::Admitted { .. })
    }
}

/// Request details captured alongside an audit entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitDetail {
    /// HTTP method of the request
    pub method: String,
    /// Request path
    pub path: String,
    /// Peer address, when known
    pub remote_addr: Option<String>,
    /// Status code returned by the protected operation
    pub status_code: u16,
}

/// Effect trait for reading and atomically advancing visitor state.
///
/// `admit_visit` is the serialization point the usage-limit invariant
/// depends on: the read-check-increment must be linearizable with respect
/// to concurrent calls for the same visitor. A limit of N admits exactly N
/// calls total under any interleaving; there is no window in which two
/// callers can both observe `visits < max` and both increment.
#[async_trait]
pub trait VisitorStoreEffects: Send + Sync {
    /// Load a visitor by id, `None` when unknown.
    async fn load_visitor(&self, id: &VisitorId) -> VestibuleResult<Option<Visitor>>;

    /// Atomically check the usage limit and increment the visit counter.
    ///
    /// Returns [`VisitAdmission::LimitReached`] without incrementing when
    /// the persisted counter already stands at the cap. An unknown id is a
    /// `Storage` error, not a denial: the credential vanished between
    /// request attachment and admission.
    async fn admit_visit(&self, id: &VisitorId) -> VestibuleResult<VisitAdmission>;
}

/// Effect trait for appending audit entries.
#[async_trait]
pub trait AuditLogEffects: Send + Sync {
    /// Append one immutable entry for an admitted access.
    async fn record_visit(
        &self,
        visitor_id: &VisitorId,
        scope: &Scope,
        detail: VisitDetail,
    ) -> VestibuleResult<VisitorLog>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admission_predicate() {
        assert!(VisitAdmission::Admitted { visits: 1 }.is_admitted());
        assert!(!VisitAdmission::LimitReached.is_admitted());
    }
}
