//! Audit log entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::identifiers::VisitorId;
use crate::visitor::Scope;

/// One admitted access, immutable once created.
///
/// Entries are append-only children of the audit store: they reference the
/// visitor that made the request but do not own it, and this core never
/// updates or deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorLog {
    /// Entry identifier
    pub id: Uuid,
    /// The visitor that made the request
    pub visitor_id: VisitorId,
    /// The scope that was checked for this entry
    pub scope: Scope,
    /// HTTP method of the request
    pub method: String,
    /// Request path
    pub path: String,
    /// Peer address, when known
    pub remote_addr: Option<String>,
    /// Outcome of the protected operation as observed after invocation
    pub status_code: u16,
    /// Creation time
    pub recorded_at: DateTime<Utc>,
}

impl VisitorLog {
    /// Create an entry stamped with the current time.
    pub fn new(
        visitor_id: VisitorId,
        scope: Scope,
        method: impl Into<String>,
        path: impl Into<String>,
        remote_addr: Option<String>,
        status_code: u16,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            visitor_id,
            scope,
            method: method.into(),
            path: path.into(),
            remote_addr,
            status_code,
            recorded_at: Utc::now(),
        }
    }
}
