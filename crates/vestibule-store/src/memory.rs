//! In-memory visitor store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use vestibule_core::{
    AuditLogEffects, Scope, VestibuleError, VestibuleResult, VisitAdmission, VisitDetail, Visitor,
    VisitorId, VisitorLog, VisitorStoreEffects,
};

#[derive(Debug, Default)]
struct StoreInner {
    visitors: HashMap<VisitorId, Visitor>,
    logs: Vec<VisitorLog>,
}

/// Process-local visitor store.
///
/// The mutex is the linearization point for `admit_visit`: the limit check
/// and the counter increment happen inside one critical section, so a
/// limit of N admits exactly N concurrent requests for the same visitor.
/// The lock is never held across an await point.
#[derive(Debug, Clone, Default)]
pub struct MemoryVisitorStore {
    inner: Arc<Mutex<StoreInner>>,
}

impl MemoryVisitorStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a visitor record.
    pub fn insert_visitor(&self, visitor: Visitor) {
        self.inner.lock().visitors.insert(visitor.id, visitor);
    }

    /// Deactivate a visitor; subsequent requests are denied as if the
    /// credential were absent. Unknown ids are ignored.
    pub fn deactivate(&self, id: &VisitorId) {
        if let Some(visitor) = self.inner.lock().visitors.get_mut(id) {
            visitor.is_active = false;
        }
    }

    /// Current state of a visitor record, `None` when unknown.
    pub fn visitor(&self, id: &VisitorId) -> Option<Visitor> {
        self.inner.lock().visitors.get(id).cloned()
    }

    /// Snapshot of all audit entries, in append order.
    pub fn logs(&self) -> Vec<VisitorLog> {
        self.inner.lock().logs.clone()
    }

    /// Number of audit entries.
    pub fn log_count(&self) -> usize {
        self.inner.lock().logs.len()
    }
}

#[async_trait]
impl VisitorStoreEffects for MemoryVisitorStore {
    async fn load_visitor(&self, id: &VisitorId) -> VestibuleResult<Option<Visitor>> {
        Ok(self.inner.lock().visitors.get(id).cloned())
    }

    async fn admit_visit(&self, id: &VisitorId) -> VestibuleResult<VisitAdmission> {
        let mut inner = self.inner.lock();
        let visitor = inner
            .visitors
            .get_mut(id)
            .ok_or_else(|| VestibuleError::storage(format!("unknown visitor {id}")))?;
        if visitor.at_limit() {
            return Ok(VisitAdmission::LimitReached);
        }
        visitor.visits = visitor.visits.saturating_add(1);
        Ok(VisitAdmission::Admitted {
            visits: visitor.visits,
        })
    }
}

#[async_trait]
impl AuditLogEffects for MemoryVisitorStore {
    async fn record_visit(
        &self,
        visitor_id: &VisitorId,
        scope: &Scope,
        detail: VisitDetail,
    ) -> VestibuleResult<VisitorLog> {
        let entry = VisitorLog::new(
            *visitor_id,
            scope.clone(),
            detail.method,
            detail.path,
            detail.remote_addr,
            detail.status_code,
        );
        self.inner.lock().logs.push(entry.clone());
        Ok(entry)
    }
}
