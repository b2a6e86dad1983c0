//! The access guard.

use std::future::Future;
use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use vestibule_core::{
    AuditLogEffects, Scope, VestibuleError, VestibuleResult, VisitAdmission, VisitorStoreEffects,
};

use crate::decision::{evaluate, DenialReason};
use crate::request::RequestContext;
use crate::response::ResponseStatus;

/// Caller-supplied override that can force admission independent of
/// visitor and scope state.
pub type BypassPredicate = Arc<dyn Fn(&RequestContext) -> bool + Send + Sync>;

/// Request-scoped authorization check wrapping a protected operation.
///
/// Parameterized by the required scope, an optional bypass predicate, and
/// an audit toggle. The wrapped handler runs only on final admission; any
/// failed check short-circuits with a denial first.
///
/// ```
/// # use std::sync::Arc;
/// # use vestibule_core::{Scope, Visitor};
/// # use vestibule_guard::{AccessGuard, PlainResponse, RequestContext};
/// # use vestibule_store::MemoryVisitorStore;
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> vestibule_core::VestibuleResult<()> {
/// let store = Arc::new(MemoryVisitorStore::new());
/// let visitor = Visitor::new("fred@example.com", Scope::new("reports")?);
/// store.insert_visitor(visitor.clone());
///
/// let guard = AccessGuard::new(Scope::new("reports")?, store);
/// let request = RequestContext::get("/reports/weekly").with_visitor(visitor);
/// let response = guard
///     .invoke(&request, |_req| async { PlainResponse::ok("OK") })
///     .await?;
/// assert_eq!(response.status, 200);
/// # Ok(())
/// # }
/// ```
pub struct AccessGuard<S> {
    scope: Scope,
    bypass: Option<BypassPredicate>,
    log_visit: bool,
    store: Arc<S>,
}

impl<S> AccessGuard<S>
where
    S: VisitorStoreEffects + AuditLogEffects,
{
    /// Create a guard for the given required scope. Audit logging defaults
    /// to on; no bypass predicate is set.
    pub fn new(scope: Scope, store: Arc<S>) -> Self {
        Self {
            scope,
            bypass: None,
            log_visit: true,
            store,
        }
    }

    /// Attach a bypass predicate. When it returns true for a request, the
    /// request is admitted immediately: no visitor needs to be present, no
    /// scope is checked, and the visit counter is not advanced.
    pub fn with_bypass<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&RequestContext) -> bool + Send + Sync + 'static,
    {
        self.bypass = Some(Arc::new(predicate));
        self
    }

    /// Enable or disable audit logging for this guard.
    pub fn with_logging(mut self, log_visit: bool) -> Self {
        self.log_visit = log_visit;
        self
    }

    /// The required scope
    pub fn scope(&self) -> &Scope {
        &self.scope
    }

    /// Run the protected operation if the request is admitted.
    ///
    /// The decision sequence: bypass predicate first (admits outright),
    /// then visitor presence and validity, then scope match, then the
    /// store's atomic limit-check-and-increment. On admission the handler
    /// runs, the outcome is audited (unless logging is off), and its
    /// response is returned unchanged. Denial surfaces as
    /// [`VestibuleError::AccessDenied`]; store failures propagate as
    /// [`VestibuleError::Storage`] and are never treated as either outcome.
    ///
    /// No lock is held across the handler; only the counter increment is
    /// serialized, inside the store.
    pub async fn invoke<'a, F, Fut, R>(
        &self,
        request: &'a RequestContext,
        handler: F,
    ) -> VestibuleResult<R>
    where
        F: FnOnce(&'a RequestContext) -> Fut,
        Fut: Future<Output = R>,
        R: ResponseStatus,
    {
        if let Some(bypass) = &self.bypass {
            if bypass(request) {
                debug!(scope = %self.scope, path = %request.path, "bypass predicate admitted request");
                let response = handler(request).await;
                // Bypass skips the counter but not the logging path; an
                // entry needs a visitor to reference, so anonymous bypass
                // admissions go unaudited.
                if self.log_visit {
                    if let Some(visitor) = request.visitor() {
                        self.store
                            .record_visit(
                                &visitor.id,
                                &self.scope,
                                request.detail(response.status_code()),
                            )
                            .await?;
                    }
                }
                return Ok(response);
            }
        }

        let visitor = match evaluate(&self.scope, request.visitor(), Utc::now()) {
            Ok(visitor) => visitor,
            Err(reason) => return Err(self.deny(request, reason)),
        };

        match self.store.admit_visit(&visitor.id).await? {
            VisitAdmission::LimitReached => Err(self.deny(request, DenialReason::LimitReached)),
            VisitAdmission::Admitted { visits } => {
                debug!(
                    visitor = %visitor.id,
                    scope = %self.scope,
                    path = %request.path,
                    visits,
                    "request admitted"
                );
                let response = handler(request).await;
                if self.log_visit {
                    self.store
                        .record_visit(
                            &visitor.id,
                            &self.scope,
                            request.detail(response.status_code()),
                        )
                        .await?;
                }
                Ok(response)
            }
        }
    }

    fn deny(&self, request: &RequestContext, reason: DenialReason) -> VestibuleError {
        debug!(
            scope = %self.scope,
            path = %request.path,
            %reason,
            "request denied"
        );
        VestibuleError::access_denied(reason.to_string())
    }
}
