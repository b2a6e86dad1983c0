//! Typed request context.
//!
//! Replaces dynamic attachment of the visitor onto a framework request
//! object: the upstream authentication step resolves the credential and
//! passes it here explicitly. No process-wide mutable state is involved.

use vestibule_core::{VisitDetail, Visitor};

/// Snapshot of one incoming request, with the visitor credential (if any)
/// already attached by an upstream collaborator.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// HTTP method
    pub method: String,
    /// Request path
    pub path: String,
    /// Peer address, when known
    pub remote_addr: Option<String>,
    /// The attached visitor credential, absent for anonymous requests
    pub visitor: Option<Visitor>,
}

impl RequestContext {
    /// Create a request context with no visitor attached.
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            remote_addr: None,
            visitor: None,
        }
    }

    /// Shorthand for a GET request
    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }

    /// Attach a visitor credential.
    pub fn with_visitor(mut self, visitor: Visitor) -> Self {
        self.visitor = Some(visitor);
        self
    }

    /// Set the peer address.
    pub fn with_remote_addr(mut self, addr: impl Into<String>) -> Self {
        self.remote_addr = Some(addr.into());
        self
    }

    /// The attached visitor, if any
    pub fn visitor(&self) -> Option<&Visitor> {
        self.visitor.as_ref()
    }

    /// Audit detail for this request and an observed status code.
    pub fn detail(&self, status_code: u16) -> VisitDetail {
        VisitDetail {
            method: self.method.clone(),
            path: self.path.clone(),
            remote_addr: self.remote_addr.clone(),
            status_code,
        }
    }
}
