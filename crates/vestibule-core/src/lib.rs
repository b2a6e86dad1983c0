//! Vestibule Core - Visitor Credential Foundation
//!
//! This crate provides the foundational types and effect interfaces for the
//! visitor authorization system: the `Visitor` credential model, the
//! append-only `VisitorLog` audit record, scope matching, the unified error
//! type, and the pure trait seams behind which persistence lives.
//!
//! # Architecture
//!
//! ```text
//! vestibule-core   (Visitor, Scope, VisitorLog, errors, effect traits)
//!       ↑
//! vestibule-guard  (AccessGuard: decision + admission path)
//!       ↑
//! vestibule-store  (MemoryVisitorStore: effect trait implementations)
//! ```
//!
//! # Design Principles
//!
//! - **Trait definitions here, implementations in consumers** -
//!   `vestibule-store` provides the in-memory reference backend
//! - **No I/O in this crate** - everything is pure data and signatures
//! - **One denial kind** - every authorization failure surfaces as
//!   [`VestibuleError::AccessDenied`] with no sub-code, so callers cannot
//!   learn which check failed

/// Unified error handling
pub mod errors;

/// Pure effect interfaces (no implementations)
pub mod effects;

/// Visitor identifiers
pub mod identifiers;

/// Audit log entries
pub mod log;

/// The visitor credential and its scope
pub mod visitor;

pub use effects::{AuditLogEffects, VisitAdmission, VisitDetail, VisitorStoreEffects};
pub use errors::{VestibuleError, VestibuleResult};
pub use identifiers::VisitorId;
pub use log::VisitorLog;
pub use visitor::{Scope, Visitor};
