//! # Vestibule Guard - Request-Scoped Access Control
//!
//! The [`AccessGuard`] wraps a protected request handler. Before invoking
//! it, the guard resolves the visitor credential attached to the request,
//! validates scope match, evaluates an optional bypass predicate, and
//! enforces the usage limit through the store's atomic admission call. Only
//! on final admission does the protected handler run, after which the
//! outcome is audited.
//!
//! # Architecture
//!
//! Guard evaluation is pure and synchronous over the request snapshot.
//! Effects (counter increment, handler invocation, audit append) happen
//! after the decision, behind the `vestibule-core` effect traits.
//!
//! ```text
//! ┌──────────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │  RequestContext  │ --> │  evaluate()     │ --> │  admit_visit +   │
//! │  (visitor        │     │  (pure, sync)   │     │  handler + audit │
//! │   attached)      │     │                 │     │  (async)         │
//! └──────────────────┘     └─────────────────┘     └──────────────────┘
//! ```

pub mod decision;
pub mod guard;
pub mod request;
pub mod response;

pub use decision::{evaluate, DenialReason};
pub use guard::{AccessGuard, BypassPredicate};
pub use request::RequestContext;
pub use response::{PlainResponse, ResponseStatus};
