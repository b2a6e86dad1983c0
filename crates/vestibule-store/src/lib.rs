//! # Vestibule Store - In-Memory Reference Backend
//!
//! Implements the `vestibule-core` effect traits over process-local state.
//! Used by the guard's integration tests and as the template for real
//! backends: the one property a backend must preserve is that
//! `admit_visit` performs its limit-check-and-increment at a single
//! serialization point.

pub mod memory;

pub use memory::MemoryVisitorStore;
