//! Storage implementations for the Knot URL shortener.
//!
//! Currently provides an in-memory reference implementation of the
//! [`Repository`](knot_core::Repository) contract, suitable for tests and
//! single-process deployments.

pub mod memory;

pub use memory::InMemoryRepository;
