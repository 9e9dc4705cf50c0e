//! Deterministic, pure logic shared by the catalog.
//!
//! Core modules must be free of I/O side effects. They operate on the
//! in-memory dataset and return deterministic outputs suitable for tests.

pub mod filter;
pub mod invariants;
pub mod query;
pub mod types;
pub mod view;
