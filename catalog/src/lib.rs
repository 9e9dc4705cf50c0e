//! Course and career-pathway catalog.
//!
//! A fixed dataset of courses and pathways is loaded once, validated, and
//! queried read-only. The architecture keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (queries, filters, invariants,
//!   view state). No I/O, fully testable in isolation.
//! - **[`io`]**: Side-effecting operations (config and dataset files).
//!
//! [`browse`] and [`render`] turn core results into the listings and detail
//! panels printed by the `catalog` binary.

pub mod browse;
pub mod core;
pub mod dataset;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod render;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
