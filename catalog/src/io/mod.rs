//! I/O helpers for catalog commands.

pub mod config;
pub mod dataset_store;
