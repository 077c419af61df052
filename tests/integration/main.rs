//! Cross-layer integration tests for breadcrumbs
//!
//! Tests that verify correct interaction between multiple crates.

mod concurrency;
