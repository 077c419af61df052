//! Integration tests for Layer 2: Collector
//!
//! Tests the enabled gate, trail filtering, summaries, and encoders.

mod collector;
mod properties;
mod summary;
