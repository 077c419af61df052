//! Breadcrumbs - bounded diagnostic trails for error reports
//!
//! This crate re-exports all layers of the breadcrumbs system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: breadcrumbs_collector  - Collector, summaries, encoders, formatters
//! Layer 1: breadcrumbs_buffer     - Buffer trait, ring and deque strategies
//! Layer 0: breadcrumbs_foundation - Breadcrumb, Metadata, Config, Error
//! ```

pub use breadcrumbs_buffer as buffer;
pub use breadcrumbs_collector as collector;
pub use breadcrumbs_foundation as foundation;

pub use breadcrumbs_buffer::{Buffer, DequeBuffer, RingBuffer};
pub use breadcrumbs_collector::{Collector, Summary};
pub use breadcrumbs_foundation::{Breadcrumb, Config, ConfigProvider, Metadata};
