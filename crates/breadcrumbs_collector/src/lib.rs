//! Breadcrumb collector for error reports.
//!
//! The [`Collector`] is what instrumentation talks to: it records
//! breadcrumbs while `breadcrumbs.enabled` is on, and hands the error
//! pipeline either the active [`trail`](Collector::trail) or a serializable
//! [`Summary`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use breadcrumbs_collector::{Collector, encode};
//! use breadcrumbs_foundation::{Breadcrumb, Config};
//!
//! let config = Arc::new(Config::default());
//! let collector = Collector::new(Arc::clone(&config));
//!
//! collector
//!     .add(Breadcrumb::builder("login").category("auth").build())
//!     .add(Breadcrumb::builder("click").category("ui").build());
//!
//! collector.ignore_where(|c| c.category() == "auth");
//!
//! let summary = collector.to_summary();
//! assert!(summary.enabled);
//! assert_eq!(summary.trail.len(), 1);
//!
//! let json = encode::to_json(&summary).unwrap();
//! assert!(json.starts_with("{\"enabled\":true,\"trail\":["));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collector;
pub mod config;
pub mod encode;
pub mod format;
pub mod summary;

pub use collector::Collector;
pub use config::{BufferStrategy, CollectorConfig};
pub use format::{HumanFormatter, JsonFormatter, TrailFormatter};
pub use summary::Summary;
