//! Core types for breadcrumb trails.
//!
//! This crate provides:
//! - [`Breadcrumb`] - A single timestamped diagnostic event
//! - [`Metadata`] - Persistent ordered metadata attached to a breadcrumb
//! - [`ConfigProvider`] - Read-only configuration lookups, with [`Config`]
//! - [`Error`] - Error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod breadcrumb;
pub mod config;
pub mod error;
pub mod metadata;

pub use breadcrumb::{Breadcrumb, BreadcrumbBuilder, DEFAULT_CATEGORY};
pub use config::{Config, ConfigProvider, ConfigValue, FnConfig, keys};
pub use error::{Error, ErrorKind, Result};
pub use metadata::Metadata;
