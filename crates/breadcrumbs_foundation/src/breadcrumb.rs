//! The breadcrumb record.
//!
//! A breadcrumb is immutable once built except for its `active` flag, which
//! can only go from active to inactive.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::metadata::Metadata;

/// Category assigned when the caller does not pick one.
pub const DEFAULT_CATEGORY: &str = "custom";

// =============================================================================
// Breadcrumb
// =============================================================================

/// A single timestamped diagnostic event.
///
/// Field order here is the serialized field order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    message: String,
    category: String,
    #[serde(default)]
    metadata: Metadata,
    timestamp: DateTime<Utc>,
    #[serde(default = "default_active")]
    active: bool,
}

fn default_active() -> bool {
    true
}

impl Breadcrumb {
    /// Creates an active breadcrumb in the default category, stamped now.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self::builder(message).build()
    }

    /// Starts building a breadcrumb with the given message.
    #[must_use]
    pub fn builder(message: impl Into<String>) -> BreadcrumbBuilder {
        BreadcrumbBuilder::new(message)
    }

    /// Returns the message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the metadata.
    #[must_use]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Returns when the breadcrumb was created.
    #[must_use]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Returns true if the breadcrumb belongs in the trail.
    #[must_use]
    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Excludes this breadcrumb from future trails without deleting it.
    ///
    /// There is no way back; an ignored breadcrumb stays ignored.
    pub fn ignore(&mut self) {
        self.active = false;
    }
}

impl fmt::Display for Breadcrumb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.message)
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for [`Breadcrumb`].
#[derive(Clone, Debug)]
pub struct BreadcrumbBuilder {
    message: String,
    category: String,
    metadata: Metadata,
    timestamp: Option<DateTime<Utc>>,
}

impl BreadcrumbBuilder {
    /// Creates a builder for the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: DEFAULT_CATEGORY.to_string(),
            metadata: Metadata::new(),
            timestamp: None,
        }
    }

    /// Builder method to set the category.
    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Builder method to replace the metadata.
    #[must_use]
    pub fn metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Builder method to add a single metadata entry.
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata = self.metadata.insert(key, value);
        self
    }

    /// Builder method to pin the timestamp instead of using the current time.
    #[must_use]
    pub fn timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// Builds the breadcrumb. It starts out active.
    #[must_use]
    pub fn build(self) -> Breadcrumb {
        Breadcrumb {
            message: self.message,
            category: self.category,
            metadata: self.metadata,
            timestamp: self.timestamp.unwrap_or_else(Utc::now),
            active: true,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
