//! The payload attached to outgoing error reports.

use serde::{Deserialize, Serialize};

use breadcrumbs_foundation::Breadcrumb;

/// Snapshot of the collector at report time.
///
/// Serializes as `{"enabled": bool, "trail": [...]}`. The trail holds only
/// active breadcrumbs, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// Whether breadcrumbs were enabled when the summary was taken.
    pub enabled: bool,
    /// Active breadcrumbs, oldest first.
    pub trail: Vec<Breadcrumb>,
}

impl Summary {
    /// Creates a summary.
    #[must_use]
    pub fn new(enabled: bool, trail: Vec<Breadcrumb>) -> Self {
        Self { enabled, trail }
    }

    /// Number of breadcrumbs in the trail.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trail.len()
    }

    /// Returns true if the trail is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trail.is_empty()
    }
}
