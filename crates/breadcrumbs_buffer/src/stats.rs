//! Buffer statistics.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::traits::Buffer;

/// Statistics about a breadcrumb buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BufferStats {
    /// Number of breadcrumbs currently held.
    pub len: usize,
    /// Maximum buffer size.
    pub capacity: usize,
    /// Breadcrumbs evicted since construction.
    pub evicted: u64,
    /// How many held breadcrumbs are still active.
    pub active: usize,
    /// Timestamp of the oldest breadcrumb.
    pub oldest: Option<DateTime<Utc>>,
    /// Timestamp of the newest breadcrumb.
    pub newest: Option<DateTime<Utc>>,
    /// Count of each category.
    pub category_counts: HashMap<String, usize>,
}

impl BufferStats {
    /// Gathers statistics from any buffer.
    #[must_use]
    pub fn collect<B: Buffer + ?Sized>(buffer: &B) -> Self {
        let mut category_counts = HashMap::new();
        let mut active = 0;
        let mut oldest = None;
        let mut newest = None;

        for crumb in buffer.iter() {
            *category_counts
                .entry(crumb.category().to_string())
                .or_insert(0) += 1;
            if crumb.is_active() {
                active += 1;
            }
            if oldest.is_none() {
                oldest = Some(crumb.timestamp());
            }
            newest = Some(crumb.timestamp());
        }

        Self {
            len: buffer.len(),
            capacity: buffer.capacity(),
            evicted: buffer.evicted(),
            active,
            oldest,
            newest,
            category_counts,
        }
    }

    /// Returns true if the buffer was at capacity when sampled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len >= self.capacity
    }
}
