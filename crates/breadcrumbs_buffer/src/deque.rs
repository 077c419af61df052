//! Append-then-truncate breadcrumb storage.
//!
//! Grows a deque on demand and trims from the front whenever it goes over
//! capacity. Memory is only used for breadcrumbs actually recorded, which
//! suits large capacities that are rarely filled.

use std::collections::VecDeque;

use breadcrumbs_foundation::{Breadcrumb, Error, Result};

use crate::traits::Buffer;

/// A growable, bounded breadcrumb buffer.
#[derive(Clone, Debug)]
pub struct DequeBuffer {
    /// The breadcrumbs, oldest first.
    records: VecDeque<Breadcrumb>,
    /// Maximum number of breadcrumbs to store.
    max_size: usize,
    /// Breadcrumbs evicted since construction.
    evicted: u64,
}

impl DequeBuffer {
    /// Creates a buffer holding at most `max_size` breadcrumbs.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_size` is zero.
    pub fn new(max_size: usize) -> Result<Self> {
        if max_size == 0 {
            return Err(Error::invalid_capacity(max_size).with_context("capacity must be at least 1"));
        }
        Ok(Self {
            records: VecDeque::with_capacity(max_size.min(1024)),
            max_size,
            evicted: 0,
        })
    }
}

impl Buffer for DequeBuffer {
    fn add(&mut self, breadcrumb: Breadcrumb) {
        self.records.push_back(breadcrumb);

        while self.records.len() > self.max_size {
            self.records.pop_front();
            self.evicted += 1;
            tracing::trace!(
                capacity = self.max_size,
                evicted = self.evicted,
                "deque buffer evicted oldest breadcrumb"
            );
        }
    }

    fn clear(&mut self) {
        self.records.clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Breadcrumb> + '_> {
        Box::new(self.records.iter())
    }

    fn to_vec(&self) -> Vec<Breadcrumb> {
        self.records.iter().cloned().collect()
    }

    fn capacity(&self) -> usize {
        self.max_size
    }

    fn len(&self) -> usize {
        self.records.len()
    }

    fn evicted(&self) -> u64 {
        self.evicted
    }

    fn previous(&self) -> Option<&Breadcrumb> {
        self.records.back()
    }

    fn drop_previous(&mut self) -> Option<Breadcrumb> {
        self.records.pop_back()
    }

    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Breadcrumb)) {
        self.records.iter_mut().for_each(f);
    }
}
