//! Fixed-slot ring buffer, the default breadcrumb storage.
//!
//! Storage is allocated once at construction. A logical start offset marks
//! the oldest slot; when the buffer is full, `add` overwrites that slot and
//! advances the offset by one.

use breadcrumbs_foundation::{Breadcrumb, Error, Result};

use crate::traits::Buffer;

/// Capacity used when none is given.
pub const DEFAULT_CAPACITY: usize = 40;

// =============================================================================
// Ring Buffer
// =============================================================================

/// A ring buffer of breadcrumbs.
///
/// Holds at most `capacity` breadcrumbs, discarding the oldest when full.
#[derive(Clone, Debug)]
pub struct RingBuffer {
    /// Slot storage; exactly `len` slots starting at `start` are occupied.
    slots: Vec<Option<Breadcrumb>>,
    /// Index of the oldest breadcrumb.
    start: usize,
    /// Number of occupied slots.
    len: usize,
    /// Breadcrumbs overwritten since construction.
    evicted: u64,
}

impl RingBuffer {
    /// Creates a ring buffer holding at most `capacity` breadcrumbs.
    ///
    /// # Errors
    ///
    /// Returns an error if `capacity` is zero or its slots cannot be
    /// allocated.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::invalid_capacity(capacity).with_context("capacity must be at least 1"));
        }
        let mut slots: Vec<Option<Breadcrumb>> = Vec::new();
        slots.try_reserve_exact(capacity).map_err(|e| {
            Error::invalid_capacity(capacity).with_context(format!("cannot allocate ring storage: {e}"))
        })?;
        slots.resize(capacity, None);
        Ok(Self::with_slots(slots))
    }

    fn with_slots(slots: Vec<Option<Breadcrumb>>) -> Self {
        Self {
            slots,
            start: 0,
            len: 0,
            evicted: 0,
        }
    }

    /// Physical slot index of the `offset`-th oldest breadcrumb.
    #[inline]
    fn slot(&self, offset: usize) -> usize {
        (self.start + offset) % self.slots.len()
    }
}

impl Default for RingBuffer {
    fn default() -> Self {
        Self::with_slots(vec![None; DEFAULT_CAPACITY])
    }
}

impl Buffer for RingBuffer {
    fn add(&mut self, breadcrumb: Breadcrumb) {
        let capacity = self.slots.len();
        if self.len < capacity {
            let idx = self.slot(self.len);
            self.slots[idx] = Some(breadcrumb);
            self.len += 1;
        } else {
            // Full: the oldest slot is the one we write next.
            self.slots[self.start] = Some(breadcrumb);
            self.start = (self.start + 1) % capacity;
            self.evicted += 1;
            tracing::trace!(
                capacity,
                evicted = self.evicted,
                "ring buffer evicted oldest breadcrumb"
            );
        }
    }

    fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.start = 0;
        self.len = 0;
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Breadcrumb> + '_> {
        Box::new((0..self.len).filter_map(move |i| self.slots[self.slot(i)].as_ref()))
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn len(&self) -> usize {
        self.len
    }

    fn evicted(&self) -> u64 {
        self.evicted
    }

    fn previous(&self) -> Option<&Breadcrumb> {
        let last = self.len.checked_sub(1)?;
        self.slots[self.slot(last)].as_ref()
    }

    fn drop_previous(&mut self) -> Option<Breadcrumb> {
        let last = self.len.checked_sub(1)?;
        let idx = self.slot(last);
        self.len = last;
        if self.len == 0 {
            self.start = 0;
        }
        self.slots[idx].take()
    }

    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Breadcrumb)) {
        for i in 0..self.len {
            let idx = self.slot(i);
            if let Some(crumb) = self.slots[idx].as_mut() {
                f(crumb);
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
