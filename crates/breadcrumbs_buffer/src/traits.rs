//! The storage capability every breadcrumb buffer provides.

use breadcrumbs_foundation::Breadcrumb;

use crate::stats::BufferStats;

/// Bounded, insertion-ordered breadcrumb storage.
///
/// # Implementation Requirements
///
/// Implementations must:
/// 1. Never hold more than [`capacity`](Buffer::capacity) breadcrumbs
/// 2. Evict exactly the oldest breadcrumb when adding to a full buffer
/// 3. Iterate oldest first
///
/// A full buffer is not an error; eviction is the normal path.
///
/// The trait is object safe, so strategies can be picked at runtime with
/// `Box<dyn Buffer>`.
pub trait Buffer: Send {
    /// Appends a breadcrumb, evicting the oldest one first if full.
    fn add(&mut self, breadcrumb: Breadcrumb);

    /// Removes every breadcrumb. Capacity is unchanged.
    fn clear(&mut self);

    /// Iterates the stored breadcrumbs, oldest first.
    fn iter(&self) -> Box<dyn Iterator<Item = &Breadcrumb> + '_>;

    /// Copies the stored breadcrumbs out, oldest first.
    ///
    /// The result is independent of later mutation of the buffer.
    fn to_vec(&self) -> Vec<Breadcrumb> {
        self.iter().cloned().collect()
    }

    /// Maximum number of breadcrumbs held at once.
    fn capacity(&self) -> usize;

    /// Number of breadcrumbs currently held.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of breadcrumbs evicted since construction.
    ///
    /// `clear` does not count as eviction and does not reset this.
    fn evicted(&self) -> u64;

    /// The most recently added breadcrumb.
    fn previous(&self) -> Option<&Breadcrumb>;

    /// Removes and returns the most recently added breadcrumb.
    fn drop_previous(&mut self) -> Option<Breadcrumb>;

    /// Visits every stored breadcrumb mutably, oldest first.
    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Breadcrumb));

    /// Returns statistics about the current contents.
    fn stats(&self) -> BufferStats {
        BufferStats::collect(self)
    }
}

impl<B: Buffer + ?Sized> Buffer for Box<B> {
    fn add(&mut self, breadcrumb: Breadcrumb) {
        (**self).add(breadcrumb);
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &Breadcrumb> + '_> {
        (**self).iter()
    }

    fn to_vec(&self) -> Vec<Breadcrumb> {
        (**self).to_vec()
    }

    fn capacity(&self) -> usize {
        (**self).capacity()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn evicted(&self) -> u64 {
        (**self).evicted()
    }

    fn previous(&self) -> Option<&Breadcrumb> {
        (**self).previous()
    }

    fn drop_previous(&mut self) -> Option<Breadcrumb> {
        (**self).drop_previous()
    }

    fn for_each_mut(&mut self, f: &mut dyn FnMut(&mut Breadcrumb)) {
        (**self).for_each_mut(f);
    }

    fn stats(&self) -> BufferStats {
        (**self).stats()
    }
}
