//! The breadcrumb collector.
//!
//! The collector owns one [`Buffer`] behind a mutex and consults a
//! [`ConfigProvider`] on every add. It never caches the enabled flag, so
//! breadcrumbs can be switched on and off while the collector is shared.

use std::sync::{Mutex, MutexGuard, PoisonError};

use breadcrumbs_buffer::{Buffer, BufferStats, RingBuffer};
use breadcrumbs_foundation::{Breadcrumb, ConfigProvider, Metadata, Result, keys};

use crate::config::CollectorConfig;
use crate::format::TrailFormatter;
use crate::summary::Summary;

// =============================================================================
// Collector
// =============================================================================

/// Records breadcrumbs into a bounded buffer and hands out trails.
///
/// All methods take `&self`; share a collector between threads with `Arc`.
pub struct Collector<C, B = RingBuffer> {
    config: C,
    buffer: Mutex<B>,
}

impl<C: ConfigProvider> Collector<C, RingBuffer> {
    /// Creates a collector backed by a default-capacity ring buffer.
    #[must_use]
    pub fn new(config: C) -> Self {
        Self::with_buffer(config, RingBuffer::default())
    }
}

impl<C: ConfigProvider> Collector<C, Box<dyn Buffer>> {
    /// Creates a collector whose buffer is chosen by `options`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured capacity is zero.
    pub fn from_config(config: C, options: &CollectorConfig) -> Result<Self> {
        Ok(Self::with_buffer(config, options.build_buffer()?))
    }
}

impl<C: ConfigProvider, B: Buffer> Collector<C, B> {
    /// Creates a collector around an existing buffer.
    ///
    /// Does not read the enabled flag.
    #[must_use]
    pub fn with_buffer(config: C, buffer: B) -> Self {
        Self {
            config,
            buffer: Mutex::new(buffer),
        }
    }

    /// Locks the buffer.
    ///
    /// Every buffer mutation leaves it consistent before returning, so a
    /// panic while holding the lock cannot leave a half-applied add behind.
    fn buffer(&self) -> MutexGuard<'_, B> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the configuration provider.
    #[must_use]
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Reads `breadcrumbs.enabled` from the configuration provider.
    ///
    /// Any failure to read a boolean counts as disabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        match self.config.lookup_bool(keys::BREADCRUMBS_ENABLED) {
            Ok(enabled) => enabled,
            Err(error) => {
                tracing::warn!(
                    key = keys::BREADCRUMBS_ENABLED,
                    %error,
                    "could not read breadcrumbs flag; not recording"
                );
                false
            }
        }
    }

    /// Adds a breadcrumb if breadcrumbs are enabled right now.
    ///
    /// When disabled the breadcrumb is dropped silently. Returns the
    /// collector either way so calls can be chained.
    pub fn add(&self, breadcrumb: Breadcrumb) -> &Self {
        if !self.is_enabled() {
            tracing::trace!(category = breadcrumb.category(), "breadcrumbs disabled; skipped");
            return self;
        }

        self.buffer().add(breadcrumb);
        self
    }

    /// Builds and adds a breadcrumb in one call.
    pub fn record(
        &self,
        message: impl Into<String>,
        category: impl Into<String>,
        metadata: Metadata,
    ) -> &Self {
        self.add(
            Breadcrumb::builder(message)
                .category(category)
                .metadata(metadata)
                .build(),
        )
    }

    /// Removes every breadcrumb, whether or not breadcrumbs are enabled.
    pub fn clear(&self) {
        let mut buffer = self.buffer();
        tracing::debug!(discarded = buffer.len(), "breadcrumbs cleared");
        buffer.clear();
    }

    /// Iterates every breadcrumb, active or not, oldest first.
    ///
    /// The iterator walks a snapshot taken when this is called; later adds
    /// are not visible to it.
    pub fn each(&self) -> std::vec::IntoIter<Breadcrumb> {
        self.to_vec().into_iter()
    }

    /// Copies every breadcrumb, active or not, oldest first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Breadcrumb> {
        self.buffer().to_vec()
    }

    /// Copies the active breadcrumbs, oldest first.
    ///
    /// This is what gets attached to an error report.
    #[must_use]
    pub fn trail(&self) -> Vec<Breadcrumb> {
        self.buffer()
            .iter()
            .filter(|crumb| crumb.is_active())
            .cloned()
            .collect()
    }

    /// Captures the enabled flag and the trail for an error report.
    #[must_use]
    pub fn to_summary(&self) -> Summary {
        Summary::new(self.is_enabled(), self.trail())
    }

    /// Formats the trail with the given formatter.
    #[must_use]
    pub fn format_trail<F: TrailFormatter>(&self, formatter: &F) -> String {
        formatter.format_many(&self.trail())
    }

    /// Returns a copy of the most recently added breadcrumb.
    #[must_use]
    pub fn previous(&self) -> Option<Breadcrumb> {
        self.buffer().previous().cloned()
    }

    /// Drops the most recent breadcrumb if `predicate` accepts it.
    ///
    /// Used to collapse repeated events: check the previous breadcrumb
    /// against the one about to be added. Not gated by the enabled flag.
    pub fn drop_previous_if<P>(&self, predicate: P) -> Option<Breadcrumb>
    where
        P: FnOnce(&Breadcrumb) -> bool,
    {
        let mut buffer = self.buffer();
        if buffer.previous().is_some_and(predicate) {
            buffer.drop_previous()
        } else {
            None
        }
    }

    /// Marks every stored breadcrumb matching `predicate` as ignored.
    ///
    /// Ignored breadcrumbs stay in [`to_vec`](Self::to_vec) but leave the
    /// trail. Returns how many were newly ignored.
    pub fn ignore_where<P>(&self, mut predicate: P) -> usize
    where
        P: FnMut(&Breadcrumb) -> bool,
    {
        let mut ignored = 0;
        self.buffer().for_each_mut(&mut |crumb: &mut Breadcrumb| {
            if crumb.is_active() && predicate(crumb) {
                crumb.ignore();
                ignored += 1;
            }
        });
        ignored
    }

    /// Number of breadcrumbs held, active or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Returns true if nothing is held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Maximum number of breadcrumbs held.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer().capacity()
    }

    /// Returns buffer statistics.
    #[must_use]
    pub fn stats(&self) -> BufferStats {
        self.buffer().stats()
    }
}

impl<C: ConfigProvider, B: Buffer> IntoIterator for &Collector<C, B> {
    type Item = Breadcrumb;
    type IntoIter = std::vec::IntoIter<Breadcrumb>;

    fn into_iter(self) -> Self::IntoIter {
        self.each()
    }
}

impl<C, B: Buffer> std::fmt::Debug for Collector<C, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let buffer = self.buffer.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Collector")
            .field("len", &buffer.len())
            .field("capacity", &buffer.capacity())
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
