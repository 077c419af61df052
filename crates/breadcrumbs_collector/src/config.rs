//! Construction options for a collector.

use breadcrumbs_buffer::{Buffer, DEFAULT_CAPACITY, DequeBuffer, RingBuffer};
use breadcrumbs_foundation::Result;

/// Which storage strategy backs the collector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BufferStrategy {
    /// Fixed slots allocated up front.
    #[default]
    Ring,
    /// Grows on demand, truncated from the front.
    Deque,
}

impl std::fmt::Display for BufferStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ring => write!(f, "ring"),
            Self::Deque => write!(f, "deque"),
        }
    }
}

/// Options for building a collector's buffer.
///
/// Whether breadcrumbs are recorded is not an option here; that is read
/// from the configuration provider on every add.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollectorConfig {
    /// Maximum breadcrumbs retained.
    pub capacity: usize,
    /// Storage strategy.
    pub strategy: BufferStrategy,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            strategy: BufferStrategy::Ring,
        }
    }
}

impl CollectorConfig {
    /// Creates the default options (ring buffer, default capacity).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder method to set the strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: BufferStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Builds the configured buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity is zero or cannot be allocated.
    pub fn build_buffer(&self) -> Result<Box<dyn Buffer>> {
        Ok(match self.strategy {
            BufferStrategy::Ring => Box::new(RingBuffer::new(self.capacity)?),
            BufferStrategy::Deque => Box::new(DequeBuffer::new(self.capacity)?),
        })
    }
}
