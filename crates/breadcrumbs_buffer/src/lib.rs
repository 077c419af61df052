//! Bounded breadcrumb storage.
//!
//! Every strategy implements [`Buffer`] and keeps the same two promises:
//! it never holds more than its capacity, and a full buffer evicts exactly
//! its oldest breadcrumb.
//!
//! - [`RingBuffer`] - fixed slots and a moving start offset (the default)
//! - [`DequeBuffer`] - grows on demand, truncates from the front
//!
//! # Example
//!
//! ```
//! use breadcrumbs_buffer::{Buffer, RingBuffer};
//! use breadcrumbs_foundation::Breadcrumb;
//!
//! let mut buffer = RingBuffer::new(2).unwrap();
//! buffer.add(Breadcrumb::new("login"));
//! buffer.add(Breadcrumb::new("click"));
//! buffer.add(Breadcrumb::new("submit"));
//!
//! let messages: Vec<_> = buffer.iter().map(|c| c.message()).collect();
//! assert_eq!(messages, ["click", "submit"]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod deque;
pub mod ring;
pub mod stats;
pub mod traits;

pub use deque::DequeBuffer;
pub use ring::{DEFAULT_CAPACITY, RingBuffer};
pub use stats::BufferStats;
pub use traits::Buffer;
