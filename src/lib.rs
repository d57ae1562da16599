//! # Ryanair
//!
//! Two small, independent building blocks:
//!
//! - **Selection**: find the k-th largest value divisible by both 12 and 16
//!   in a sequence of optional numbers, using a bounded min-heap.
//! - **Shared queue**: a lock-guarded, unbounded FIFO container that many
//!   producers and consumers can use at once.
//!
//! ## Quick Start
//!
//! ```rust
//! use ryanair::select::kth_largest_divisible;
//! use ryanair::queue::SharedQueue;
//!
//! let numbers = [Some(48.0), None, Some(96.0), Some(12.0), Some(144.0)];
//! assert_eq!(kth_largest_divisible(&numbers, 2)?, Some(96.0));
//!
//! let queue = SharedQueue::new();
//! queue.add(["ProcessOrder", "SendNotification"]);
//! assert_eq!(queue.get(), Some("ProcessOrder"));
//! assert_eq!(queue.count(), 1);
//! # Ok::<(), ryanair::Error>(())
//! ```
//!
//! ## Thread Safety
//!
//! [`SharedQueue`] is `Send + Sync` for `T: Send` and is meant to be shared
//! behind an `Arc`. Every operation takes the same per-instance lock, so
//! retrieval order is global FIFO in lock-acquisition order.
//!
//! ## Logging
//!
//! The crate emits `tracing` events at `debug` and `trace` level and never
//! installs a subscriber of its own.

#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]

pub mod metrics;
pub mod queue;
pub mod select;
pub mod util;

mod sync;

pub use crate::metrics::{MetricsCollector, QueueMetrics};
pub use crate::queue::SharedQueue;
pub use crate::select::kth_largest_divisible;

/// Error types for Ryanair operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An argument was outside its accepted domain
    #[error("invalid argument `{param}`: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter
        param: &'static str,
        /// Human-readable constraint that was violated
        reason: &'static str,
    },
}

impl Error {
    /// Name of the parameter that caused the error
    pub fn param(&self) -> &'static str {
        match self {
            Error::InvalidArgument { param, .. } => *param,
        }
    }
}

/// Result type for Ryanair operations
pub type Result<T> = core::result::Result<T, Error>;
