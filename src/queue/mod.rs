//! Queue implementations
//!
//! This module provides the lock-guarded shared FIFO container and the
//! caller-side helpers for polling it.
//!
//! ## Available Types
//!
//! - [`SharedQueue`]: unbounded multi-producer, multi-consumer FIFO behind a
//!   single mutex
//! - [`poll`]: bounded waiting and draining built on the non-blocking `get`
//!
//! ## Guarantees
//!
//! - **One lock per instance**: `add`, `get` and `count` all take it
//! - **Non-blocking reads**: `get` returns `None` instead of waiting
//! - **Global FIFO**: items leave in lock-acquisition order of the `add`
//!   calls that enqueued them
//!
//! ## Examples
//!
//! ```rust
//! use ryanair::queue::SharedQueue;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let queue = Arc::new(SharedQueue::new());
//!
//! let producer = {
//!     let queue = Arc::clone(&queue);
//!     thread::spawn(move || queue.add((0..100).map(|i| format!("job-{i}"))))
//! };
//! producer.join().unwrap();
//!
//! assert_eq!(queue.get().as_deref(), Some("job-0"));
//! assert_eq!(queue.count(), 99);
//! ```
pub mod poll;
pub mod shared;

pub use shared::SharedQueue;


#[cfg(all(test, not(loom)))]
mod proptests;
