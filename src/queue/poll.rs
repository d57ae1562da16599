//! Caller-side polling helpers
//!
//! [`SharedQueue::get`] never waits. Consumers that need bounded waiting
//! build it here on top of the non-blocking read, with an adaptive backoff
//! between attempts so an idle consumer does not spin on the lock.

use super::SharedQueue;
use std::time::{Duration, Instant};

/// First sleep between empty polls
pub const INITIAL_BACKOFF: Duration = Duration::from_nanos(50);

/// Upper bound on the sleep between empty polls
pub const MAX_BACKOFF: Duration = Duration::from_millis(1);

/// Poll the queue until an item arrives or `timeout` elapses
///
/// Retries with exponential backoff starting at [`INITIAL_BACKOFF`] and
/// capped at [`MAX_BACKOFF`]. A zero timeout still makes one attempt.
///
/// # Examples
///
/// ```rust
/// use ryanair::queue::{poll, SharedQueue};
/// use std::time::Duration;
///
/// let queue: SharedQueue<String> = SharedQueue::new();
///
/// let result = poll::get_timeout(&queue, Duration::from_millis(10));
/// assert!(result.is_none()); // Queue empty, timeout
/// ```
pub fn get_timeout<T>(queue: &SharedQueue<T>, timeout: Duration) -> Option<T> {
    let start = Instant::now();
    let mut backoff = INITIAL_BACKOFF;

    loop {
        if let Some(item) = queue.get() {
            return Some(item);
        }

        let remaining = timeout.saturating_sub(start.elapsed());
        if remaining.is_zero() {
            tracing::trace!(?timeout, "poll timed out");
            return None;
        }

        std::thread::sleep(backoff.min(remaining));
        backoff = (backoff * 2).min(MAX_BACKOFF);
    }
}

/// Pop items until the queue reports empty
///
/// Unlike [`SharedQueue::take_all`] this takes the lock once per item, so
/// producers can keep appending while it runs; anything they add before the
/// final empty poll is included.
pub fn drain<T>(queue: &SharedQueue<T>) -> Vec<T> {
    std::iter::from_fn(|| queue.get()).collect()
}
