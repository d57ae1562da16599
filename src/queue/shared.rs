//! Lock-guarded shared FIFO container
//!
//! A multi-producer, multi-consumer queue whose whole state sits behind one
//! mutex. There is no capacity limit and no blocking read: consumers poll
//! [`SharedQueue::get`] and back off on their own when it returns `None`.
//!
//! ```text
//! add([a, b]) ──lock──▶ [.., a, b]    tail
//! get()       ──lock──▶ [x, ..] ──▶ x  head
//! count()     ──lock──▶ len
//! ```

use crate::metrics::{AtomicMetrics, MetricsCollector, QueueMetrics};
use crate::sync::Mutex;
use std::collections::VecDeque;

/// An unbounded, thread-safe FIFO container
///
/// Every operation acquires the same per-instance lock for the duration of
/// its critical section, so the queue length always equals the number of
/// items added minus the number removed, and no item is lost or duplicated
/// under concurrent use.
///
/// # Examples
///
/// ```rust
/// use ryanair::queue::SharedQueue;
///
/// let queue = SharedQueue::new();
/// queue.add(["A", "B", "C"]);
///
/// assert_eq!(queue.get(), Some("A"));
/// assert_eq!(queue.get(), Some("B"));
/// assert_eq!(queue.get(), Some("C"));
/// assert_eq!(queue.get(), None);
/// ```
///
/// # Thread Safety
///
/// `SharedQueue<T>` is `Send + Sync` whenever `T: Send`. Share it with
/// `Arc<SharedQueue<T>>`.
#[derive(Debug)]
pub struct SharedQueue<T> {
    items: Mutex<VecDeque<T>>,
    metrics: AtomicMetrics,
}

impl<T> SharedQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::from_deque(VecDeque::new())
    }

    /// Create an empty queue with room for `capacity` items before it
    /// reallocates
    ///
    /// The queue is still unbounded; this only preallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_deque(VecDeque::with_capacity(capacity))
    }

    fn from_deque(items: VecDeque<T>) -> Self {
        Self {
            items: Mutex::new(items),
            metrics: AtomicMetrics::default(),
        }
    }

    /// Append every item to the tail of the queue, in iteration order
    ///
    /// The batch is collected before the lock is taken, then enqueued under
    /// one lock acquisition, so no other `add` or `get` interleaves with it.
    /// If the iterator panics nothing is enqueued. An empty batch is a no-op.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ryanair::queue::SharedQueue;
    ///
    /// let queue = SharedQueue::new();
    /// queue.add(vec!["ProcessOrder".to_string(), "UpdateInventory".to_string()]);
    /// queue.add(Vec::<String>::new());
    /// assert_eq!(queue.count(), 2);
    /// ```
    pub fn add<I>(&self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut batch: VecDeque<T> = items.into_iter().collect();
        let added = batch.len();

        let len = {
            let mut queue = self.items.lock();
            queue.append(&mut batch);
            self.metrics.record_add(added, queue.len());
            queue.len()
        };

        tracing::trace!(added, len, "items enqueued");
    }

    /// Remove and return the item at the head of the queue
    ///
    /// Returns `None` immediately when the queue is empty; an empty queue is
    /// a normal outcome, not an error. Callers that want to wait should poll
    /// with their own backoff, see [`crate::queue::poll`].
    pub fn get(&self) -> Option<T> {
        let mut queue = self.items.lock();
        let item = queue.pop_front();

        match item {
            Some(_) => self.metrics.record_hit(),
            None => self.metrics.record_empty(),
        }
        item
    }

    /// Current number of items in the queue
    ///
    /// Reads under the queue lock, so the value reflects the most recently
    /// completed `add` or `get`. Under concurrent use it may be stale by the
    /// time the caller looks at it.
    pub fn count(&self) -> usize {
        self.items.lock().len()
    }

    /// Alias for [`count`](Self::count)
    #[inline]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Check whether the queue currently holds no items
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Remove every item currently queued, in FIFO order
    ///
    /// Takes the lock once; items added afterwards stay in the queue.
    pub fn take_all(&self) -> Vec<T> {
        let mut queue = self.items.lock();
        let drained: Vec<T> = queue.drain(..).collect();

        self.metrics.record_drain(drained.len());
        drained
    }

    /// Consume the queue and return the remaining items in FIFO order
    pub fn into_vec(self) -> Vec<T> {
        self.items.into_inner().into()
    }
}

impl<T> Default for SharedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for SharedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let queue = Self::new();
        queue.add(iter);
        queue
    }
}

impl<T> Extend<T> for SharedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T> MetricsCollector for SharedQueue<T> {
    fn metrics(&self) -> QueueMetrics {
        self.metrics.snapshot()
    }

    /// Counters are updated under the queue lock, so holding it here makes
    /// the reset atomic with respect to `add`, `get` and `take_all`.
    /// Afterwards `items_added - items_removed` tracks `count()` minus the
    /// length at the time of the reset.
    fn reset_metrics(&self) {
        let queue = self.items.lock();
        self.metrics.reset(queue.len());
    }

    fn set_metrics_enabled(&self, enabled: bool) {
        self.metrics.set_enabled(enabled);
    }

    fn is_metrics_enabled(&self) -> bool {
        self.metrics.enabled()
    }
}
