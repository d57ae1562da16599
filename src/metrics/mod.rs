//! Queue Metrics Module
//!
//! Lightweight atomic counters attached to every [`SharedQueue`]. The queue
//! bumps them inside its critical section, so they move in step with its
//! contents; taking a snapshot reads the atomics without the lock and never
//! contends with producers or consumers.
//!
//! [`SharedQueue`]: crate::queue::SharedQueue

use core::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};

/// Snapshot of a queue's traffic counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueueMetrics {
    /// Total number of items appended by `add`
    pub items_added: u64,
    /// Total number of items handed out by `get` and `take_all`
    pub items_removed: u64,
    /// Number of `add` calls, including empty batches
    pub add_calls: u64,
    /// Number of removal calls (`get` and `take_all`)
    pub get_calls: u64,
    /// Number of removal calls that found the queue empty
    pub empty_polls: u64,
    /// Largest number of items held at once
    pub peak_len: usize,
}

impl QueueMetrics {
    /// Items added but not yet removed, as seen by the counters
    pub fn in_flight(&self) -> u64 {
        self.items_added.saturating_sub(self.items_removed)
    }

    /// Percentage of removal calls that returned at least one item
    pub fn hit_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            100.0 - self.empty_poll_rate()
        }
    }

    /// Percentage of removal calls that found nothing
    pub fn empty_poll_rate(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            (self.empty_polls as f64 / self.get_calls as f64) * 100.0
        }
    }
}

/// Internal atomic counters backing [`QueueMetrics`]
#[derive(Debug)]
pub(crate) struct AtomicMetrics {
    items_added: AtomicU64,
    items_removed: AtomicU64,
    add_calls: AtomicU64,
    get_calls: AtomicU64,
    empty_polls: AtomicU64,
    peak_len: AtomicUsize,
    enabled: AtomicBool,
}

impl Default for AtomicMetrics {
    fn default() -> Self {
        Self {
            items_added: AtomicU64::new(0),
            items_removed: AtomicU64::new(0),
            add_calls: AtomicU64::new(0),
            get_calls: AtomicU64::new(0),
            empty_polls: AtomicU64::new(0),
            peak_len: AtomicUsize::new(0),
            enabled: AtomicBool::new(true),
        }
    }
}

impl AtomicMetrics {
    #[inline]
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Record an `add` call that appended `count` items, leaving `len` queued
    pub(crate) fn record_add(&self, count: usize, len: usize) {
        if !self.is_enabled() {
            return;
        }
        self.add_calls.fetch_add(1, Ordering::Relaxed);
        self.items_added.fetch_add(count as u64, Ordering::Relaxed);
        self.peak_len.fetch_max(len, Ordering::Relaxed);
    }

    /// Record a `get` call that returned an item
    pub(crate) fn record_hit(&self) {
        if !self.is_enabled() {
            return;
        }
        self.get_calls.fetch_add(1, Ordering::Relaxed);
        self.items_removed.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a single call that removed `count` items at once
    pub(crate) fn record_drain(&self, count: usize) {
        if !self.is_enabled() {
            return;
        }
        self.get_calls.fetch_add(1, Ordering::Relaxed);
        if count == 0 {
            self.empty_polls.fetch_add(1, Ordering::Relaxed);
        } else {
            self.items_removed.fetch_add(count as u64, Ordering::Relaxed);
        }
    }

    /// Record a `get` call that found the queue empty
    pub(crate) fn record_empty(&self) {
        if !self.is_enabled() {
            return;
        }
        self.get_calls.fetch_add(1, Ordering::Relaxed);
        self.empty_polls.fetch_add(1, Ordering::Relaxed);
    }

    pub(crate) fn snapshot(&self) -> QueueMetrics {
        QueueMetrics {
            items_added: self.items_added.load(Ordering::Relaxed),
            items_removed: self.items_removed.load(Ordering::Relaxed),
            add_calls: self.add_calls.load(Ordering::Relaxed),
            get_calls: self.get_calls.load(Ordering::Relaxed),
            empty_polls: self.empty_polls.load(Ordering::Relaxed),
            peak_len: self.peak_len.load(Ordering::Relaxed),
        }
    }

    /// Reset traffic counters. `peak_len` restarts from `current_len`.
    pub(crate) fn reset(&self, current_len: usize) {
        self.items_added.store(0, Ordering::Relaxed);
        self.items_removed.store(0, Ordering::Relaxed);
        self.add_calls.store(0, Ordering::Relaxed);
        self.get_calls.store(0, Ordering::Relaxed);
        self.empty_polls.store(0, Ordering::Relaxed);
        self.peak_len.store(current_len, Ordering::Relaxed);
    }

    pub(crate) fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    pub(crate) fn enabled(&self) -> bool {
        self.is_enabled()
    }
}

/// Trait for containers that expose traffic metrics
pub trait MetricsCollector {
    /// Get a snapshot of the current metrics
    fn metrics(&self) -> QueueMetrics;

    /// Reset all metrics
    fn reset_metrics(&self);

    /// Enable or disable metrics collection
    fn set_metrics_enabled(&self, enabled: bool);

    /// Check if metrics collection is enabled
    fn is_metrics_enabled(&self) -> bool;
}
