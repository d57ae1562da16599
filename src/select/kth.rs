//! K-th largest multiple of 48
//!
//! Keeps a min-heap of at most `k` qualifying values. Once the heap is full,
//! a new value only enters by evicting the current minimum, so after one
//! pass the heap holds the `k` largest values and its top is the answer.

use crate::{Error, Result};
use core::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Least common multiple of 12 and 16
pub const DIVISOR: f64 = 48.0;

/// Remainders below this count as exact divisibility
pub const EPSILON: f64 = 1e-9;

/// Heap entry with a total order over the qualifying values.
///
/// Only finite values ever pass [`is_divisible_by_48`], so `total_cmp`
/// agrees with numeric order for everything stored here, except that
/// `-0.0` sorts below `0.0`.
#[derive(Debug, Clone, Copy)]
struct Candidate(f64);

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Check whether `value` is divisible by 48 within [`EPSILON`]
///
/// The remainder is folded onto `[0, 24]` so values just below a multiple
/// (where `%` yields nearly 48) and negative values are handled the same
/// way as values just above one. NaN and infinities never qualify.
///
/// ```rust
/// use ryanair::select::is_divisible_by_48;
///
/// assert!(is_divisible_by_48(96.0));
/// assert!(is_divisible_by_48(-48.0));
/// assert!(is_divisible_by_48(0.1 * 3.0 * 160.0)); // 48.00000000000001
/// assert!(!is_divisible_by_48(24.0));
/// ```
#[inline]
pub fn is_divisible_by_48(value: f64) -> bool {
    let mut remainder = (value % DIVISOR).abs();

    if remainder > DIVISOR / 2.0 {
        remainder = DIVISOR - remainder;
    }

    remainder < EPSILON
}

/// Find the k-th largest value in `numbers` divisible by both 12 and 16
///
/// `None` entries are skipped and do not count toward `k`. Equal values
/// occupy separate ranks, so in `[96, 96, 48]` the 2nd largest is `96`.
///
/// # Returns
///
/// * `Ok(Some(value))` - the k-th largest qualifying value
/// * `Ok(None)` - fewer than `k` values qualify
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming `k` when `k` is zero.
///
/// # Examples
///
/// ```rust
/// use ryanair::select::kth_largest_divisible;
///
/// let numbers = [Some(48.0), Some(96.0), Some(144.0), Some(192.0), Some(240.0)];
/// assert_eq!(kth_largest_divisible(&numbers, 1)?, Some(240.0));
/// assert_eq!(kth_largest_divisible(&numbers, 5)?, Some(48.0));
/// assert_eq!(kth_largest_divisible(&numbers, 6)?, None);
/// assert!(kth_largest_divisible(&numbers, 0).is_err());
/// # Ok::<(), ryanair::Error>(())
/// ```
pub fn kth_largest_divisible(numbers: &[Option<f64>], k: usize) -> Result<Option<f64>> {
    if k == 0 {
        tracing::debug!(k, "rejected non-positive rank");
        return Err(Error::InvalidArgument {
            param: "k",
            reason: "k must be positive",
        });
    }

    // Capacity is bounded by the input too, so a huge k never over-allocates
    let mut heap = BinaryHeap::with_capacity(k.min(numbers.len()));

    for value in numbers.iter().flatten().copied() {
        if !is_divisible_by_48(value) {
            continue;
        }

        if heap.len() < k {
            heap.push(Reverse(Candidate(value)));
        } else if let Some(mut smallest) = heap.peek_mut() {
            if value > smallest.0 .0 {
                *smallest = Reverse(Candidate(value));
            }
        }
    }

    let result = if heap.len() == k {
        heap.peek().map(|Reverse(Candidate(value))| *value)
    } else {
        None
    };

    tracing::debug!(
        k,
        inputs = numbers.len(),
        qualifying = heap.len(),
        ?result,
        "selected k-th largest multiple of 48"
    );
    Ok(result)
}
