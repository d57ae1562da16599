//! Selection over sequences of optional numbers
//!
//! ## Available Operations
//!
//! - [`kth_largest_divisible`]: k-th largest value divisible by both 12 and
//!   16 (that is, by 48), with duplicates ranked separately
//! - [`is_divisible_by_48`]: the tolerance-aware predicate it filters with
//!
//! ## Complexity
//!
//! | Approach | Time | Extra memory |
//! |----------|------|--------------|
//! | Bounded min-heap (used) | O(n log k) | O(k) |
//! | Full sort | O(n log n) | O(n) |
//!
//! ## Examples
//!
//! ```rust
//! use ryanair::select::kth_largest_divisible;
//!
//! let numbers = [Some(48.0), Some(48.0), Some(96.0), Some(96.0), None, Some(144.0)];
//! assert_eq!(kth_largest_divisible(&numbers, 3)?, Some(96.0));
//! assert_eq!(kth_largest_divisible(&numbers, 6)?, None);
//! # Ok::<(), ryanair::Error>(())
//! ```
pub mod kth;

pub use kth::{is_divisible_by_48, kth_largest_divisible, DIVISOR, EPSILON};


#[cfg(test)]
mod proptests;
