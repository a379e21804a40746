// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Single-pass aggregate statistics over `i32` values.

/// A snapshot of `count`, `sum`, `min` and `max` gathered in one pass.
///
/// # Empty snapshot
///
/// With no values accepted, the statistics are:
///
/// - `count == 0` and `sum == 0`;
/// - `min == i32::MAX` and `max == i32::MIN`, so that the first accepted
///   value replaces both;
/// - [`average`](Self::average) returns `0.0`.
///
/// Check [`count`](Self::count) before trusting `min`/`max`.
///
/// # Examples
///
/// ```rust
/// use int_stack::IntSummaryStatistics;
///
/// let stats: IntSummaryStatistics = [4, -2, 7].into_iter().collect();
/// assert_eq!(stats.count(), 3);
/// assert_eq!(stats.sum(), 9);
/// assert_eq!(stats.min(), -2);
/// assert_eq!(stats.max(), 7);
/// assert_eq!(stats.average(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IntSummaryStatistics {
    count: u64,
    sum: i64,
    min: i32,
    max: i32,
}

impl IntSummaryStatistics {
    /// The empty snapshot.
    pub const EMPTY: Self = Self {
        count: 0,
        sum: 0,
        min: i32::MAX,
        max: i32::MIN,
    };

    /// Same as [`EMPTY`](Self::EMPTY).
    #[inline]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Records one value.
    #[inline]
    pub fn accept(&mut self, value: i32) {
        self.count += 1;
        self.sum += i64::from(value);
        self.min = self.min.min(value);
        self.max = self.max.max(value);
    }

    /// Folds `other` into `self`, as if every value it saw had been accepted here.
    pub fn combine(&mut self, other: &Self) {
        self.count += other.count;
        self.sum += other.sum;
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Number of accepted values.
    #[inline]
    pub const fn count(&self) -> u64 {
        self.count
    }

    /// Sum of accepted values, widened to `i64`.
    #[inline]
    pub const fn sum(&self) -> i64 {
        self.sum
    }

    /// Smallest accepted value, or `i32::MAX` when empty.
    #[inline]
    pub const fn min(&self) -> i32 {
        self.min
    }

    /// Largest accepted value, or `i32::MIN` when empty.
    #[inline]
    pub const fn max(&self) -> i32 {
        self.max
    }

    /// `sum / count`, or `0.0` when empty.
    #[inline]
    pub fn average(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum as f64 / self.count as f64
        }
    }
}

impl Default for IntSummaryStatistics {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<i32> for IntSummaryStatistics {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut stats = Self::EMPTY;
        for v in iter {
            stats.accept(v);
        }
        stats
    }
}

impl Extend<i32> for IntSummaryStatistics {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for v in iter {
            self.accept(v);
        }
    }
}
