// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Arithmetic aggregates.
//!
//! The `Option` argument on `average`, `median`, `min` and `max` is the
//! value to return for an empty stack. `None` turns emptiness into
//! [`Error::EmptyContainer`].

// Crate imports
use crate::{error::Error, stack::IntStack, stats::IntSummaryStatistics};

// Alloc imports
use alloc::vec::Vec;

impl IntStack {
    /// Sum of all elements, widened to `i64` so it cannot overflow. `0` when empty.
    pub fn sum(&self) -> i64 {
        self.items.iter().map(|&v| i64::from(v)).sum()
    }

    /// Arithmetic mean, `sum() / len()`.
    pub fn average(&self, if_empty: Option<f64>) -> Result<f64, Error> {
        if self.items.is_empty() {
            return if_empty.ok_or(Error::EmptyContainer);
        }
        Ok(self.sum() as f64 / self.items.len() as f64)
    }

    /// Median of the elements.
    ///
    /// For an odd length this is the middle element once sorted; for an even
    /// length it is the mean of the two middle elements.
    pub fn median(&self, if_empty: Option<f64>) -> Result<f64, Error> {
        if self.items.is_empty() {
            return if_empty.ok_or(Error::EmptyContainer);
        }
        let mut sorted: Vec<i32> = self.items.clone();
        sorted.sort_unstable();
        let mid = sorted.len() / 2;
        if sorted.len() % 2 == 1 {
            Ok(f64::from(sorted[mid]))
        } else {
            Ok((f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0)
        }
    }

    /// Smallest element.
    pub fn min(&self, if_empty: Option<i32>) -> Result<i32, Error> {
        self.items
            .iter()
            .copied()
            .min()
            .or(if_empty)
            .ok_or(Error::EmptyContainer)
    }

    /// Largest element.
    pub fn max(&self, if_empty: Option<i32>) -> Result<i32, Error> {
        self.items
            .iter()
            .copied()
            .max()
            .or(if_empty)
            .ok_or(Error::EmptyContainer)
    }

    /// Count, sum, min and max gathered in one pass.
    ///
    /// See [`IntSummaryStatistics`] for the values reported on an empty stack.
    #[inline]
    pub fn summary_statistics(&self) -> IntSummaryStatistics {
        self.items.iter().copied().collect()
    }
}
