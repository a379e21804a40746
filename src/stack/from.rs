// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Construction from literals, ranges and iterators.
//!
//! Every constructor pushes the source elements in order, so the last
//! element yielded ends up on top.

// Crate imports
use crate::stack::IntStack;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::ops::{Range, RangeInclusive};

impl IntStack {
    /// Builds a stack by pushing every value of `values` in order.
    ///
    /// ```rust
    /// use int_stack::IntStack;
    ///
    /// let mut s = IntStack::with_all([1, 2, 3]);
    /// assert_eq!(s.pop(), Ok(3));
    /// ```
    #[inline]
    pub fn with_all<I: IntoIterator<Item = i32>>(values: I) -> Self {
        values.into_iter().collect()
    }
}

impl<const N: usize> From<[i32; N]> for IntStack {
    fn from(src: [i32; N]) -> Self {
        Self {
            items: Vec::from(src),
        }
    }
}

impl From<&[i32]> for IntStack {
    fn from(src: &[i32]) -> Self {
        Self {
            items: src.to_vec(),
        }
    }
}

impl From<Range<i32>> for IntStack {
    fn from(range: Range<i32>) -> Self {
        range.collect()
    }
}

impl From<RangeInclusive<i32>> for IntStack {
    fn from(range: RangeInclusive<i32>) -> Self {
        range.collect()
    }
}

impl FromIterator<i32> for IntStack {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

/// Pushes each value in order.
impl Extend<i32> for IntStack {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{IntList, IntStack};

    #[test]
    fn test_literal_top_is_last_argument() {
        let mut s = IntStack::from([1, 2, 3, 4, 5]);
        assert_eq!(s.pop_n(5), Ok(IntList::from([5, 4, 3, 2, 1])));
    }

    #[test]
    #[allow(clippy::reversed_empty_ranges)]
    fn test_ranges() {
        assert_eq!(IntStack::from(1..=5), IntStack::from([1, 2, 3, 4, 5]));
        assert_eq!(IntStack::from(1..5), IntStack::from([1, 2, 3, 4]));
        assert!(IntStack::from(5..1).is_empty());
    }

    #[test]
    fn test_with_all_from_list_interval() {
        let descending = IntStack::with_all(IntList::from_to(3, 1));
        assert_eq!(descending.peek(), Ok(1));
        assert_eq!(IntStack::with_all(IntList::one_to(3)), IntStack::from(1..=3));
    }

    #[test]
    fn test_slice_and_iterator() {
        let v = [7, 8, 9];
        assert_eq!(IntStack::from(&v[..]), IntStack::from(v));
        let collected: IntStack = v.iter().map(|x| x * 2).collect();
        assert_eq!(collected.peek(), Ok(18));
    }

    #[test]
    fn test_extend_pushes_in_order() {
        let mut s = IntStack::from([1]);
        s.extend([2, 3]);
        assert_eq!(s.peek(), Ok(3));
        assert_eq!(s.len(), 3);
    }
}
