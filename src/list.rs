// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`IntList`] type: an ordered, indexable list of `i32`.
//!
//! `IntList` is what [`IntStack`](crate::IntStack) hands back whenever order
//! matters: `pop_n`, `peek_n`, `to_list` and `to_sorted_list`. It derefs to
//! `[i32]`, so slice methods and indexing work as usual.

// Crate imports
use crate::collection::IntCollection;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::{fmt, ops::Deref};

/// A growable, ordered list of `i32` that keeps duplicates.
#[derive(Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IntList {
    items: Vec<i32>,
}

impl IntList {
    /// Creates an empty list.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty list with room for `capacity` elements.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Builds the inclusive interval `from..=to`, stepping by one towards `to`.
    ///
    /// Descending bounds produce a descending list, so `from_to(5, 1)` is
    /// `[5, 4, 3, 2, 1]`.
    pub fn from_to(from: i32, to: i32) -> Self {
        if from <= to {
            (from..=to).collect()
        } else {
            (to..=from).rev().collect()
        }
    }

    /// Builds `[1, 2, ..., n]`; empty when `n < 1`.
    #[inline]
    pub fn one_to(n: i32) -> Self {
        (1..=n).collect()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the element at `index`, or `None` if out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<i32> {
        self.items.get(index).copied()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<i32> {
        self.items.first().copied()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<i32> {
        self.items.last().copied()
    }

    /// Appends `value` at the end.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.items.push(value);
    }

    /// Iterates the elements by value, front to back.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, i32>> {
        self.items.iter().copied()
    }

    /// Shorthand for `&self[..]`.
    #[inline]
    pub fn as_slice(&self) -> &[i32] {
        &self.items
    }

    /// Sorts in place, ascending, and returns `self` for chaining.
    #[inline]
    pub fn sort_this(&mut self) -> &mut Self {
        self.items.sort_unstable();
        self
    }

    /// Sum of all elements widened to `i64`; `0` when empty.
    pub fn sum(&self) -> i64 {
        self.items.iter().map(|&v| i64::from(v)).sum()
    }

    /// Consumes the list and returns the backing vector.
    #[inline]
    pub fn into_vec(self) -> Vec<i32> {
        self.items
    }
}

impl IntCollection for IntList {
    #[inline]
    fn add(&mut self, value: i32) -> bool {
        self.items.push(value);
        true
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl Deref for IntList {
    type Target = [i32];
    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl AsRef<[i32]> for IntList {
    fn as_ref(&self) -> &[i32] {
        &self.items
    }
}

impl fmt::Debug for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntList").field(&self.items).finish()
    }
}

impl fmt::Display for IntList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}

impl<const N: usize> PartialEq<[i32; N]> for IntList {
    fn eq(&self, other: &[i32; N]) -> bool {
        self.items.as_slice() == other.as_slice()
    }
}

impl PartialEq<[i32]> for IntList {
    fn eq(&self, other: &[i32]) -> bool {
        self.items.as_slice() == other
    }
}

impl From<Vec<i32>> for IntList {
    fn from(items: Vec<i32>) -> Self {
        Self { items }
    }
}

impl From<&[i32]> for IntList {
    fn from(src: &[i32]) -> Self {
        Self {
            items: src.to_vec(),
        }
    }
}

impl<const N: usize> From<[i32; N]> for IntList {
    fn from(src: [i32; N]) -> Self {
        Self {
            items: Vec::from(src),
        }
    }
}

impl From<IntList> for Vec<i32> {
    fn from(list: IntList) -> Self {
        list.items
    }
}

impl FromIterator<i32> for IntList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<i32> for IntList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for IntList {
    type Item = i32;
    type IntoIter = alloc::vec::IntoIter<i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a IntList {
    type Item = i32;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, i32>>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Writes `values` as `[a, b, c]`.
pub(crate) fn write_seq<I>(f: &mut fmt::Formatter<'_>, values: I) -> fmt::Result
where
    I: IntoIterator<Item = i32>,
{
    f.write_str("[")?;
    for (i, v) in values.into_iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{v}")?;
    }
    f.write_str("]")
}

#[cfg(test)]
mod tests {
    // Imports
    use super::IntList;
    use alloc::{format, vec, vec::Vec};

    #[test]
    fn test_from_to_both_directions() {
        assert_eq!(IntList::from_to(1, 5), [1, 2, 3, 4, 5]);
        assert_eq!(IntList::from_to(5, 1), [5, 4, 3, 2, 1]);
        assert_eq!(IntList::from_to(3, 3), [3]);
    }

    #[test]
    fn test_from_to_at_numeric_limits() {
        let top = IntList::from_to(i32::MAX - 1, i32::MAX);
        assert_eq!(top, [i32::MAX - 1, i32::MAX]);
        let bottom = IntList::from_to(i32::MIN + 1, i32::MIN);
        assert_eq!(bottom, [i32::MIN + 1, i32::MIN]);
    }

    #[test]
    fn test_one_to() {
        assert_eq!(IntList::one_to(5), IntList::from_to(1, 5));
        assert!(IntList::one_to(0).is_empty());
        assert!(IntList::one_to(-3).is_empty());
    }

    #[test]
    fn test_getters() {
        let l = IntList::from([4, 8, 15]);
        assert_eq!(l.len(), 3);
        assert_eq!(l.get(1), Some(8));
        assert_eq!(l.get(3), None);
        assert_eq!(l.first(), Some(4));
        assert_eq!(l.last(), Some(15));
        assert_eq!(l[2], 15);
        assert_eq!(IntList::new().first(), None);
    }

    #[test]
    fn test_sort_this_and_sum() {
        let mut l = IntList::from(vec![3, -1, 2]);
        l.sort_this();
        assert_eq!(l, [-1, 2, 3]);
        assert_eq!(l.sum(), 4);
        assert_eq!(IntList::from([i32::MAX, i32::MAX]).sum(), 2 * i64::from(i32::MAX));
    }

    #[test]
    fn test_collect_extend_and_into_iter() {
        let mut l: IntList = (1..=3).collect();
        l.extend([9, 9]);
        l.push(0);
        let back: Vec<i32> = l.clone().into_iter().collect();
        assert_eq!(back, vec![1, 2, 3, 9, 9, 0]);
        let borrowed: Vec<i32> = (&l).into_iter().collect();
        assert_eq!(borrowed, back);
        assert_eq!(l.into_vec(), back);
    }

    #[test]
    fn test_display_and_debug() {
        assert_eq!(format!("{}", IntList::from([5, 4])), "[5, 4]");
        assert_eq!(format!("{}", IntList::new()), "[]");
        assert_eq!(format!("{:?}", IntList::from([1])), "IntList([1])");
    }
}
