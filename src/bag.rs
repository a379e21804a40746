// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`IntBag`] type: a multiset of `i32` that keeps occurrence counts.

// Crate imports
use crate::{collection::IntCollection, error::Error};

// Alloc imports
use alloc::collections::BTreeMap;

// Core imports
use core::fmt;

/// A multiset of `i32`.
///
/// Each distinct value maps to a positive occurrence count; values whose
/// count drops to zero are removed, so two bags compare equal exactly when
/// every value occurs the same number of times in both.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntBag {
    counts: BTreeMap<i32, usize>,
    len: usize,
}

impl IntBag {
    /// Creates an empty bag.
    #[inline]
    pub const fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
            len: 0,
        }
    }

    /// Total number of occurrences across all values.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the bag holds no occurrences.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of distinct values.
    #[inline]
    pub fn size_distinct(&self) -> usize {
        self.counts.len()
    }

    /// How many times `value` occurs (`0` if absent).
    #[inline]
    pub fn occurrences_of(&self, value: i32) -> usize {
        self.counts.get(&value).copied().unwrap_or(0)
    }

    /// Returns `true` if `value` occurs at least once.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.counts.contains_key(&value)
    }

    /// Adds `n` occurrences of `value`. Adding zero occurrences is a no-op.
    ///
    /// Returns [`Error::CountOverflow`] and leaves the bag unchanged if the
    /// total number of occurrences would exceed `usize::MAX`.
    pub fn add_occurrences(&mut self, value: i32, n: usize) -> Result<(), Error> {
        if n == 0 {
            return Ok(());
        }
        // Every per-value count is <= len, so checking len covers both.
        let len = self.len.checked_add(n).ok_or(Error::CountOverflow)?;
        let count = self
            .occurrences_of(value)
            .checked_add(n)
            .ok_or(Error::CountOverflow)?;
        self.counts.insert(value, count);
        self.len = len;
        Ok(())
    }

    /// Removes up to `n` occurrences of `value`.
    ///
    /// Returns `true` if at least one occurrence was removed.
    pub fn remove_occurrences(&mut self, value: i32, n: usize) -> bool {
        let Some(count) = self.counts.get_mut(&value) else {
            return false;
        };
        if n == 0 {
            return false;
        }
        let removed = n.min(*count);
        *count -= removed;
        if *count == 0 {
            self.counts.remove(&value);
        }
        self.len -= removed;
        true
    }

    /// Iterates `(value, count)` pairs, one per distinct value.
    pub fn iter(&self) -> impl Iterator<Item = (i32, usize)> + '_ {
        self.counts.iter().map(|(&v, &n)| (v, n))
    }
}

impl IntCollection for IntBag {
    /// Returns `false` without changing the bag if the total count would overflow.
    #[inline]
    fn add(&mut self, value: i32) -> bool {
        self.add_occurrences(value, 1).is_ok()
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }
}

impl fmt::Debug for IntBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.counts.iter()).finish()
    }
}

impl fmt::Display for IntBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::list::write_seq(
            f,
            self.iter()
                .flat_map(|(v, n)| core::iter::repeat(v).take(n)),
        )
    }
}

impl<const N: usize> From<[i32; N]> for IntBag {
    fn from(src: [i32; N]) -> Self {
        src.into_iter().collect()
    }
}

impl FromIterator<i32> for IntBag {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut bag = Self::new();
        bag.extend(iter);
        bag
    }
}

/// Values whose addition would overflow the total count are skipped.
impl Extend<i32> for IntBag {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        for v in iter {
            self.add(v);
        }
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::IntBag;
    use crate::{Error, IntCollection};
    use alloc::{format, vec::Vec};

    #[test]
    fn test_counts_duplicates() {
        let b = IntBag::from([1, 2, 2, 3, 3, 3]);
        assert_eq!(b.len(), 6);
        assert_eq!(b.size_distinct(), 3);
        assert_eq!(b.occurrences_of(3), 3);
        assert_eq!(b.occurrences_of(9), 0);
        assert!(b.contains(2));
    }

    #[test]
    fn test_equality_ignores_order_but_not_counts() {
        assert_eq!(IntBag::from([1, 2, 1]), IntBag::from([2, 1, 1]));
        assert_ne!(IntBag::from([1, 2, 1]), IntBag::from([1, 2]));
    }

    #[test]
    fn test_add_and_remove_occurrences() {
        let mut b = IntBag::new();
        assert_eq!(b.add_occurrences(7, 0), Ok(()));
        assert!(b.is_empty());
        assert_eq!(b.size_distinct(), 0);

        assert_eq!(b.add_occurrences(7, 3), Ok(()));
        assert!(b.remove_occurrences(7, 2));
        assert_eq!(b.occurrences_of(7), 1);
        assert!(b.remove_occurrences(7, 10));
        assert!(!b.contains(7));
        assert!(b.is_empty());
        assert!(!b.remove_occurrences(7, 1));
        assert_eq!(b, IntBag::new());
    }

    #[test]
    fn test_add_occurrences_overflow_errs_and_is_noop() {
        let mut b = IntBag::new();
        assert_eq!(b.add_occurrences(1, usize::MAX), Ok(()));
        let before = b.clone();

        assert_eq!(b.add_occurrences(2, 1), Err(Error::CountOverflow));
        assert_eq!(b.add_occurrences(1, 1), Err(Error::CountOverflow));
        assert!(!b.add(3));
        b.extend([4, 5]);

        assert_eq!(b, before);
        assert_eq!(b.len(), usize::MAX);
        assert_eq!(b.occurrences_of(1), usize::MAX);
        assert_eq!(b.size_distinct(), 1);
        assert!(!b.contains(2));
    }

    #[test]
    fn test_len_tracks_counts_after_removal() {
        let mut b = IntBag::new();
        assert_eq!(b.add_occurrences(1, usize::MAX - 1), Ok(()));
        assert!(b.remove_occurrences(1, 5));
        assert_eq!(b.add_occurrences(2, 6), Ok(()));
        assert_eq!(b.len(), usize::MAX);
        assert_eq!(b.occurrences_of(1) + b.occurrences_of(2), b.len());
    }

    #[test]
    fn test_iter_pairs_and_display() {
        let b = IntBag::from([2, 1, 2]);
        let pairs: Vec<(i32, usize)> = b.iter().collect();
        assert_eq!(pairs, [(1, 1), (2, 2)]);
        assert_eq!(format!("{b}"), "[1, 2, 2]");
    }
}
