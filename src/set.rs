// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`IntSet`] type: a set of unique `i32` values.

// Crate imports
use crate::{collection::IntCollection, list::write_seq};

// Alloc imports
use alloc::collections::BTreeSet;

// Core imports
use core::fmt;

/// A set of unique `i32` values.
///
/// Callers should not rely on any particular iteration order. The current
/// backing store happens to iterate in ascending order.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntSet {
    items: BTreeSet<i32>,
}

impl IntSet {
    /// Creates an empty set.
    #[inline]
    pub const fn new() -> Self {
        Self {
            items: BTreeSet::new(),
        }
    }

    /// Number of distinct elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the set has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns `true` if `value` is in the set.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.items.contains(&value)
    }

    /// Inserts `value`; returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, value: i32) -> bool {
        self.items.insert(value)
    }

    /// Removes `value`; returns `false` if it was absent.
    #[inline]
    pub fn remove(&mut self, value: i32) -> bool {
        self.items.remove(&value)
    }

    /// Iterates the elements by value.
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<alloc::collections::btree_set::Iter<'_, i32>> {
        self.items.iter().copied()
    }
}

impl IntCollection for IntSet {
    #[inline]
    fn add(&mut self, value: i32) -> bool {
        self.items.insert(value)
    }

    #[inline]
    fn len(&self) -> usize {
        self.items.len()
    }
}

impl fmt::Debug for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.items.iter()).finish()
    }
}

impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_seq(f, self.iter())
    }
}

impl<const N: usize> From<[i32; N]> for IntSet {
    fn from(src: [i32; N]) -> Self {
        src.into_iter().collect()
    }
}

impl FromIterator<i32> for IntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<i32> for IntSet {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl IntoIterator for IntSet {
    type Item = i32;
    type IntoIter = alloc::collections::btree_set::IntoIter<i32>;
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
