// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{bag::IntBag, list::IntList, set::IntSet, stack::IntStack};

impl IntStack {
    /// Copies the elements into a list in pop order (top first).
    #[inline]
    pub fn to_list(&self) -> IntList {
        let mut out = IntList::with_capacity(self.items.len());
        out.extend(self.iter());
        out
    }

    /// Copies the elements into a list sorted ascending.
    pub fn to_sorted_list(&self) -> IntList {
        let mut out = IntList::from(self.items.as_slice());
        out.sort_this();
        out
    }

    /// Copies the distinct elements into a set.
    #[inline]
    pub fn to_set(&self) -> IntSet {
        self.items.iter().copied().collect()
    }

    /// Copies the elements into a bag, keeping how often each occurs.
    #[inline]
    pub fn to_bag(&self) -> IntBag {
        self.items.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{IntBag, IntList, IntSet, IntStack};

    #[test]
    fn test_to_list_is_pop_order() {
        let s = IntStack::from([3, 1, 2]);
        assert_eq!(s.to_list(), [2, 1, 3]);
        assert_eq!(s.to_sorted_list(), [1, 2, 3]);
    }

    #[test]
    fn test_duplicates_per_target() {
        let s = IntStack::from([2, 1, 2, 2]);
        assert_eq!(s.to_list().len(), 4);
        assert_eq!(s.to_sorted_list(), IntList::from([1, 2, 2, 2]));
        assert_eq!(s.to_set(), IntSet::from([1, 2]));
        let bag = s.to_bag();
        assert_eq!(bag, IntBag::from([1, 2, 2, 2]));
        assert_eq!(bag.occurrences_of(2), 3);
    }

    #[test]
    fn test_conversions_of_empty_stack() {
        let s = IntStack::new();
        assert!(s.to_list().is_empty());
        assert!(s.to_sorted_list().is_empty());
        assert!(s.to_set().is_empty());
        assert!(s.to_bag().is_empty());
    }

    #[test]
    fn test_conversions_are_independent_copies() {
        let mut s = IntStack::from([1, 2]);
        let list = s.to_list();
        s.push(3);
        assert_eq!(list, [2, 1]);
    }
}
