// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{collection::IntCollection, stack::IntStack};

impl IntStack {
    /// Applies `transform` to every element from the top down and adds each
    /// result to `target`, which is returned.
    ///
    /// The stack itself is not modified. What "adds" means is up to the
    /// target: an [`IntList`](crate::IntList) keeps order and duplicates, an
    /// [`IntSet`](crate::IntSet) drops repeats.
    ///
    /// ```rust
    /// use int_stack::{IntList, IntStack};
    ///
    /// let s = IntStack::from([1, 2, 3]);
    /// let doubled = s.collect(|v| v * 2, IntList::new());
    /// assert_eq!(doubled, [6, 4, 2]);
    /// ```
    pub fn collect<F, C>(&self, mut transform: F, mut target: C) -> C
    where
        F: FnMut(i32) -> i32,
        C: IntCollection,
    {
        for v in self.iter() {
            target.add(transform(v));
        }
        target
    }
}
