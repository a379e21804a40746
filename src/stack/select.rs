// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::IntStack;

// Alloc imports
use alloc::vec::Vec;

impl IntStack {
    /// Returns a new stack with only the elements for which `predicate` is `true`.
    ///
    /// Relative order is preserved: the matches keep their top-to-bottom order.
    /// The predicate sees elements from the top down, like every other bulk
    /// operation.
    pub fn select<P: FnMut(i32) -> bool>(&self, mut predicate: P) -> IntStack {
        let mut items: Vec<i32> = self.iter().filter(|&v| predicate(v)).collect();
        items.reverse();
        IntStack { items }
    }

    /// Returns a new stack with only the elements for which `predicate` is `false`.
    ///
    /// The complement of [`select`](IntStack::select).
    #[inline]
    pub fn reject<P: FnMut(i32) -> bool>(&self, mut predicate: P) -> IntStack {
        self.select(|v| !predicate(v))
    }
}
