// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::IntList, stack::IntStack};

impl IntStack {
    /// Removes and returns the top element.
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    #[inline]
    pub fn pop(&mut self) -> Result<i32, Error> {
        self.items.pop().ok_or(Error::EmptyContainer)
    }

    /// Removes the top `count` elements and returns them in pop order
    /// (most recent first).
    ///
    /// - `count == 0` returns an empty list and leaves the stack unchanged.
    /// - `count > len()` returns [`Error::EmptyContainer`] and leaves the
    ///   stack unchanged.
    pub fn pop_n(&mut self, count: usize) -> Result<IntList, Error> {
        let len = self.items.len();
        if count > len {
            return Err(Error::EmptyContainer);
        }
        Ok(self.items.drain(len - count..).rev().collect())
    }
}
