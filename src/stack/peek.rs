// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, list::IntList, stack::IntStack};

impl IntStack {
    /// Returns the top element without removing it.
    ///
    /// Returns [`Error::EmptyContainer`] if the stack is empty.
    #[inline]
    pub fn peek(&self) -> Result<i32, Error> {
        self.items.last().copied().ok_or(Error::EmptyContainer)
    }

    /// Returns the top `count` elements, top first, without removing them.
    ///
    /// Fails with [`Error::EmptyContainer`] when `count > len()`.
    pub fn peek_n(&self, count: usize) -> Result<IntList, Error> {
        if count > self.items.len() {
            return Err(Error::EmptyContainer);
        }
        Ok(self.iter().take(count).collect())
    }

    /// Returns the element `index` positions below the top (`0` is the top).
    ///
    /// Fails with [`Error::EmptyContainer`] when `index >= len()`.
    #[inline]
    pub fn peek_at(&self, index: usize) -> Result<i32, Error> {
        self.iter().nth(index).ok_or(Error::EmptyContainer)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, IntList, IntStack};

    #[test]
    fn test_peek_does_not_mutate() {
        let s = IntStack::from([1, 2, 3]);
        assert_eq!(s.peek(), Ok(3));
        assert_eq!(s.peek(), Ok(3));
        assert_eq!(s.len(), 3);
        assert_eq!(IntStack::new().peek(), Err(Error::EmptyContainer));
    }

    #[test]
    fn test_peek_n() {
        let s = IntStack::from([1, 2, 3]);
        assert_eq!(s.peek_n(2), Ok(IntList::from([3, 2])));
        assert_eq!(s.peek_n(3), Ok(IntList::from([3, 2, 1])));
        assert_eq!(s.peek_n(0), Ok(IntList::new()));
        assert_eq!(s.peek_n(4), Err(Error::EmptyContainer));
        assert_eq!(s.len(), 3);
    }

    #[test]
    fn test_peek_at() {
        let s = IntStack::from([1, 2, 3]);
        assert_eq!(s.peek_at(0), Ok(3));
        assert_eq!(s.peek_at(2), Ok(1));
        assert_eq!(s.peek_at(3), Err(Error::EmptyContainer));
    }
}
