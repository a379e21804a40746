// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`IntStack`](crate::IntStack).
//!
//! Both iterators walk the stack from the top down, i.e. in the order `pop`
//! would return the elements. They support `DoubleEndedIterator` (walking
//! bottom-up from the back), `ExactSizeIterator` and `FusedIterator`.

// Crate imports
use crate::stack::IntStack;

// Core imports
use core::iter::FusedIterator;

/// Borrowing iterator returned by [`IntStack::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    pub(crate) inner: core::slice::Iter<'a, i32>,
}

impl Iterator for Iter<'_> {
    type Item = i32;
    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.inner.next_back().copied()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<i32> {
        self.inner.nth_back(n).copied()
    }
}

impl DoubleEndedIterator for Iter<'_> {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next().copied()
    }
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<i32> {
        self.inner.nth(n).copied()
    }
}
impl FusedIterator for Iter<'_> {}
impl ExactSizeIterator for Iter<'_> {}

/// Owned iterator returned by `IntStack::into_iter()`.
#[derive(Debug, Clone)]
pub struct IntoIter {
    pub(crate) inner: alloc::vec::IntoIter<i32>,
}

impl Iterator for IntoIter {
    type Item = i32;
    #[inline]
    fn next(&mut self) -> Option<i32> {
        self.inner.next_back()
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    #[inline]
    fn nth(&mut self, n: usize) -> Option<i32> {
        self.inner.nth_back(n)
    }
}

impl DoubleEndedIterator for IntoIter {
    #[inline]
    fn next_back(&mut self) -> Option<i32> {
        self.inner.next()
    }
    #[inline]
    fn nth_back(&mut self, n: usize) -> Option<i32> {
        self.inner.nth(n)
    }
}
impl FusedIterator for IntoIter {}
impl ExactSizeIterator for IntoIter {}

impl<'a> IntoIterator for &'a IntStack {
    type Item = i32;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for IntStack {
    type Item = i32;
    type IntoIter = IntoIter;
    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.items.into_iter(),
        }
    }
}
