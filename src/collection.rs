// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The [`IntCollection`] trait: a mutable container of `i32` that values can
//! be added to.
//!
//! [`IntStack::collect`](crate::IntStack::collect) appends into any
//! implementor, so the caller decides whether mapped values land in an
//! ordered [`IntList`](crate::IntList), a deduplicating
//! [`IntSet`](crate::IntSet) or a counting [`IntBag`](crate::IntBag).

/// A mutable collection of `i32`.
pub trait IntCollection {
    /// Adds `value`, returning `true` if the collection changed.
    ///
    /// Lists and bags always change; a set does not change when `value` is
    /// already present.
    fn add(&mut self, value: i32) -> bool;

    /// Number of elements (counting duplicates where the collection keeps them).
    fn len(&self) -> usize;

    /// Returns `true` if `len() == 0`.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Adds every value yielded by `values`, in order.
    ///
    /// Returns `true` if any individual `add` changed the collection.
    fn add_all<I: IntoIterator<Item = i32>>(&mut self, values: I) -> bool
    where
        Self: Sized,
    {
        let mut changed = false;
        for v in values {
            changed |= self.add(v);
        }
        changed
    }
}
