// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `IntStack` type and its inherent API.
//!
//! `IntStack` is a growable last-in-first-out container specialized for `i32`.
//! The operations are split by concern into submodules: construction, push,
//! pop, peek, filtering, transformation, conversion, arithmetic and queries.

mod collect;
mod convert;
mod from;
mod math;
mod peek;
mod pop;
mod push;
mod query;
mod select;

// Crate imports
use crate::iter::Iter;

// Alloc imports
use alloc::vec::Vec;

// Core imports
use core::fmt;

/// A growable LIFO stack of `i32`.
///
/// The *top* of the stack is the most recently pushed element. Every method
/// that exposes several elements (iteration, [`to_list`](IntStack::to_list),
/// [`peek_n`](IntStack::peek_n), [`pop_n`](IntStack::pop_n), `Display`)
/// does so from the top down, i.e. in pop order.
///
/// # Construction
///
/// Building a stack from a sequence pushes the elements in order, so the
/// last element becomes the top:
///
/// ```rust
/// use int_stack::IntStack;
///
/// let mut s = IntStack::from([1, 2, 3, 4, 5]);
/// assert_eq!(s.pop(), Ok(5));
/// assert_eq!(IntStack::from(1..=5), IntStack::with_all([1, 2, 3, 4, 5]));
/// ```
///
/// # Failure model
///
/// Size-dependent operations never panic. `pop`, `peek`, `pop_n`, `peek_n`,
/// `peek_at`, `average`, `median`, `min` and `max` return
/// [`Error::EmptyContainer`](crate::Error::EmptyContainer) when the stack
/// cannot satisfy the request. The aggregate queries take an optional default
/// that is returned instead of the error when the stack is empty:
///
/// ```rust
/// use int_stack::{Error, IntStack};
///
/// let empty = IntStack::new();
/// assert_eq!(empty.max(None), Err(Error::EmptyContainer));
/// assert_eq!(empty.max(Some(-1)), Ok(-1));
/// ```
///
/// # Non-mutating bulk operations
///
/// [`select`](IntStack::select), [`reject`](IntStack::reject),
/// [`collect`](IntStack::collect) and the `to_*` conversions all return new,
/// independent containers and leave the receiver untouched.
///
/// # Complexity
///
/// - `push`, `pop`, `peek`: amortized `O(1)`.
/// - `pop_n`, `peek_n`: `O(count)`.
/// - Filtering, mapping, conversions and aggregates: `O(len)`, except
///   `median` and `to_sorted_list` which sort a copy in `O(len log len)`.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct IntStack {
    // Bottom at index 0, top at `len - 1`.
    pub(crate) items: Vec<i32>,
}

impl IntStack {
    /// Creates an empty stack.
    #[inline]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` pushes before reallocating.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns how many elements fit before the next reallocation.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates the elements by value from the top down, without removing them.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.items.iter(),
        }
    }
}

impl fmt::Debug for IntStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntStack")
            .field("len", &self.items.len())
            .field("top_down", &DebugTopDown(self))
            .finish()
    }
}

struct DebugTopDown<'a>(&'a IntStack);

impl fmt::Debug for DebugTopDown<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Renders the elements top-down, e.g. `[3, 2, 1]`.
impl fmt::Display for IntStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::list::write_seq(f, self.iter())
    }
}
