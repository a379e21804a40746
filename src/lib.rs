// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `int-stack`
//!
//! A `no_std` (+ `alloc`) last-in-first-out stack specialized for `i32`,
//! **with no `unsafe`**.
//!
//! The core type, [`IntStack`], is a growable stack that stores its elements
//! unboxed and offers, besides `push`/`pop`/`peek`, functional-style bulk
//! operations: filtering ([`IntStack::select`], [`IntStack::reject`]),
//! mapping into another collection ([`IntStack::collect`]), conversions
//! ([`IntStack::to_list`], [`IntStack::to_sorted_list`], [`IntStack::to_set`],
//! [`IntStack::to_bag`]) and numeric aggregates ([`IntStack::sum`],
//! [`IntStack::average`], [`IntStack::median`], [`IntStack::min`],
//! [`IntStack::max`], [`IntStack::summary_statistics`]).
//!
//! The companion types are the outputs of those operations:
//!
//! - [`IntList`]: ordered, indexable, duplicates allowed;
//! - [`IntSet`]: unique elements;
//! - [`IntBag`]: a multiset with occurrence counts;
//! - [`IntSummaryStatistics`]: a single-pass `count`/`sum`/`min`/`max` snapshot.
//!
//! All three collections implement [`IntCollection`], the target trait for
//! [`IntStack::collect`].
//!
//! ## High-level semantics
//!
//! - The top of the stack is the most recently pushed element. Building a
//!   stack from a sequence pushes it in order, so the last element is on top.
//! - Anything that exposes several elements in order (iteration, `to_list`,
//!   `peek_n`, `pop_n`, `Display`) goes from the top down.
//! - Filtering, mapping and conversion never mutate the receiver.
//! - [`IntStack::sum`] is widened to `i64`; averages and medians are `f64`.
//!
//! ## Errors
//!
//! Stack operations fail only with [`Error::EmptyContainer`]: popping or
//! peeking more elements than the stack holds, or asking for the average,
//! median, min or max of an empty stack without a default.
//! [`IntBag::add_occurrences`] returns [`Error::CountOverflow`] rather than
//! wrapping its counters. None of these panic.
//!
//! The aggregate queries take the empty-stack default as an `Option`:
//! `None` means "fail on empty", `Some(d)` means "return `d` on empty".
//!
//! ## Example
//!
//! ```rust
//! use int_stack::{IntList, IntStack};
//!
//! let mut stack = IntStack::from([1, 2, 3, 4, 5]);
//! stack.push(6);
//! assert_eq!(stack.pop(), Ok(6));
//! assert_eq!(stack.peek_n(2), Ok(IntList::from([5, 4])));
//!
//! let evens = stack.select(|v| v % 2 == 0);
//! assert_eq!(evens, IntStack::from([2, 4]));
//!
//! assert_eq!(stack.sum(), 15);
//! assert_eq!(stack.median(None), Ok(3.0));
//! assert_eq!(stack.to_list(), IntList::from_to(5, 1));
//! ```
//!
//! ## Threading
//!
//! `IntStack` has no interior synchronization. It is `Send` and `Sync` like
//! any `Vec`-backed value; sharing it mutably across threads needs an
//! external lock.

#![forbid(unsafe_code)]
#![cfg_attr(not(test), no_std)]

extern crate alloc;

// Modules
mod bag;
mod collection;
mod error;
mod iter;
mod list;
mod set;
mod stack;
mod stats;

// Public exports (crate API surface)
pub use bag::IntBag;
pub use collection::IntCollection;
pub use error::Error;
pub use iter::{IntoIter, Iter};
pub use list::IntList;
pub use set::IntSet;
pub use stack::IntStack;
pub use stats::IntSummaryStatistics;
