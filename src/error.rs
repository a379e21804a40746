// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for [`IntStack`](crate::IntStack).
//!
//! Every failure is a pure function of the current size and the arguments
//! given, so the error is `Copy` and carries no payload.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`IntStack`](crate::IntStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation needed more elements than the container holds.
    ///
    /// Returned by `pop`/`peek` on an empty stack, by `pop_n`/`peek_n`/`peek_at`
    /// when the request reaches past the bottom, and by `average`, `median`,
    /// `min` and `max` on an empty stack when no default was supplied.
    EmptyContainer,
    /// An occurrence count would exceed `usize::MAX`.
    ///
    /// Returned by [`IntBag::add_occurrences`](crate::IntBag::add_occurrences);
    /// the bag is left unchanged.
    CountOverflow,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyContainer => f.write_str("not enough elements in container"),
            Self::CountOverflow => f.write_str("occurrence count overflow"),
        }
    }
}

impl CoreError for Error {}

#[cfg(test)]
mod tests {
    // Imports
    use crate::Error;
    use alloc::{boxed::Box, string::ToString};
    use core::error::Error as CoreError;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            Error::EmptyContainer.to_string(),
            "not enough elements in container"
        );
        assert_eq!(Error::CountOverflow.to_string(), "occurrence count overflow");
    }

    #[test]
    fn test_boxes_as_core_error_without_source() {
        let boxed: Box<dyn CoreError> = Box::new(Error::EmptyContainer);
        assert!(boxed.source().is_none());
        assert_eq!(boxed.to_string(), "not enough elements in container");
    }
}
