// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::IntStack;

impl IntStack {
    /// Returns `true` if `value` is anywhere in the stack.
    #[inline]
    pub fn contains(&self, value: i32) -> bool {
        self.items.contains(&value)
    }

    /// Number of elements satisfying `predicate`.
    pub fn count<P: FnMut(i32) -> bool>(&self, mut predicate: P) -> usize {
        self.iter().filter(|&v| predicate(v)).count()
    }

    /// `true` if at least one element satisfies `predicate`; `false` when empty.
    #[inline]
    pub fn any_satisfy<P: FnMut(i32) -> bool>(&self, predicate: P) -> bool {
        self.iter().any(predicate)
    }

    /// `true` if every element satisfies `predicate`; `true` when empty.
    #[inline]
    pub fn all_satisfy<P: FnMut(i32) -> bool>(&self, predicate: P) -> bool {
        self.iter().all(predicate)
    }

    /// `true` if no element satisfies `predicate`; `true` when empty.
    #[inline]
    pub fn none_satisfy<P: FnMut(i32) -> bool>(&self, predicate: P) -> bool {
        !self.any_satisfy(predicate)
    }

    /// First element from the top that satisfies `predicate`.
    pub fn detect<P: FnMut(i32) -> bool>(&self, mut predicate: P) -> Option<i32> {
        self.iter().find(|&v| predicate(v))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::IntStack;

    #[test]
    fn test_contains_and_count() {
        let s = IntStack::from([1, 2, 2, 3]);
        assert!(s.contains(2));
        assert!(!s.contains(4));
        assert_eq!(s.count(|v| v == 2), 2);
        assert_eq!(s.count(|v| v > 10), 0);
    }

    #[test]
    fn test_satisfy_family() {
        let s = IntStack::from([2, 4, 6]);
        assert!(s.all_satisfy(|v| v % 2 == 0));
        assert!(s.any_satisfy(|v| v == 4));
        assert!(s.none_satisfy(|v| v < 0));
        assert!(!s.none_satisfy(|v| v == 6));
    }

    #[test]
    fn test_satisfy_on_empty() {
        let s = IntStack::new();
        assert!(!s.any_satisfy(|_| true));
        assert!(s.all_satisfy(|_| false));
        assert!(s.none_satisfy(|_| true));
    }

    #[test]
    fn test_detect_searches_from_top() {
        let s = IntStack::from([2, 3, 4, 5]);
        assert_eq!(s.detect(|v| v % 2 == 0), Some(4));
        assert_eq!(s.detect(|v| v > 9), None);
    }
}
