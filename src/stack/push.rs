// This file is part of int-stack.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::stack::IntStack;

impl IntStack {
    /// Pushes `value` as the new top.
    #[inline]
    pub fn push(&mut self, value: i32) {
        self.items.push(value);
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::IntStack;

    #[test]
    fn test_push_grows_and_sets_top() {
        let mut s = IntStack::new();
        s.push(1);
        s.push(-1);
        assert_eq!(s.len(), 2);
        assert_eq!(s.peek(), Ok(-1));
    }

    #[test]
    fn test_push_past_initial_capacity() {
        let mut s = IntStack::with_capacity(1);
        for v in 0..100 {
            s.push(v);
        }
        assert_eq!(s.len(), 100);
        assert_eq!(s.peek(), Ok(99));
    }
}
