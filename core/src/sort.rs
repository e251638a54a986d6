//! Sorting and reversal.
//!
//! All sorts are unstable: equal elements may be reordered. A custom ordering
//! is given as a "less than" predicate that must be a strict weak ordering
//! (irreflexive, transitive, with transitive incomparability). Anything else
//! leaves the sequence in an unspecified order and may panic.

use core::cmp::Ordering;

use allocator_api2::alloc::Allocator;

use crate::Sequence;

impl<T, A: Allocator> Sequence<T, A> {
    /// Sorts in place by `T`'s ordering and returns the same sequence.
    pub fn sort(&mut self) -> &mut Self
    where
        T: Ord,
    {
        tracing::trace!(operation = "sort", len = self.len(), "sorting sequence");
        self.as_mut_slice().sort_unstable();
        self
    }

    /// Sorts in place so that no element is `less` than the one before it, and
    /// returns the same sequence.
    ///
    /// ```
    /// use jsarray_core::seq;
    ///
    /// let mut s = seq![1, 3, 2];
    /// assert_eq!(*s.sort_with(|a, b| a > b), [3, 2, 1]);
    /// ```
    pub fn sort_with<F>(&mut self, mut less: F) -> &mut Self
    where
        F: FnMut(&T, &T) -> bool,
    {
        tracing::trace!(operation = "sort_with", len = self.len(), "sorting sequence");
        self.as_mut_slice()
            .sort_unstable_by(|a, b| ordering(&mut less, a, b));
        self
    }

    /// Returns a sorted copy, leaving this sequence untouched.
    pub fn to_sorted(&self) -> Self
    where
        T: Ord + Clone,
        A: Clone,
    {
        let mut copy = self.clone();
        copy.sort();
        copy
    }

    /// Returns a copy sorted by `less`, leaving this sequence untouched.
    pub fn to_sorted_with<F>(&self, less: F) -> Self
    where
        F: FnMut(&T, &T) -> bool,
        T: Clone,
        A: Clone,
    {
        let mut copy = self.clone();
        copy.sort_with(less);
        copy
    }

    /// Reverses the order in place and returns the same sequence.
    pub fn reverse(&mut self) -> &mut Self {
        self.as_mut_slice().reverse();
        self
    }

    pub fn to_reversed(&self) -> Self
    where
        T: Clone,
        A: Clone,
    {
        let mut copy = self.clone();
        copy.reverse();
        copy
    }
}

fn ordering<T>(less: &mut impl FnMut(&T, &T) -> bool, a: &T, b: &T) -> Ordering {
    if less(a, b) {
        Ordering::Less
    } else if less(b, a) {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

#[cfg(test)]
#[path = "sort_test.rs"]
mod sort_test;
