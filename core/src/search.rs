//! Lookups: predicate searches, value searches, relative indexing and `join`.

use alloc::string::String;
use core::fmt::{self, Write};

use allocator_api2::alloc::Allocator;

use crate::Sequence;
use crate::shape::{Predicate, Shape, ShapeDescriptor};

impl<T, A: Allocator> Sequence<T, A> {
    /// Returns the first element the predicate accepts.
    pub fn find<F, S>(&self, predicate: F) -> Option<&T>
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        self.position("find", predicate).map(|index| &self[index])
    }

    /// Returns the index of the first element the predicate accepts.
    pub fn find_index<F, S>(&self, predicate: F) -> Option<usize>
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        self.position("find_index", predicate)
    }

    /// Returns the last element the predicate accepts.
    pub fn find_last<F, S>(&self, predicate: F) -> Option<&T>
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        self.rposition("find_last", predicate)
            .map(|index| &self[index])
    }

    /// Returns the index of the last element the predicate accepts.
    ///
    /// Elements are visited from the back; the index handed to the predicate
    /// is the element's position in the sequence.
    pub fn find_last_index<F, S>(&self, predicate: F) -> Option<usize>
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        self.rposition("find_last_index", predicate)
    }

    pub fn includes(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().position(|candidate| candidate == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.iter().rposition(|candidate| candidate == value)
    }

    /// Element at `index`, counting from the end when negative (`-1` is the
    /// last element).
    pub fn at(&self, index: isize) -> Option<&T> {
        let index = if index < 0 {
            self.len().checked_sub(index.unsigned_abs())?
        } else {
            usize::try_from(index).ok()?
        };
        self.get(index)
    }

    /// Renders every element with `Display`, separated by `separator`.
    pub fn join(&self, separator: &str) -> String
    where
        T: fmt::Display,
    {
        let mut out = String::new();
        for (index, value) in self.iter().enumerate() {
            if index > 0 {
                out.push_str(separator);
            }
            // Writing into a `String` only fails if `Display` does.
            let _ = write!(out, "{value}");
        }
        out
    }

    fn position<F, S>(&self, operation: &'static str, mut predicate: F) -> Option<usize>
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        tracing::trace!(
            operation,
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        let found = self
            .iter()
            .enumerate()
            .position(|(index, value)| predicate.invoke(value, index, self));
        tracing::trace!(operation, ?found, "search finished");
        found
    }

    fn rposition<F, S>(&self, operation: &'static str, mut predicate: F) -> Option<usize>
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        tracing::trace!(
            operation,
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        let found = self
            .iter()
            .enumerate()
            .rposition(|(index, value)| predicate.invoke(value, index, self));
        tracing::trace!(operation, ?found, "search finished");
        found
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;
