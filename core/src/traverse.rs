//! Elementwise traversals and folds.
//!
//! Each operation resolves its callback's shape through a trait bound, logs the
//! resolved [`ShapeDescriptor`] once, then walks the elements. The length is
//! fixed for the whole walk: `&self` is borrowed for the duration of the call,
//! so the callback cannot grow or shrink the sequence.

use allocator_api2::alloc::Allocator;

use crate::Sequence;
use crate::shape::{Elementwise, Fold, Predicate, Shape, ShapeDescriptor};

impl<T, A: Allocator> Sequence<T, A> {
    /// Builds a new sequence from the callback's result for every element,
    /// in index order.
    ///
    /// The result lives in a clone of this sequence's allocator.
    ///
    /// ```
    /// use jsarray_core::{seq, Sequence};
    ///
    /// let s = seq![10, 20, 30];
    /// assert_eq!(s.map(|v: &i32| v * 2), [20, 40, 60]);
    /// assert_eq!(s.map(|v: &i32, i: usize| *v + i as i32), [10, 21, 32]);
    /// assert_eq!(
    ///     s.map(|v: &i32, i: usize, all: &Sequence<i32>| all.len() - i),
    ///     [3, 2, 1],
    /// );
    /// ```
    pub fn map<F, S>(&self, mut callback: F) -> Sequence<F::Output, A>
    where
        F: Elementwise<T, A, S>,
        S: Shape,
        A: Clone,
    {
        tracing::trace!(
            operation = "map",
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        let mut result = Sequence::with_capacity_in(self.len(), self.allocator().clone());
        for (index, value) in self.iter().enumerate() {
            result.push(callback.invoke(value, index, self));
        }
        result
    }

    /// Maps every element to an iterable and concatenates the results.
    pub fn flat_map<F, S>(
        &self,
        mut callback: F,
    ) -> Sequence<<F::Output as IntoIterator>::Item, A>
    where
        F: Elementwise<T, A, S>,
        F::Output: IntoIterator,
        S: Shape,
        A: Clone,
    {
        tracing::trace!(
            operation = "flat_map",
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        let mut result = Sequence::new_in(self.allocator().clone());
        for (index, value) in self.iter().enumerate() {
            result.extend(callback.invoke(value, index, self));
        }
        result
    }

    /// Runs the callback on every element in index order, discarding its
    /// result.
    pub fn for_each<F, S>(&self, mut callback: F)
    where
        F: Elementwise<T, A, S>,
        S: Shape,
    {
        tracing::trace!(
            operation = "for_each",
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        for (index, value) in self.iter().enumerate() {
            let _ = callback.invoke(value, index, self);
        }
    }

    /// Clones the elements the predicate accepts into a new sequence, keeping
    /// their relative order.
    pub fn filter<F, S>(&self, mut predicate: F) -> Self
    where
        F: Predicate<T, A, S>,
        S: Shape,
        T: Clone,
        A: Clone,
    {
        tracing::trace!(
            operation = "filter",
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        let mut result = Sequence::new_in(self.allocator().clone());
        for (index, value) in self.iter().enumerate() {
            if predicate.invoke(value, index, self) {
                result.push(value.clone());
            }
        }
        result
    }

    /// Returns `true` if the predicate holds for every element.
    ///
    /// Stops at the first element that fails. An empty sequence satisfies any
    /// predicate.
    pub fn every<F, S>(&self, mut predicate: F) -> bool
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        tracing::trace!(
            operation = "every",
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        for (index, value) in self.iter().enumerate() {
            if !predicate.invoke(value, index, self) {
                tracing::trace!(operation = "every", index, "short-circuited");
                return false;
            }
        }
        true
    }

    /// Returns `true` if the predicate holds for at least one element.
    ///
    /// Stops at the first element that passes. An empty sequence satisfies no
    /// predicate.
    pub fn some<F, S>(&self, mut predicate: F) -> bool
    where
        F: Predicate<T, A, S>,
        S: Shape,
    {
        tracing::trace!(
            operation = "some",
            shape = %ShapeDescriptor::elementwise::<F, T, A, S>(),
            len = self.len(),
            "traversing sequence"
        );
        for (index, value) in self.iter().enumerate() {
            if predicate.invoke(value, index, self) {
                tracing::trace!(operation = "some", index, "short-circuited");
                return true;
            }
        }
        false
    }

    /// Left fold: threads `initial` through the callback from the first
    /// element to the last.
    ///
    /// The accumulator has the callback's result type, which need not be `T`.
    ///
    /// ```
    /// use jsarray_core::seq;
    ///
    /// let s = seq![1, 2, 3];
    /// assert_eq!(s.reduce(|acc: i64, v: &i32| acc + i64::from(*v), 0), 6);
    /// assert_eq!(
    ///     s.reduce(|acc: String, v: &i32| acc + &v.to_string(), String::new()),
    ///     "123",
    /// );
    /// ```
    pub fn reduce<F, S, Acc>(&self, mut callback: F, initial: Acc) -> Acc
    where
        F: Fold<T, A, S, Acc>,
        S: Shape,
    {
        tracing::trace!(
            operation = "reduce",
            shape = %ShapeDescriptor::fold::<F, T, A, S, Acc>(),
            len = self.len(),
            "traversing sequence"
        );
        self.iter()
            .enumerate()
            .fold(initial, |acc, (index, value)| {
                callback.invoke(acc, value, index, self)
            })
    }

    /// Right fold: like [`Sequence::reduce`] but from the last element to the
    /// first. The index passed to the callback is still the element's
    /// position in the sequence.
    pub fn reduce_right<F, S, Acc>(&self, mut callback: F, initial: Acc) -> Acc
    where
        F: Fold<T, A, S, Acc>,
        S: Shape,
    {
        tracing::trace!(
            operation = "reduce_right",
            shape = %ShapeDescriptor::fold::<F, T, A, S, Acc>(),
            len = self.len(),
            "traversing sequence"
        );
        self.iter()
            .enumerate()
            .rev()
            .fold(initial, |acc, (index, value)| {
                callback.invoke(acc, value, index, self)
            })
    }
}

#[cfg(test)]
#[path = "traverse_test.rs"]
mod traverse_test;
