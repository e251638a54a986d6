//! The sequence container.
//!
//! `Sequence` owns an `allocator_api2` vector and re-exposes the handful of
//! primitives the traversal operations need. It deliberately does not deref to
//! the vector: everything reachable from a `Sequence` is listed here.

use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};
use core::slice::{self, SliceIndex};

use allocator_api2::alloc::{Allocator, Global};
use allocator_api2::vec::{IntoIter, Vec};

use crate::{Error, Result};

/// An ordered, growable sequence of `T` stored with allocator `A`.
///
/// ```
/// use jsarray_core::{seq, Sequence};
///
/// let mut s: Sequence<i32> = seq![3, 1, 2];
/// s.push(0);
/// assert_eq!(s.len(), 4);
/// assert_eq!(*s.sort(), [0, 1, 2, 3]);
/// ```
#[derive(Clone)]
pub struct Sequence<T, A: Allocator = Global> {
    storage: Vec<T, A>,
}

// --- Construction (global allocator) ---

impl<T> Sequence<T> {
    pub fn new() -> Self {
        Self {
            storage: Vec::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_in(capacity, Global)
    }

    /// Creates a sequence of `len` copies of `value`.
    pub fn from_elem(value: T, len: usize) -> Self
    where
        T: Clone,
    {
        Self::from_elem_in(value, len, Global)
    }

    /// Creates a sequence of `len` default values.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        iter::repeat_with(T::default).take(len).collect()
    }
}

// --- Construction (any allocator) ---

impl<T, A: Allocator> Sequence<T, A> {
    pub fn new_in(alloc: A) -> Self {
        Self {
            storage: Vec::new_in(alloc),
        }
    }

    pub fn with_capacity_in(capacity: usize, alloc: A) -> Self {
        Self {
            storage: Vec::with_capacity_in(capacity, alloc),
        }
    }

    pub fn from_elem_in(value: T, len: usize, alloc: A) -> Self
    where
        T: Clone,
    {
        let mut storage = Vec::with_capacity_in(len, alloc);
        storage.resize(len, value);
        Self { storage }
    }

    /// Like [`Sequence::from_elem_in`], but reports allocation failure
    /// instead of aborting.
    pub fn try_from_elem_in(value: T, len: usize, alloc: A) -> Result<Self>
    where
        T: Clone,
    {
        let mut sequence = Self::new_in(alloc);
        sequence.try_reserve(len)?;
        sequence.storage.resize(len, value);
        Ok(sequence)
    }

    pub fn from_iter_in<I>(values: I, alloc: A) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut storage = Vec::with_capacity_in(values.size_hint().0, alloc);
        storage.extend(values);
        Self { storage }
    }

    /// Unwraps the backing vector.
    pub fn into_inner(self) -> Vec<T, A> {
        self.storage
    }

    pub fn allocator(&self) -> &A {
        self.storage.allocator()
    }
}

// --- Standard access ---

impl<T, A: Allocator> Sequence<T, A> {
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    pub fn try_reserve(&mut self, additional: usize) -> Result<()> {
        self.storage.try_reserve(additional).map_err(|err| {
            tracing::debug!(requested = additional, error = ?err, "allocation refused");
            Error::Reserve {
                requested: additional,
            }
        })
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.storage.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.storage.get_mut(index)
    }

    pub fn first(&self) -> Option<&T> {
        self.storage.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.storage.last()
    }

    pub fn push(&mut self, value: T) {
        self.storage.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.storage.pop()
    }

    pub fn clear(&mut self) {
        self.storage.clear();
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.storage.iter()
    }

    #[inline]
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.storage.iter_mut()
    }
}

// --- Trait impls ---

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, A: Allocator> fmt::Debug for Sequence<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, A, B> PartialEq<Sequence<U, B>> for Sequence<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &Sequence<U, B>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T, U, A, const N: usize> PartialEq<[U; N]> for Sequence<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, A> PartialEq<[U]> for Sequence<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, A> PartialEq<&[U]> for Sequence<T, A>
where
    T: PartialEq<U>,
    A: Allocator,
{
    fn eq(&self, other: &&[U]) -> bool {
        self.as_slice() == *other
    }
}

impl<T: Eq, A: Allocator> Eq for Sequence<T, A> {}

impl<T: Hash, A: Allocator> Hash for Sequence<T, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> Index<I> for Sequence<T, A> {
    type Output = I::Output;

    #[inline]
    fn index(&self, index: I) -> &I::Output {
        &self.as_slice()[index]
    }
}

impl<T, A: Allocator, I: SliceIndex<[T]>> IndexMut<I> for Sequence<T, A> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut I::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self::from_iter_in(values, Global)
    }
}

impl<T, A: Allocator> Extend<T> for Sequence<T, A> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, values: I) {
        self.storage.extend(values);
    }
}

impl<T, A: Allocator> IntoIterator for Sequence<T, A> {
    type Item = T;
    type IntoIter = IntoIter<T, A>;

    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a Sequence<T, A> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, A: Allocator> IntoIterator for &'a mut Sequence<T, A> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Sequence<T> {
    fn from(values: &[T]) -> Self {
        values.iter().cloned().collect()
    }
}

impl<T, A: Allocator> From<Vec<T, A>> for Sequence<T, A> {
    fn from(storage: Vec<T, A>) -> Self {
        Self { storage }
    }
}

#[cfg(test)]
#[path = "sequence_test.rs"]
mod sequence_test;
