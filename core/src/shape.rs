//! Callback shape resolution.
//!
//! Every traversal on [`Sequence`] accepts callbacks of several shapes:
//!
//! | Category | Shapes |
//! |----------|--------|
//! | elementwise | `(&T)`, `(&T, usize)`, `(&T, usize, &Sequence<T, A>)` |
//! | fold | `(Acc, &T)`, `(Acc, &T, usize)`, `(Acc, &T, usize, &Sequence<T, A>)` |
//!
//! The shape is picked by the trait solver, not at runtime. Each shape has a
//! marker type ([`ValueOnly`], [`WithIndex`], [`WithIndexAndView`]) and a
//! capability trait that callables implement. The dispatch traits
//! [`Elementwise`] and [`Fold`] are implemented once per marker on top of the
//! capability traits, so for a callable with a single call signature exactly
//! one marker matches and the compiler infers it. The chosen `invoke` is
//! monomorphized: there is no per-element branching on arity.
//!
//! Capability traits have blanket implementations for every `FnMut` of the
//! matching signature, which covers fn items, fn pointers and capturing
//! closures. Other types opt in by implementing a capability trait directly:
//!
//! ```
//! use jsarray_core::{seq, CallsWithValueAndIndex};
//!
//! struct Offset(i32);
//!
//! impl CallsWithValueAndIndex<i32> for Offset {
//!     type Output = i32;
//!
//!     fn call(&mut self, value: &i32, index: usize) -> i32 {
//!         value + self.0 * index as i32
//!     }
//! }
//!
//! let s = seq![10, 20, 30];
//! assert_eq!(s.map(Offset(100)), [10, 120, 230]);
//! ```
//!
//! # Limitations
//!
//! Closure parameters must be annotated. The trait solver picks the shape
//! from the closure's signature, so a closure that leaves its parameter types
//! to inference cannot be resolved:
//!
//! ```compile_fail
//! use jsarray_core::seq;
//!
//! let s = seq![1, 2, 3];
//! let doubled = s.map(|v| v * 2);
//! ```
//!
//! Sort comparators are exempt: their shape never varies, so
//! [`Sequence::sort_with`] takes a plain `FnMut(&T, &T) -> bool`.
//!
//! Unsupported arities are compile errors:
//!
//! ```compile_fail
//! use jsarray_core::{seq, Sequence};
//!
//! let s = seq![1, 2, 3];
//! s.map(|v: &i32, i: usize, view: &Sequence<i32>, extra: bool| *v);
//! ```
//!
//! So are predicates that do not return `bool`:
//!
//! ```compile_fail
//! use jsarray_core::seq;
//!
//! let s = seq![1, 2, 3];
//! s.filter(|v: &i32| *v);
//! ```

use core::any::type_name;
use core::fmt;
use core::ops::RangeInclusive;

use allocator_api2::alloc::{Allocator, Global};
use static_assertions::{assert_impl_all, assert_not_impl_any, const_assert_eq};

use crate::{Error, Result, Sequence};

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ValueOnly {}
    impl Sealed for super::WithIndex {}
    impl Sealed for super::WithIndexAndView {}
}

// ============================================================================
// Shape markers
// ============================================================================

/// Type-level tag for a callback shape.
///
/// `ARITY` counts the element-side arguments only; fold callbacks take one
/// more (the accumulator).
pub trait Shape: sealed::Sealed {
    const ARITY: usize;
    const NAME: &'static str;
}

/// The callback takes the element.
pub enum ValueOnly {}

/// The callback takes the element and its index.
pub enum WithIndex {}

/// The callback takes the element, its index and the sequence being traversed.
pub enum WithIndexAndView {}

impl Shape for ValueOnly {
    const ARITY: usize = 1;
    const NAME: &'static str = "value";
}

impl Shape for WithIndex {
    const ARITY: usize = 2;
    const NAME: &'static str = "value, index";
}

impl Shape for WithIndexAndView {
    const ARITY: usize = 3;
    const NAME: &'static str = "value, index, view";
}

// ============================================================================
// Capability traits: elementwise
// ============================================================================

/// A callable taking `(&T)`.
pub trait CallsWithValue<T> {
    type Output;

    fn call(&mut self, value: &T) -> Self::Output;
}

/// A callable taking `(&T, usize)`.
pub trait CallsWithValueAndIndex<T> {
    type Output;

    fn call(&mut self, value: &T, index: usize) -> Self::Output;
}

/// A callable taking `(&T, usize, &Sequence<T, A>)`.
pub trait CallsWithValueIndexAndView<T, A: Allocator = Global> {
    type Output;

    fn call(&mut self, value: &T, index: usize, view: &Sequence<T, A>) -> Self::Output;
}

impl<F, T, R> CallsWithValue<T> for F
where
    F: FnMut(&T) -> R,
{
    type Output = R;

    #[inline(always)]
    fn call(&mut self, value: &T) -> R {
        self(value)
    }
}

impl<F, T, R> CallsWithValueAndIndex<T> for F
where
    F: FnMut(&T, usize) -> R,
{
    type Output = R;

    #[inline(always)]
    fn call(&mut self, value: &T, index: usize) -> R {
        self(value, index)
    }
}

impl<F, T, A, R> CallsWithValueIndexAndView<T, A> for F
where
    F: FnMut(&T, usize, &Sequence<T, A>) -> R,
    A: Allocator,
{
    type Output = R;

    #[inline(always)]
    fn call(&mut self, value: &T, index: usize, view: &Sequence<T, A>) -> R {
        self(value, index, view)
    }
}

// ============================================================================
// Capability traits: fold
// ============================================================================

/// A fold callable taking `(Acc, &T)`.
pub trait FoldsWithValue<T, Acc> {
    fn call(&mut self, acc: Acc, value: &T) -> Acc;
}

/// A fold callable taking `(Acc, &T, usize)`.
pub trait FoldsWithValueAndIndex<T, Acc> {
    fn call(&mut self, acc: Acc, value: &T, index: usize) -> Acc;
}

/// A fold callable taking `(Acc, &T, usize, &Sequence<T, A>)`.
pub trait FoldsWithValueIndexAndView<T, A: Allocator, Acc> {
    fn call(&mut self, acc: Acc, value: &T, index: usize, view: &Sequence<T, A>) -> Acc;
}

impl<F, T, Acc> FoldsWithValue<T, Acc> for F
where
    F: FnMut(Acc, &T) -> Acc,
{
    #[inline(always)]
    fn call(&mut self, acc: Acc, value: &T) -> Acc {
        self(acc, value)
    }
}

impl<F, T, Acc> FoldsWithValueAndIndex<T, Acc> for F
where
    F: FnMut(Acc, &T, usize) -> Acc,
{
    #[inline(always)]
    fn call(&mut self, acc: Acc, value: &T, index: usize) -> Acc {
        self(acc, value, index)
    }
}

impl<F, T, A, Acc> FoldsWithValueIndexAndView<T, A, Acc> for F
where
    F: FnMut(Acc, &T, usize, &Sequence<T, A>) -> Acc,
    A: Allocator,
{
    #[inline(always)]
    fn call(&mut self, acc: Acc, value: &T, index: usize, view: &Sequence<T, A>) -> Acc {
        self(acc, value, index, view)
    }
}

// ============================================================================
// Dispatch traits
// ============================================================================

/// An elementwise callback whose shape `S` has been resolved.
///
/// Never implement this directly; implement one of the capability traits
/// instead and let the blanket implementations pick the marker.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an elementwise callback over `{T}`",
    label = "unsupported callback shape",
    note = "elementwise callbacks take `(&T)`, `(&T, usize)` or `(&T, usize, &Sequence<T, A>)`; closure parameters must be annotated"
)]
pub trait Elementwise<T, A: Allocator, S: Shape> {
    type Output;

    fn invoke(&mut self, value: &T, index: usize, view: &Sequence<T, A>) -> Self::Output;
}

impl<F, T, A> Elementwise<T, A, ValueOnly> for F
where
    F: CallsWithValue<T>,
    A: Allocator,
{
    type Output = F::Output;

    #[inline(always)]
    fn invoke(&mut self, value: &T, _index: usize, _view: &Sequence<T, A>) -> Self::Output {
        CallsWithValue::call(self, value)
    }
}

impl<F, T, A> Elementwise<T, A, WithIndex> for F
where
    F: CallsWithValueAndIndex<T>,
    A: Allocator,
{
    type Output = F::Output;

    #[inline(always)]
    fn invoke(&mut self, value: &T, index: usize, _view: &Sequence<T, A>) -> Self::Output {
        CallsWithValueAndIndex::call(self, value, index)
    }
}

impl<F, T, A> Elementwise<T, A, WithIndexAndView> for F
where
    F: CallsWithValueIndexAndView<T, A>,
    A: Allocator,
{
    type Output = F::Output;

    #[inline(always)]
    fn invoke(&mut self, value: &T, index: usize, view: &Sequence<T, A>) -> Self::Output {
        CallsWithValueIndexAndView::call(self, value, index, view)
    }
}

/// An elementwise callback returning `bool`.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a predicate over `{T}`",
    label = "predicate callbacks must return `bool`",
    note = "predicates take `(&T)`, `(&T, usize)` or `(&T, usize, &Sequence<T, A>)` and return `bool`"
)]
pub trait Predicate<T, A: Allocator, S: Shape>: Elementwise<T, A, S, Output = bool> {}

impl<F, T, A, S> Predicate<T, A, S> for F
where
    F: Elementwise<T, A, S, Output = bool>,
    A: Allocator,
    S: Shape,
{
}

/// A fold callback whose shape `S` has been resolved.
///
/// The accumulator type is the callback's result type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a fold callback over `{T}` with accumulator `{Acc}`",
    label = "unsupported fold callback shape",
    note = "fold callbacks take `(Acc, &T)`, `(Acc, &T, usize)` or `(Acc, &T, usize, &Sequence<T, A>)` and return `Acc`"
)]
pub trait Fold<T, A: Allocator, S: Shape, Acc> {
    fn invoke(&mut self, acc: Acc, value: &T, index: usize, view: &Sequence<T, A>) -> Acc;
}

impl<F, T, A, Acc> Fold<T, A, ValueOnly, Acc> for F
where
    F: FoldsWithValue<T, Acc>,
    A: Allocator,
{
    #[inline(always)]
    fn invoke(&mut self, acc: Acc, value: &T, _index: usize, _view: &Sequence<T, A>) -> Acc {
        FoldsWithValue::call(self, acc, value)
    }
}

impl<F, T, A, Acc> Fold<T, A, WithIndex, Acc> for F
where
    F: FoldsWithValueAndIndex<T, Acc>,
    A: Allocator,
{
    #[inline(always)]
    fn invoke(&mut self, acc: Acc, value: &T, index: usize, _view: &Sequence<T, A>) -> Acc {
        FoldsWithValueAndIndex::call(self, acc, value, index)
    }
}

impl<F, T, A, Acc> Fold<T, A, WithIndexAndView, Acc> for F
where
    F: FoldsWithValueIndexAndView<T, A, Acc>,
    A: Allocator,
{
    #[inline(always)]
    fn invoke(&mut self, acc: Acc, value: &T, index: usize, view: &Sequence<T, A>) -> Acc {
        FoldsWithValueIndexAndView::call(self, acc, value, index, view)
    }
}

// ============================================================================
// Descriptors
// ============================================================================

/// Traversal category of a callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Elementwise,
    Fold,
}

impl Category {
    /// Number of positional arguments a callback of this category may take,
    /// accumulator included.
    pub const fn arities(self) -> RangeInclusive<usize> {
        match self {
            Category::Elementwise => 1..=3,
            Category::Fold => 2..=4,
        }
    }

    pub const fn legal_shapes(self) -> &'static str {
        match self {
            Category::Elementwise => "(value), (value, index), (value, index, view)",
            Category::Fold => "(acc, value), (acc, value, index), (acc, value, index, view)",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Elementwise => f.write_str("elementwise"),
            Category::Fold => f.write_str("fold"),
        }
    }
}

/// The resolved shape of a callback: how many arguments it takes and what it
/// returns.
///
/// Operations build one per call (never per element) to log what they are
/// about to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeDescriptor {
    category: Category,
    arity: usize,
    output: &'static str,
}

impl ShapeDescriptor {
    /// Describes a callback from runtime facts.
    ///
    /// Fails with [`Error::UnsupportedArity`] when `arity` is outside
    /// [`Category::arities`].
    pub fn new(category: Category, arity: usize, output: &'static str) -> Result<Self> {
        if !category.arities().contains(&arity) {
            return Err(Error::unsupported_arity(category, arity));
        }
        Ok(Self {
            category,
            arity,
            output,
        })
    }

    /// Describes the elementwise callback type `F` resolved with shape `S`.
    pub fn elementwise<F, T, A, S>() -> Self
    where
        F: Elementwise<T, A, S>,
        A: Allocator,
        S: Shape,
    {
        Self {
            category: Category::Elementwise,
            arity: S::ARITY,
            output: type_name::<F::Output>(),
        }
    }

    /// Describes the fold callback type `F` resolved with shape `S`.
    pub fn fold<F, T, A, S, Acc>() -> Self
    where
        F: Fold<T, A, S, Acc>,
        A: Allocator,
        S: Shape,
    {
        Self {
            category: Category::Fold,
            arity: S::ARITY + 1,
            output: type_name::<Acc>(),
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Positional argument count, accumulator included for folds.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Type name of the callback's result.
    pub fn output(&self) -> &'static str {
        self.output
    }
}

impl fmt::Display for ShapeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{} -> {}", self.category, self.arity, self.output)
    }
}

impl<T, A: Allocator> Sequence<T, A> {
    /// Resolves the shape `callback` would be invoked with by the elementwise
    /// operations of this sequence.
    pub fn shape_of<F, S>(&self, _callback: &F) -> ShapeDescriptor
    where
        F: Elementwise<T, A, S>,
        S: Shape,
    {
        ShapeDescriptor::elementwise::<F, T, A, S>()
    }

    /// Resolves the shape `callback` would be invoked with by
    /// [`Sequence::reduce`] and [`Sequence::reduce_right`].
    pub fn fold_shape_of<F, S, Acc>(&self, _callback: &F) -> ShapeDescriptor
    where
        F: Fold<T, A, S, Acc>,
        S: Shape,
    {
        ShapeDescriptor::fold::<F, T, A, S, Acc>()
    }
}

const_assert_eq!(ValueOnly::ARITY, 1);
const_assert_eq!(WithIndexAndView::ARITY, 3);
assert_impl_all!(fn(&u8) -> bool: Elementwise<u8, Global, ValueOnly>, Predicate<u8, Global, ValueOnly>);
assert_impl_all!(fn(u8, &u8, usize) -> u8: Fold<u8, Global, WithIndex, u8>);
assert_not_impl_any!(fn(&u8, usize, &Sequence<u8>, usize) -> u8: Elementwise<u8, Global, WithIndexAndView>);

#[cfg(test)]
#[path = "shape_test.rs"]
mod shape_test;
