//! jsarray - A growable sequence with JavaScript-style traversals
//!
//! # Overview
//!
//! [`Sequence`] wraps a vector and adds the higher-order operations of a
//! JavaScript array:
//!
//! - `map`, `flat_map`, `for_each`
//! - `filter`, `every`, `some`, `find` and friends
//! - `reduce`, `reduce_right`
//! - `sort`, `sort_with`, `to_sorted`, `to_sorted_with`
//!
//! Callbacks choose how much they want to see. An elementwise callback takes
//! `(value)`, `(value, index)` or `(value, index, view)`, where `view` is the
//! sequence being walked. A fold callback takes the accumulator first. The
//! shape is resolved at compile time; anything else is a compile error.
//!
//! # Quick Start
//!
//! ```
//! use jsarray::{Sequence, seq};
//!
//! let s = seq![3, 1, 2];
//!
//! assert_eq!(s.map(|x: &i32| x * 2), [6, 2, 4]);
//! assert_eq!(s.filter(|x: &i32| *x > 1), [3, 2]);
//! assert_eq!(s.reduce(|acc: i32, x: &i32| acc + x, 0), 6);
//!
//! let offsets = seq![10, 20, 30];
//! let shifted = offsets.map(|v: &i32, i: usize, _: &Sequence<i32>| v + i as i32);
//! assert_eq!(shifted, [10, 21, 32]);
//! ```
//!
//! Closures must spell out their parameter types so the compiler can pick a
//! shape. Sort comparators are the exception: they always take two elements.
//!
//! # Callable Objects
//!
//! Any type can act as a callback by implementing one of the capability
//! traits in [`shape`]:
//!
//! ```
//! use jsarray::{CallsWithValue, seq};
//!
//! struct Clamp(i32);
//!
//! impl CallsWithValue<i32> for Clamp {
//!     type Output = i32;
//!
//!     fn call(&mut self, value: &i32) -> i32 {
//!         (*value).min(self.0)
//!     }
//! }
//!
//! assert_eq!(seq![1, 5, 9].map(Clamp(4)), [1, 4, 4]);
//! ```
//!
//! # Allocators
//!
//! Sequences are generic over an [`Allocator`]; results of `map`, `filter`
//! and the other producing operations live in the same allocator as their
//! source. With `bumpalo`'s `allocator-api2` feature a `&Bump` works
//! directly:
//!
//! ```
//! use bumpalo::Bump;
//! use jsarray::Sequence;
//!
//! let arena = Bump::new();
//! let s = Sequence::from_iter_in([1, 2, 3], &arena);
//! let squares = s.map(|v: &i32| v * v);
//! assert_eq!(squares, [1, 4, 9]);
//! ```

// Re-export public API from jsarray_core
pub use jsarray_core::{Allocator, Global, Sequence, seq};

// Re-export callback shapes
pub use jsarray_core::shape::{
    self, CallsWithValue, CallsWithValueAndIndex, CallsWithValueIndexAndView, Category,
    Elementwise, Fold, FoldsWithValue, FoldsWithValueAndIndex, FoldsWithValueIndexAndView,
    Predicate, Shape, ShapeDescriptor, ValueOnly, WithIndex, WithIndexAndView,
};

// Re-export errors
pub use jsarray_core::error::{Error, Result};
