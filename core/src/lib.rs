//! A growable sequence with JavaScript-style higher-order traversals.
//!
//! Callbacks may take the element, the element and its index, or the element,
//! its index and the whole sequence. The shape is resolved at compile time;
//! see [`shape`].

#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

extern crate alloc;

#[macro_use]
mod macros;

pub mod error;
pub mod shape;

mod search;
mod sequence;
mod sort;
mod traverse;

pub use allocator_api2::alloc::{Allocator, Global};
pub use error::{Error, Result};
pub use sequence::Sequence;
pub use shape::{
    CallsWithValue, CallsWithValueAndIndex, CallsWithValueIndexAndView, Category, Elementwise,
    Fold, FoldsWithValue, FoldsWithValueAndIndex, FoldsWithValueIndexAndView, Predicate, Shape,
    ShapeDescriptor, ValueOnly, WithIndex, WithIndexAndView,
};
