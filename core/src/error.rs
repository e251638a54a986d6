//! Runtime errors.
//!
//! Callback shape and result-type mismatches never reach this module: they are
//! rejected by the compiler through unsatisfied trait bounds (see
//! [`crate::shape`]). What remains are the failures that can only be observed
//! while the program runs.

use thiserror::Error;

use crate::shape::Category;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A shape descriptor was requested for an arity the category does not
    /// support.
    #[error("{category} callbacks cannot take {arity} argument(s), expected one of {expected}")]
    UnsupportedArity {
        category: Category,
        arity: usize,
        expected: &'static str,
    },

    /// The allocator refused to provide storage for the requested elements.
    #[error("failed to reserve storage for {requested} element(s)")]
    Reserve { requested: usize },
}

impl Error {
    pub(crate) fn unsupported_arity(category: Category, arity: usize) -> Self {
        Error::UnsupportedArity {
            category,
            arity,
            expected: category.legal_shapes(),
        }
    }
}
