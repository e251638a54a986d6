//! Literal construction.

/// Creates a [`Sequence`](crate::Sequence) from its elements, like `vec!`.
///
/// | Form | Meaning |
/// |------|---------|
/// | `seq![]` | Empty sequence |
/// | `seq![a, b, c]` | The listed elements |
/// | `seq![value; n]` | `n` clones of `value` |
///
/// ```
/// use jsarray_core::{seq, Sequence};
///
/// let empty: Sequence<u8> = seq![];
/// assert!(empty.is_empty());
/// assert_eq!(seq![1, 2, 3], [1, 2, 3]);
/// assert_eq!(seq!["x"; 2], ["x", "x"]);
/// ```
#[macro_export]
macro_rules! seq {
    () => {
        $crate::Sequence::new()
    };
    ($value:expr; $len:expr) => {
        $crate::Sequence::from_elem($value, $len)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::Sequence::from([$($value),+])
    };
}
