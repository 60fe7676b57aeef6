//! Error types for checked sequence operations.
//!
//! The safe operations in this crate never fail; they fall back to a no-op.
//! The checked variants report why the operation was refused instead.

/// Represents the reasons a [`try_swap`](super::Insertion::try_swap) is refused.
///
/// # Examples
///
/// ```rust
/// use array_ext::sequence::{Insertion, SwapError};
///
/// let mut values = vec![1, 2, 3];
/// let error = values.try_swap(0, 7).unwrap_err();
/// assert_eq!(error, SwapError::IndexOutOfBounds { index: 7, length: 3 });
/// assert_eq!(format!("{error}"), "swap index 7 is out of bounds for length 3");
/// assert_eq!(values, vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapError {
    /// One of the indices is not smaller than the sequence length.
    IndexOutOfBounds {
        /// The first offending index.
        index: usize,
        /// The length of the sequence at the time of the call.
        length: usize,
    },
    /// Both indices refer to the same position.
    SameIndex {
        /// The index given for both positions.
        index: usize,
    },
}

impl std::fmt::Display for SwapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "swap index {index} is out of bounds for length {length}"
            ),
            Self::SameIndex { index } => {
                write!(formatter, "swap positions are both index {index}")
            }
        }
    }
}

impl std::error::Error for SwapError {}
