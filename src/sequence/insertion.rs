//! Prepending and index-safe swapping.
//!
//! # Examples
//!
//! ```rust
//! use array_ext::sequence::Insertion;
//!
//! let mut values = vec![2, 3, 4, 5];
//! values.prepend(1);
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//!
//! values.safe_swap(3, 0);
//! assert_eq!(values, vec![4, 2, 3, 1, 5]);
//!
//! // Out of range: nothing happens
//! values.safe_swap(1, 12);
//! assert_eq!(values, vec![4, 2, 3, 1, 5]);
//! ```

use super::error::SwapError;

/// Insertion at the front and swaps that tolerate invalid indices.
pub trait Insertion<T> {
    /// Inserts `element` at index 0, shifting every existing element right.
    ///
    /// The length always grows by exactly one. O(n).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Insertion;
    ///
    /// let mut values: Vec<i32> = Vec::new();
    /// values.prepend(7);
    /// assert_eq!(values, vec![7]);
    /// ```
    fn prepend(&mut self, element: T);

    /// Inserts every element of `elements` at the front, keeping their
    /// iteration order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Insertion;
    ///
    /// let mut values = vec![4, 5];
    /// values.prepend_all([1, 2, 3]);
    /// assert_eq!(values, vec![1, 2, 3, 4, 5]);
    /// ```
    fn prepend_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>;

    /// Exchanges the elements at `from` and `to`, or reports why it cannot.
    ///
    /// # Errors
    ///
    /// - [`SwapError::IndexOutOfBounds`] if either index is `>= len`
    ///   (`from` is checked first)
    /// - [`SwapError::SameIndex`] if `from == to`
    ///
    /// The sequence is unchanged whenever an error is returned.
    fn try_swap(&mut self, from: usize, to: usize) -> Result<(), SwapError>;

    /// Exchanges the elements at `from` and `to`.
    ///
    /// If either index is out of bounds or both are equal, the sequence is
    /// left unchanged. Never panics, including on an empty sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Insertion;
    ///
    /// let mut empty: Vec<i32> = Vec::new();
    /// empty.safe_swap(1, 3);
    /// assert!(empty.is_empty());
    /// ```
    fn safe_swap(&mut self, from: usize, to: usize) {
        if let Err(_error) = self.try_swap(from, to) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                target: "array_ext::insertion",
                from,
                to,
                error = %_error,
                "safe_swap skipped"
            );
        }
    }
}

impl<T> Insertion<T> for Vec<T> {
    #[inline]
    fn prepend(&mut self, element: T) {
        self.insert(0, element);
    }

    fn prepend_all<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = T>,
    {
        drop(self.splice(0..0, elements));
    }

    fn try_swap(&mut self, from: usize, to: usize) -> Result<(), SwapError> {
        let length = self.len();
        if let Some(index) = [from, to].into_iter().find(|&index| index >= length) {
            return Err(SwapError::IndexOutOfBounds { index, length });
        }
        if from == to {
            return Err(SwapError::SameIndex { index: from });
        }
        self.swap(from, to);
        Ok(())
    }
}
