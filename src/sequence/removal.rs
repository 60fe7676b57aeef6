//! Removing every occurrence of one value or of a list of values.
//!
//! Equality is `T`'s `PartialEq`. Removing from an empty sequence, or
//! removing values that do not occur, leaves the sequence unchanged.
//!
//! # Examples
//!
//! ```rust
//! use array_ext::sequence::Removal;
//!
//! let mut values = vec![0, 1, 2, 0, 3, 4, 5, 0, 0];
//! values.remove_all(&0);
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//!
//! let mut values = vec![0, 1, 2, 2, 0, 3, 4, 5, 0, 0];
//! values.remove_all_of(&[0, 2]);
//! assert_eq!(values, vec![1, 3, 4, 5]);
//! ```

/// Bulk removal by equality.
pub trait Removal<T: PartialEq> {
    /// Removes every element equal to `item`, keeping the order of the rest.
    fn remove_all(&mut self, item: &T);

    /// Removes every element equal to any element of `items`.
    ///
    /// An empty `items` is the identity. O(n·m) for `m = items.len()`.
    fn remove_all_of(&mut self, items: &[T]);

    /// Returns a copy without any element equal to `item`.
    fn without_all(&self, item: &T) -> Vec<T>
    where
        T: Clone;

    /// Returns a copy without any element equal to an element of `items`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Removal;
    ///
    /// let letters = vec!['a', 'b', 'c', 'a'];
    /// assert_eq!(letters.without_all_of(&['a', 'c']), vec!['b']);
    /// assert_eq!(letters, vec!['a', 'b', 'c', 'a']);
    /// ```
    fn without_all_of(&self, items: &[T]) -> Vec<T>
    where
        T: Clone;
}

impl<T: PartialEq> Removal<T> for Vec<T> {
    fn remove_all(&mut self, item: &T) {
        self.retain(|element| element != item);
    }

    fn remove_all_of(&mut self, items: &[T]) {
        if items.is_empty() {
            return;
        }
        self.retain(|element| !items.contains(element));
    }

    fn without_all(&self, item: &T) -> Vec<T>
    where
        T: Clone,
    {
        self.iter()
            .filter(|element| *element != item)
            .cloned()
            .collect()
    }

    fn without_all_of(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.iter()
            .filter(|element| !items.contains(element))
            .cloned()
            .collect()
    }
}
