//! Duplicate removal that keeps the first occurrence of each value.
//!
//! # Complexity
//!
//! | Method                              | Bound on `T` / key   | Time           |
//! |-------------------------------------|----------------------|----------------|
//! | `remove_duplicates`                 | `Eq + Hash`          | O(n) amortized |
//! | `without_duplicates`                | `Eq + Hash + Clone`  | O(n) amortized |
//! | `remove_duplicates_by_key`          | key `Eq + Hash`      | O(n) amortized |
//! | `without_duplicates_by_key`         | key `Eq + Hash`      | O(n) amortized |
//! | `remove_duplicates_by_equality`     | `PartialEq`          | O(n²)          |
//! | `without_duplicates_by_equality`    | `PartialEq + Clone`  | O(n²)          |
//!
//! The hashed methods track seen values in an auxiliary set. The equality
//! methods compare each element against every earlier kept element, for
//! element types that cannot be hashed (such as floats). Under `PartialEq`
//! a value that is not equal to itself (`NaN`) is never a duplicate.
//!
//! # Examples
//!
//! ```rust
//! use array_ext::sequence::Deduplication;
//!
//! let mut values = vec![1, 1, 2, 2, 3, 3, 3, 4, 5];
//! values.remove_duplicates();
//! assert_eq!(values, vec![1, 2, 3, 4, 5]);
//!
//! let letters = vec!["h", "e", "l", "l", "o"];
//! assert_eq!(letters.without_duplicates(), vec!["h", "e", "l", "o"]);
//! ```

use std::hash::Hash;

use super::hashing::{SeenSet, first_occurrence_flags};

/// Keeps only the first occurrence of each distinct value.
///
/// Every method preserves the relative order of the elements it keeps and
/// is idempotent.
pub trait Deduplication<T> {
    /// Removes later duplicates in place, judged by `Eq + Hash`.
    ///
    /// Does not require `T: Clone`.
    fn remove_duplicates(&mut self)
    where
        T: Eq + Hash;

    /// Returns a copy without later duplicates, judged by `Eq + Hash`.
    fn without_duplicates(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone;

    /// Removes every element whose projected key was already seen.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Deduplication;
    ///
    /// let mut words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
    /// words.remove_duplicates_by_key(|word| word.chars().next());
    /// assert_eq!(words, vec!["apple", "banana", "cherry"]);
    /// ```
    fn remove_duplicates_by_key<K, F>(&mut self, key: F)
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Returns a copy keeping the first element for each projected key.
    fn without_duplicates_by_key<K, F>(&self, key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K;

    /// Removes later duplicates in place using only `PartialEq`. O(n²).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Deduplication;
    ///
    /// let mut readings = vec![0.5, 1.0, 0.5, 2.0, 1.0];
    /// readings.remove_duplicates_by_equality();
    /// assert_eq!(readings, vec![0.5, 1.0, 2.0]);
    /// ```
    fn remove_duplicates_by_equality(&mut self)
    where
        T: PartialEq;

    /// Returns a copy without later duplicates using only `PartialEq`. O(n²).
    fn without_duplicates_by_equality(&self) -> Vec<T>
    where
        T: PartialEq + Clone;
}

/// Keeps the elements whose flag is `true`. `flags` must have one entry per
/// element.
fn retain_flagged<T>(elements: &mut Vec<T>, flags: Vec<bool>) {
    debug_assert_eq!(elements.len(), flags.len());
    let mut flags = flags.into_iter();
    elements.retain(|_| flags.next().unwrap_or(true));
}

impl<T> Deduplication<T> for Vec<T> {
    fn remove_duplicates(&mut self)
    where
        T: Eq + Hash,
    {
        let flags = first_occurrence_flags(self.as_slice(), |element| element);
        retain_flagged(self, flags);
    }

    fn without_duplicates(&self) -> Vec<T>
    where
        T: Eq + Hash + Clone,
    {
        let mut seen = SeenSet::with_capacity(self.len());
        self.iter()
            .filter(|element| seen.first_sight(*element))
            .cloned()
            .collect()
    }

    fn remove_duplicates_by_key<K, F>(&mut self, key: F)
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let flags = first_occurrence_flags(self.as_slice(), key);
        retain_flagged(self, flags);
    }

    fn without_duplicates_by_key<K, F>(&self, mut key: F) -> Vec<T>
    where
        T: Clone,
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mut seen = SeenSet::with_capacity(self.len());
        self.iter()
            .filter(|element| seen.first_sight(key(*element)))
            .cloned()
            .collect()
    }

    fn remove_duplicates_by_equality(&mut self)
    where
        T: PartialEq,
    {
        let flags = (0..self.len())
            .map(|index| !self[..index].contains(&self[index]))
            .collect();
        retain_flagged(self, flags);
    }

    fn without_duplicates_by_equality(&self) -> Vec<T>
    where
        T: PartialEq + Clone,
    {
        self.iter().fold(Vec::new(), |mut kept, element| {
            if !kept.contains(element) {
                kept.push(element.clone());
            }
            kept
        })
    }
}
