//! Stable partitioning into matching and non-matching groups.
//!
//! # Examples
//!
//! ```rust
//! use array_ext::sequence::Partition;
//!
//! let input = vec![0, 1, 2, 3, 4, 5];
//!
//! // Named access
//! let divided = input.divided(|value| value % 2 == 0);
//! assert_eq!(divided.matching, vec![0, 2, 4]);
//! assert_eq!(divided.non_matching, vec![1, 3, 5]);
//!
//! // Positional access
//! let (even, odd) = input.divided(|value| value % 2 == 0).into_tuple();
//! assert_eq!(even, vec![0, 2, 4]);
//! assert_eq!(odd, vec![1, 3, 5]);
//! ```

/// The two groups produced by a partition.
///
/// Position 0 of the tuple form is `matching`, position 1 is `non_matching`.
/// Both groups keep the relative order of the input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Divided<T> {
    /// Elements for which the predicate returned `true`.
    pub matching: Vec<T>,
    /// Elements for which the predicate returned `false`.
    pub non_matching: Vec<T>,
}

impl<T> Divided<T> {
    /// Creates an empty pair of groups.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            matching: Vec::new(),
            non_matching: Vec::new(),
        }
    }

    /// Returns the elements that satisfied the predicate.
    #[must_use]
    pub fn matching(&self) -> &[T] {
        &self.matching
    }

    /// Returns the elements that did not satisfy the predicate.
    #[must_use]
    pub fn non_matching(&self) -> &[T] {
        &self.non_matching
    }

    /// Total number of elements across both groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matching.len() + self.non_matching.len()
    }

    /// Returns `true` if both groups are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matching.is_empty() && self.non_matching.is_empty()
    }

    /// Converts into the positional `(matching, non_matching)` form.
    #[must_use]
    pub fn into_tuple(self) -> (Vec<T>, Vec<T>) {
        (self.matching, self.non_matching)
    }

    #[inline]
    fn push(&mut self, element: T, matched: bool) {
        if matched {
            self.matching.push(element);
        } else {
            self.non_matching.push(element);
        }
    }
}

impl<T> From<Divided<T>> for (Vec<T>, Vec<T>) {
    fn from(divided: Divided<T>) -> Self {
        divided.into_tuple()
    }
}

impl<T> From<(Vec<T>, Vec<T>)> for Divided<T> {
    fn from((matching, non_matching): (Vec<T>, Vec<T>)) -> Self {
        Self {
            matching,
            non_matching,
        }
    }
}

static_assertions::assert_impl_all!(Divided<i32>: Send, Sync, Clone, Default);
static_assertions::assert_not_impl_any!(Divided<std::rc::Rc<i32>>: Send, Sync);

/// Splits a sequence into the elements that satisfy a predicate and those
/// that do not.
pub trait Partition<T> {
    /// Partitions clones of the elements, leaving `self` unchanged.
    ///
    /// The predicate is called exactly once per element, in order.
    fn divided<P>(&self, predicate: P) -> Divided<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool;

    /// Partitions the elements by value without cloning.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::Partition;
    ///
    /// let words = vec![String::from("apple"), String::from("kiwi"), String::from("avocado")];
    /// let divided = words.into_divided(|word| word.starts_with('a'));
    /// assert_eq!(divided.matching, vec!["apple", "avocado"]);
    /// assert_eq!(divided.non_matching, vec!["kiwi"]);
    /// ```
    fn into_divided<P>(self, predicate: P) -> Divided<T>
    where
        P: FnMut(&T) -> bool;

    /// Parallel counterpart of [`divided`](Self::divided).
    ///
    /// The predicate may run on several threads at once, so it must be
    /// `Fn + Sync`. Each group still keeps the input order.
    #[cfg(feature = "rayon")]
    fn par_divided<P>(&self, predicate: P) -> Divided<T>
    where
        T: Clone + Send + Sync,
        P: Fn(&T) -> bool + Sync + Send;
}

impl<T> Partition<T> for Vec<T> {
    fn divided<P>(&self, mut predicate: P) -> Divided<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter()
            .fold(Divided::new(), |mut divided, element| {
                let matched = predicate(element);
                divided.push(element.clone(), matched);
                divided
            })
    }

    fn into_divided<P>(self, mut predicate: P) -> Divided<T>
    where
        P: FnMut(&T) -> bool,
    {
        self.into_iter()
            .fold(Divided::new(), |mut divided, element| {
                let matched = predicate(&element);
                divided.push(element, matched);
                divided
            })
    }

    #[cfg(feature = "rayon")]
    fn par_divided<P>(&self, predicate: P) -> Divided<T>
    where
        T: Clone + Send + Sync,
        P: Fn(&T) -> bool + Sync + Send,
    {
        use rayon::prelude::*;

        let (matching, non_matching): (Vec<T>, Vec<T>) = self
            .par_iter()
            .cloned()
            .partition(|element| predicate(element));
        Divided {
            matching,
            non_matching,
        }
    }
}
