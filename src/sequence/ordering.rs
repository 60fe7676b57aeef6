//! Stable sorting by a projected key.
//!
//! A projection is a pure function `&T -> K` whose result is used only for
//! comparison. Sorting is stable in both directions: elements whose keys
//! compare equal keep their input order.
//!
//! # Optional Keys
//!
//! When the projection returns `Option<K>`, `None` is strictly smaller than
//! every `Some`. Ascending order therefore puts absent keys first and
//! descending order puts them last. For keys ordered by a supplied comparator
//! the same rule is available through [`absent_first`].
//!
//! # Examples
//!
//! ```rust
//! use array_ext::sequence::{ProjectionSort, SortOrder};
//!
//! let mut words = vec!["ccc", "a", "bb"];
//! words.sort_by_projection(|word| word.len(), SortOrder::Descending);
//! assert_eq!(words, vec!["ccc", "bb", "a"]);
//!
//! let ages = vec![Some(32), Some(36), None];
//! assert_eq!(
//!     ages.sorted_by_projection(|age| *age, SortOrder::Ascending),
//!     vec![None, Some(32), Some(36)]
//! );
//! ```

use std::cmp::Ordering;

/// Direction of a projection sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    /// Smallest key first.
    #[default]
    Ascending,
    /// Largest key first.
    Descending,
}

impl SortOrder {
    /// Returns `true` for [`SortOrder::Ascending`].
    #[must_use]
    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Orients an ascending comparison result in this direction.
    #[inline]
    #[must_use]
    pub const fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Ascending => ordering,
            Self::Descending => ordering.reverse(),
        }
    }
}

impl From<bool> for SortOrder {
    /// `true` maps to ascending, `false` to descending.
    fn from(ascending: bool) -> Self {
        if ascending {
            Self::Ascending
        } else {
            Self::Descending
        }
    }
}

/// Lifts a comparator on `K` to `Option<K>`, with `None` strictly smaller
/// than any `Some` and two `None`s equal.
///
/// # Examples
///
/// ```rust
/// use array_ext::sequence::{ProjectionSort, SortOrder, absent_first};
///
/// let mut readings = vec![Some(2.5_f64), None, Some(-1.0)];
/// readings.sort_by_projection_with(|reading| *reading, absent_first(f64::total_cmp), SortOrder::Ascending);
/// assert_eq!(readings, vec![None, Some(-1.0), Some(2.5)]);
/// ```
pub fn absent_first<K, C>(mut comparator: C) -> impl FnMut(&Option<K>, &Option<K>) -> Ordering
where
    C: FnMut(&K, &K) -> Ordering,
{
    move |left, right| match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(left), Some(right)) => comparator(left, right),
    }
}

/// Sorting by a key derived from each element.
pub trait ProjectionSort<T> {
    /// Sorts in place by the natural order of `projection(element)`.
    ///
    /// O(n log n) comparisons; the projection runs twice per comparison.
    fn sort_by_projection<K, F>(&mut self, projection: F, order: SortOrder)
    where
        K: Ord,
        F: FnMut(&T) -> K;

    /// Returns a sorted copy, leaving `self` unchanged.
    fn sorted_by_projection<K, F>(&self, projection: F, order: SortOrder) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K;

    /// Sorts in place by `projection`, comparing keys with `comparator`.
    ///
    /// The comparator must be a total order; otherwise the resulting order
    /// is unspecified.
    fn sort_by_projection_with<K, F, C>(&mut self, projection: F, comparator: C, order: SortOrder)
    where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering;

    /// Returns a copy sorted by `projection` and `comparator`.
    fn sorted_by_projection_with<K, F, C>(
        &self,
        projection: F,
        comparator: C,
        order: SortOrder,
    ) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering;

    /// Sorts in place by `primary`, breaking ties with `secondary`.
    ///
    /// Both keys use the same direction.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use array_ext::sequence::{ProjectionSort, SortOrder};
    ///
    /// let mut pairs = vec![(2, 'b'), (1, 'z'), (2, 'a')];
    /// pairs.sort_by_projections(|pair| pair.0, |pair| pair.1, SortOrder::Ascending);
    /// assert_eq!(pairs, vec![(1, 'z'), (2, 'a'), (2, 'b')]);
    /// ```
    fn sort_by_projections<K1, K2, F1, F2>(&mut self, primary: F1, secondary: F2, order: SortOrder)
    where
        K1: Ord,
        K2: Ord,
        F1: FnMut(&T) -> K1,
        F2: FnMut(&T) -> K2;

    /// Returns a copy sorted by `primary`, then `secondary`.
    fn sorted_by_projections<K1, K2, F1, F2>(
        &self,
        primary: F1,
        secondary: F2,
        order: SortOrder,
    ) -> Vec<T>
    where
        T: Clone,
        K1: Ord,
        K2: Ord,
        F1: FnMut(&T) -> K1,
        F2: FnMut(&T) -> K2;

    /// Parallel counterpart of [`sort_by_projection`](Self::sort_by_projection).
    ///
    /// Uses rayon's stable merge sort.
    #[cfg(feature = "rayon")]
    fn par_sort_by_projection<K, F>(&mut self, projection: F, order: SortOrder)
    where
        T: Send,
        K: Ord,
        F: Fn(&T) -> K + Sync;
}

impl<T> ProjectionSort<T> for Vec<T> {
    fn sort_by_projection<K, F>(&mut self, mut projection: F, order: SortOrder)
    where
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(|left, right| order.apply(projection(left).cmp(&projection(right))));
    }

    fn sorted_by_projection<K, F>(&self, projection: F, order: SortOrder) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        let mut sorted = self.clone();
        sorted.sort_by_projection(projection, order);
        sorted
    }

    fn sort_by_projection_with<K, F, C>(
        &mut self,
        mut projection: F,
        mut comparator: C,
        order: SortOrder,
    ) where
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        self.sort_by(|left, right| {
            order.apply(comparator(&projection(left), &projection(right)))
        });
    }

    fn sorted_by_projection_with<K, F, C>(
        &self,
        projection: F,
        comparator: C,
        order: SortOrder,
    ) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T) -> K,
        C: FnMut(&K, &K) -> Ordering,
    {
        let mut sorted = self.clone();
        sorted.sort_by_projection_with(projection, comparator, order);
        sorted
    }

    fn sort_by_projections<K1, K2, F1, F2>(
        &mut self,
        mut primary: F1,
        mut secondary: F2,
        order: SortOrder,
    ) where
        K1: Ord,
        K2: Ord,
        F1: FnMut(&T) -> K1,
        F2: FnMut(&T) -> K2,
    {
        self.sort_by(|left, right| {
            let ordering = primary(left)
                .cmp(&primary(right))
                .then_with(|| secondary(left).cmp(&secondary(right)));
            order.apply(ordering)
        });
    }

    fn sorted_by_projections<K1, K2, F1, F2>(
        &self,
        primary: F1,
        secondary: F2,
        order: SortOrder,
    ) -> Vec<T>
    where
        T: Clone,
        K1: Ord,
        K2: Ord,
        F1: FnMut(&T) -> K1,
        F2: FnMut(&T) -> K2,
    {
        let mut sorted = self.clone();
        sorted.sort_by_projections(primary, secondary, order);
        sorted
    }

    #[cfg(feature = "rayon")]
    fn par_sort_by_projection<K, F>(&mut self, projection: F, order: SortOrder)
    where
        T: Send,
        K: Ord,
        F: Fn(&T) -> K + Sync,
    {
        use rayon::prelude::*;

        self.par_sort_by(|left, right| order.apply(projection(left).cmp(&projection(right))));
    }
}
