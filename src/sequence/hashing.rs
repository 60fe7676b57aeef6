//! Seen-set used by duplicate removal.
//!
//! The hasher is picked at compile time:
//!
//! | Feature  | Set type                            |
//! |----------|-------------------------------------|
//! | `fxhash` | `rustc_hash::FxHashSet`             |
//! | `ahash`  | `ahash::AHashSet`                   |
//! | neither  | `std::collections::HashSet`         |
//!
//! `fxhash` wins when both are enabled. Results never depend on the hasher.

use std::hash::Hash;

#[cfg(feature = "fxhash")]
type SetImpl<K> = rustc_hash::FxHashSet<K>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
type SetImpl<K> = ahash::AHashSet<K>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
type SetImpl<K> = std::collections::HashSet<K>;

/// Records which keys have already been observed during a single pass.
pub(super) struct SeenSet<K> {
    seen: SetImpl<K>,
}

impl<K: Eq + Hash> SeenSet<K> {
    pub(super) fn with_capacity(capacity: usize) -> Self {
        let mut seen = SetImpl::default();
        seen.reserve(capacity);
        Self { seen }
    }

    /// Returns `true` the first time `key` is offered, `false` afterwards.
    #[inline]
    pub(super) fn first_sight(&mut self, key: K) -> bool {
        self.seen.insert(key)
    }
}

/// Computes, for each element, whether it is the first with its key.
pub(super) fn first_occurrence_flags<'a, T, K, F>(elements: &'a [T], mut key: F) -> Vec<bool>
where
    K: Eq + Hash,
    F: FnMut(&'a T) -> K,
{
    let mut seen = SeenSet::with_capacity(elements.len());
    elements
        .iter()
        .map(|element| seen.first_sight(key(element)))
        .collect()
}
