//! # array-ext
//!
//! Extension methods for Rust's `Vec<T>` that the standard library does not
//! provide out of the box.
//!
//! ## Overview
//!
//! - **Insertion**: `prepend`, `prepend_all`, `safe_swap`, `try_swap`
//! - **Partitioning**: `divided` into matching and non-matching groups
//! - **Projection Sorting**: stable sorting by a derived key, ascending or
//!   descending, with `None` keys ordered first
//! - **Removal**: `remove_all` of one value or of a list of values
//! - **Deduplication**: first-occurrence duplicate removal by hash, by
//!   equality or by projected key
//!
//! ## Feature Flags
//!
//! - `sequence`: The extension traits (enabled by default)
//! - `fxhash` / `ahash`: Faster hashers for the deduplication seen-set
//! - `rayon`: Parallel projection sort and partition
//! - `serde`: Serialization for `Divided` and `SortOrder`
//! - `tracing`: Trace events when a safe operation falls back to a no-op
//! - `full`: Enable all features except the hasher choice
//!
//! ## Example
//!
//! ```rust
//! use array_ext::prelude::*;
//!
//! let mut values = vec![3, 1, 2, 3, 1];
//! values.prepend(0);
//! values.remove_duplicates();
//! assert_eq!(values, vec![0, 3, 1, 2]);
//!
//! let divided = values.divided(|value| value % 2 == 0);
//! assert_eq!(divided.matching, vec![0, 2]);
//! assert_eq!(divided.non_matching, vec![3, 1]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every extension trait and its supporting types.
///
/// # Usage
///
/// ```rust
/// use array_ext::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;
}

#[cfg(feature = "sequence")]
pub mod sequence;
