//! Extension traits for `Vec<T>`.
//!
//! Each trait groups one concern and is implemented for `Vec<T>`:
//!
//! - [`Insertion`]: Prepending and index-safe swapping
//! - [`Partition`]: Stable split into matching and non-matching groups
//! - [`ProjectionSort`]: Stable sorting by a projected key
//! - [`Removal`]: Removing every occurrence of one or more values
//! - [`Deduplication`]: Keeping only the first occurrence of each value
//!
//! All operations are synchronous and never retain references past the call.
//! Mutating methods take `&mut self`; their non-mutating counterparts take
//! `&self` and return a fresh `Vec<T>`, leaving the receiver untouched.
//!
//! # Examples
//!
//! ```rust
//! use array_ext::sequence::{ProjectionSort, SortOrder};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Person {
//!     name: &'static str,
//!     age: Option<u32>,
//! }
//!
//! let people = vec![
//!     Person { name: "James", age: Some(32) },
//!     Person { name: "Wade", age: Some(36) },
//!     Person { name: "Rose", age: None },
//! ];
//!
//! let by_age = people.sorted_by_projection(|person| person.age, SortOrder::Ascending);
//! let names: Vec<_> = by_age.iter().map(|person| person.name).collect();
//! assert_eq!(names, vec!["Rose", "James", "Wade"]);
//! ```

mod dedup;
mod error;
mod hashing;
mod insertion;
mod ordering;
mod partition;
mod removal;

pub use dedup::Deduplication;
pub use error::SwapError;
pub use insertion::Insertion;
pub use ordering::{ProjectionSort, SortOrder, absent_first};
pub use partition::{Divided, Partition};
pub use removal::Removal;
