//! Eager operations over materialized slices.
//!
//! Every function in this module borrows its input slice immutably and
//! returns a freshly allocated result before returning. Nothing is deferred.
//!
//! - Transformations: [`map`], [`filter`], [`flat_map`], [`chunk`]
//! - Queries: [`find`], [`some`], [`every`], [`includes`]
//! - Folds: [`reduce`], [`for_each`]
//!
//! # Examples
//!
//! ```rust
//! use seqops::eager;
//!
//! let values = vec![1, 2, 3, 4, 5];
//!
//! let evens = eager::filter(&values, |element| element % 2 == 0);
//! assert_eq!(evens, vec![2, 4]);
//!
//! let total = eager::reduce(&values, 0, |accumulator, element| accumulator + element);
//! assert_eq!(total, 15);
//!
//! let chunks = eager::chunk(&values, 2).unwrap();
//! assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
//! ```

mod error;
mod fold;
mod query;
mod transform;

pub use error::InvalidChunkSizeError;
pub use fold::{for_each, reduce};
pub use query::{every, find, includes, some};
pub use transform::{chunk, chunk_or_panic, filter, flat_map, map};
