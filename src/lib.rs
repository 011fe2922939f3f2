//! # seqops
//!
//! Sequence combinators for Rust in two execution models.
//!
//! ## Overview
//!
//! - **Eager operations**: take a slice, return a freshly allocated result
//!   immediately (`map`, `filter`, `find`, `reduce`, `for_each`, `some`,
//!   `every`, `includes`, `flat_map`, `chunk`).
//! - **Lazy operations**: wrap a [`Producer`](lazy::Producer), a pull-driven
//!   source that offers elements to a consumer callback and halts as soon as
//!   the consumer asks it to. Chains do no work until a terminal operation
//!   drives them, so they can run over infinite sources.
//! - **Bridge**: `to_slice` and `from_slice` convert between the two.
//!
//! ## Feature Flags
//!
//! - `eager`: Slice operations
//! - `lazy`: The `Producer` trait, its combinators and sources
//! - `bridge`: Conversions between slices and producers (implies `lazy`)
//! - `full`: Enable all features
//!
//! ## Examples

#![cfg_attr(
    feature = "eager",
    doc = r#"
Eager operations return their result immediately:

```rust
let doubled = seqops::eager::map(&[1, 2, 3], |element| element * 2);
assert_eq!(doubled, vec![2, 4, 6]);
```
"#
)]
#![cfg_attr(
    feature = "lazy",
    doc = r#"
Lazy chains run only when driven, so they can start from an infinite source:

```rust
use seqops::prelude::*;

let first_big_square = seqops::lazy::iterate(1_u64, |n| n + 1)
    .map(|n| n * n)
    .find(|square| *square > 50);
assert_eq!(first_big_square, Some(64));
```
"#
)]
#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the traits and types needed to build pipelines. Free
/// functions stay behind their module path (`eager::map` and `lazy::map`
/// share a name).
///
/// # Usage
///
/// ```rust
/// use seqops::prelude::*;
/// ```
pub mod prelude {
    #[cfg(feature = "eager")]
    pub use crate::eager::InvalidChunkSizeError;

    #[cfg(feature = "lazy")]
    pub use crate::lazy::{DriveOutcome, Filter, IterProducer, Iterate, Map, Producer};

    #[cfg(feature = "bridge")]
    pub use crate::bridge::{SliceProducer, from_slice, to_slice};
}

#[cfg(feature = "eager")]
pub mod eager;

#[cfg(feature = "lazy")]
pub mod lazy;

#[cfg(feature = "bridge")]
pub mod bridge;
