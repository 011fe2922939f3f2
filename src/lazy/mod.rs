//! Lazy operations over pull-driven producers.
//!
//! A [`Producer`] is a deferred computation: it has no storage of its own and
//! only generates elements while a consumer drives it. Combinators wrap a
//! producer by value and return a new producer, so a chain such as
//! `source.map(f).filter(p)` does no work until a terminal operation
//! ([`find`], `bridge::to_slice`, or a direct
//! [`Producer::drive`]) runs it.
//!
//! - Trait: [`Producer`], [`DriveOutcome`]
//! - Combinators: [`map`] / [`Map`], [`filter`] / [`Filter`]
//! - Terminal: [`find`]
//! - Sources: [`from_iter`] / [`IterProducer`], [`iterate`] / [`Iterate`]
//!
//! ## Early Termination
//!
//! A consumer stops a drive by returning `false`. The stop travels upward
//! through every wrapper, and no upstream element is generated, pulled, or
//! transformed after it. This is what makes infinite sources usable:
//!
//! ```rust
//! use seqops::lazy::{self, DriveOutcome, Producer};
//!
//! let mut firsts = Vec::new();
//! let outcome = lazy::iterate(1_u64, |n| n + 1)
//!     .map(|n| n * n)
//!     .filter(|square| square % 2 == 1)
//!     .drive(|square| {
//!         firsts.push(square);
//!         firsts.len() < 3
//!     });
//!
//! assert_eq!(firsts, vec![1, 9, 25]);
//! assert_eq!(outcome, DriveOutcome::Stopped);
//! ```

mod filter;
mod find;
mod map;
mod producer;
mod source;

pub use filter::{Filter, filter};
pub use find::find;
pub use map::{Map, map};
pub use producer::{DriveOutcome, Producer};
pub use source::{IterProducer, Iterate, from_iter, iterate};
