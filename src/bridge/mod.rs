//! Conversions between materialized slices and lazy producers.
//!
//! - [`from_slice`]: a re-runnable [`SliceProducer`] over a borrowed slice
//! - [`to_slice`]: drive a producer to exhaustion and collect the result
//!
//! The two are inverses on finite input:
//!
//! ```rust
//! use seqops::bridge::{from_slice, to_slice};
//!
//! let values = vec![3, 1, 4, 1, 5];
//! assert_eq!(to_slice(from_slice(&values)), values);
//! ```

use std::fmt;

use crate::lazy::{DriveOutcome, Producer};

/// A re-runnable producer over a borrowed slice.
///
/// Offers a clone of every element, in order, and restarts from the first
/// element on every drive. Created by [`from_slice`].
#[derive(Clone, Copy)]
pub struct SliceProducer<'a, T> {
    slice: &'a [T],
}

impl<'a, T> SliceProducer<'a, T> {
    /// Returns the slice this producer offers.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &'a [T] {
        self.slice
    }
}

impl<T: Clone> Producer for SliceProducer<'_, T> {
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C) -> DriveOutcome
    where
        C: FnMut(T) -> bool,
    {
        for element in self.slice {
            if !consumer(element.clone()) {
                return DriveOutcome::Stopped;
            }
        }
        DriveOutcome::Exhausted
    }
}

impl<T: fmt::Debug> fmt::Debug for SliceProducer<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SliceProducer")
            .field("slice", &self.slice)
            .finish()
    }
}

/// Returns a producer offering every element of `slice`, in order.
///
/// The drive stops early as soon as the consumer returns `false`.
///
/// # Examples
///
/// ```rust
/// use seqops::bridge::from_slice;
/// use seqops::lazy::{DriveOutcome, Producer};
///
/// let mut producer = from_slice(&["a", "b", "c"]);
/// let mut seen = Vec::new();
/// let outcome = producer.drive(|letter| {
///     seen.push(letter);
///     letter != "b"
/// });
/// assert_eq!(seen, vec!["a", "b"]);
/// assert_eq!(outcome, DriveOutcome::Stopped);
/// ```
#[inline]
pub const fn from_slice<T: Clone>(slice: &[T]) -> SliceProducer<'_, T> {
    SliceProducer { slice }
}

/// Drives `producer` to exhaustion and collects every element, in order.
///
/// Never requests an early stop. **Does not terminate on an infinite
/// producer** such as [`lazy::iterate`](crate::lazy::iterate); bound the
/// chain first, or use [`lazy::find`](crate::lazy::find) or a custom
/// consumer instead.
///
/// # Examples
///
/// ```rust
/// use seqops::bridge::{from_slice, to_slice};
/// use seqops::lazy::Producer;
///
/// let tens = to_slice(from_slice(&[1, 2, 3, 4]).filter(|n| n % 2 == 0).map(|n| n * 10));
/// assert_eq!(tens, vec![20, 40]);
/// ```
pub fn to_slice<P: Producer>(mut producer: P) -> Vec<P::Item> {
    let mut collected = Vec::new();
    producer.drive(|element| {
        collected.push(element);
        true
    });
    collected
}
