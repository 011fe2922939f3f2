//! Producers that start a chain.

use std::fmt;

use super::producer::{DriveOutcome, Producer};

/// A one-shot producer over a single external iterator.
///
/// The first drive consumes the iterator. If that drive is stopped early the
/// remaining elements are discarded, and every later drive offers nothing
/// and reports [`DriveOutcome::Exhausted`].
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{self, DriveOutcome, Producer};
///
/// let mut letters = lazy::from_iter("abc".chars());
/// let mut seen = String::new();
/// letters.drive(|letter| {
///     seen.push(letter);
///     true
/// });
/// assert_eq!(seen, "abc");
///
/// // Already consumed
/// assert_eq!(letters.drive(|_| panic!("no elements left")), DriveOutcome::Exhausted);
/// ```
pub struct IterProducer<I> {
    iterator: Option<I>,
}

impl<I> IterProducer<I> {
    /// Returns `true` once the wrapped iterator has been driven.
    #[inline]
    pub const fn is_consumed(&self) -> bool {
        self.iterator.is_none()
    }
}

impl<I: Iterator> Producer for IterProducer<I> {
    type Item = I::Item;

    fn drive<C>(&mut self, mut consumer: C) -> DriveOutcome
    where
        C: FnMut(I::Item) -> bool,
    {
        let Some(iterator) = self.iterator.take() else {
            return DriveOutcome::Exhausted;
        };
        for element in iterator {
            if !consumer(element) {
                return DriveOutcome::Stopped;
            }
        }
        DriveOutcome::Exhausted
    }
}

impl<I> fmt::Debug for IterProducer<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("IterProducer")
            .field("consumed", &self.is_consumed())
            .finish_non_exhaustive()
    }
}

/// Wraps any iterable in a one-shot [`IterProducer`].
///
/// Unbounded iterators such as `0..` or `std::iter::repeat` are fine as long
/// as something downstream eventually stops the drive.
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{self, Producer};
///
/// let found = lazy::from_iter(0_u64..).map(|n| n * 3).find(|n| *n > 100);
/// assert_eq!(found, Some(102));
/// ```
#[inline]
pub fn from_iter<I: IntoIterator>(iterable: I) -> IterProducer<I::IntoIter> {
    IterProducer {
        iterator: Some(iterable.into_iter()),
    }
}

/// An infinite, re-runnable producer: `seed`, `step(&seed)`,
/// `step(&step(&seed))`, and so on.
///
/// It never exhausts; every drive must be stopped by a consumer. Each drive
/// starts again from a clone of the seed.
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{self, Producer};
///
/// let mut powers = lazy::iterate(1_u32, |n| n * 2);
/// let mut seen = Vec::new();
/// powers.drive(|n| {
///     seen.push(n);
///     seen.len() < 5
/// });
/// assert_eq!(seen, vec![1, 2, 4, 8, 16]);
/// ```
#[derive(Clone)]
pub struct Iterate<T, F> {
    seed: T,
    step: F,
}

impl<T, F> Producer for Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    type Item = T;

    fn drive<C>(&mut self, mut consumer: C) -> DriveOutcome
    where
        C: FnMut(T) -> bool,
    {
        let mut current = self.seed.clone();
        loop {
            if !consumer(current.clone()) {
                return DriveOutcome::Stopped;
            }
            current = (self.step)(&current);
        }
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Iterate<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Iterate")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

/// Creates an infinite [`Iterate`] producer from `seed` and `step`.
///
/// `step` is only called for the element after one the consumer accepted,
/// so it never runs past the point where the drive is stopped.
#[inline]
pub const fn iterate<T, F>(seed: T, step: F) -> Iterate<T, F>
where
    T: Clone,
    F: FnMut(&T) -> T,
{
    Iterate { seed, step }
}
