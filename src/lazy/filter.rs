//! Lazy element selection.

use std::fmt;

use super::producer::{DriveOutcome, Producer};

/// A producer that offers only the upstream elements satisfying a predicate.
///
/// Created by [`filter`] or [`Producer::filter`]. Rejected elements are still
/// pulled from upstream, they just never reach the downstream consumer.
#[derive(Clone)]
pub struct Filter<P, F> {
    producer: P,
    predicate: F,
}

impl<P, F> Filter<P, F> {
    #[inline]
    pub(crate) const fn new(producer: P, predicate: F) -> Self {
        Self {
            producer,
            predicate,
        }
    }

    /// Unwraps this adapter, returning the upstream producer.
    #[inline]
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P, F> Producer for Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    type Item = P::Item;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> DriveOutcome
    where
        C: FnMut(P::Item) -> bool,
    {
        let predicate = &mut self.predicate;
        self.producer
            .drive(|element| !predicate(&element) || consumer(element))
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Filter<P, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("producer", &self.producer)
            .finish_non_exhaustive()
    }
}

/// Lazily keeps only the elements of `producer` satisfying `predicate`.
///
/// Equivalent to [`Producer::filter`].
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{self, Producer};
///
/// let mut evens = lazy::filter(lazy::from_iter(1..=4), |element| element % 2 == 0);
/// let mut seen = Vec::new();
/// evens.drive(|element| {
///     seen.push(element);
///     true
/// });
/// assert_eq!(seen, vec![2, 4]);
/// ```
#[inline]
pub const fn filter<P, F>(producer: P, predicate: F) -> Filter<P, F>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    Filter::new(producer, predicate)
}
