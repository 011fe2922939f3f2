//! Lazy element transformation.

use std::fmt;

use super::producer::{DriveOutcome, Producer};

/// A producer that transforms every element of an upstream producer.
///
/// Created by [`map`] or [`Producer::map`]. Owns its upstream producer.
/// When the downstream consumer stops, the stop is forwarded upstream so no
/// further element is pulled or transformed.
#[derive(Clone)]
pub struct Map<P, F> {
    producer: P,
    function: F,
}

impl<P, F> Map<P, F> {
    #[inline]
    pub(crate) const fn new(producer: P, function: F) -> Self {
        Self { producer, function }
    }

    /// Unwraps this adapter, returning the upstream producer.
    #[inline]
    pub fn into_inner(self) -> P {
        self.producer
    }
}

impl<P, F, U> Producer for Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    type Item = U;

    #[inline]
    fn drive<C>(&mut self, mut consumer: C) -> DriveOutcome
    where
        C: FnMut(U) -> bool,
    {
        let function = &mut self.function;
        self.producer.drive(|element| consumer(function(element)))
    }
}

impl<P: fmt::Debug, F> fmt::Debug for Map<P, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("producer", &self.producer)
            .finish_non_exhaustive()
    }
}

/// Lazily transforms every element of `producer` with `function`.
///
/// Equivalent to [`Producer::map`].
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{self, Producer};
///
/// let mut doubled = lazy::map(lazy::from_iter(vec![1, 2, 3]), |element| element * 2);
/// let mut seen = Vec::new();
/// doubled.drive(|element| {
///     seen.push(element);
///     true
/// });
/// assert_eq!(seen, vec![2, 4, 6]);
/// ```
#[inline]
pub const fn map<P, U, F>(producer: P, function: F) -> Map<P, F>
where
    P: Producer,
    F: FnMut(P::Item) -> U,
{
    Map::new(producer, function)
}
