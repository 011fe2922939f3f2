//! The `Producer` trait: a pull-driven, interruptible source of elements.

use std::fmt;

use super::filter::Filter;
use super::map::Map;

/// How a single drive of a [`Producer`] ended.
///
/// While a drive is in progress the producer is running; once `drive`
/// returns it is in exactly one of these two states.
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{self, DriveOutcome, Producer};
///
/// let mut numbers = lazy::from_iter(vec![1, 2, 3]);
/// let outcome = numbers.drive(|element| element < 2);
/// assert_eq!(outcome, DriveOutcome::Stopped);
///
/// let mut numbers = lazy::from_iter(vec![1, 2, 3]);
/// assert_eq!(numbers.drive(|_| true), DriveOutcome::Exhausted);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DriveOutcome {
    /// The innermost source ran out of elements.
    Exhausted,
    /// A consumer somewhere in the chain returned `false`.
    Stopped,
}

impl DriveOutcome {
    /// Returns `true` if the source ran out of elements.
    #[inline]
    #[must_use]
    pub const fn is_exhausted(self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns `true` if a consumer requested the stop.
    #[inline]
    #[must_use]
    pub const fn is_stopped(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

impl fmt::Display for DriveOutcome {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted => write!(formatter, "exhausted"),
            Self::Stopped => write!(formatter, "stopped by consumer"),
        }
    }
}

static_assertions::assert_impl_all!(DriveOutcome: Copy, Send, Sync);

/// A deferred source of elements driven by a consumer callback.
///
/// Driving a producer offers each element, in order, to the consumer. The
/// consumer returns `true` to ask for the next element and `false` to stop.
/// After a `false` the producer must return immediately without generating
/// or pulling anything else.
///
/// Driving the same producer again restarts generation from the beginning,
/// unless the producer is documented as a one-shot view over external state
/// (such as [`IterProducer`](super::IterProducer)).
///
/// # Required Methods
///
/// - `drive`: Offer elements to a consumer until it stops or elements run out
///
/// # Provided Methods
///
/// - `map`: Transform every element lazily
/// - `filter`: Drop elements lazily
/// - `find`: Drive until the first matching element
/// - `by_ref`: Borrow the producer so a combinator does not consume it
///
/// # Examples
///
/// ```rust
/// use seqops::lazy::{DriveOutcome, Producer};
///
/// struct Countdown(u32);
///
/// impl Producer for Countdown {
///     type Item = u32;
///
///     fn drive<C>(&mut self, mut consumer: C) -> DriveOutcome
///     where
///         C: FnMut(u32) -> bool,
///     {
///         for value in (1..=self.0).rev() {
///             if !consumer(value) {
///                 return DriveOutcome::Stopped;
///             }
///         }
///         DriveOutcome::Exhausted
///     }
/// }
///
/// let odd = Countdown(5).filter(|value| value % 2 == 1).find(|value| *value < 5);
/// assert_eq!(odd, Some(3));
/// ```
pub trait Producer {
    /// The type of the elements offered to consumers.
    type Item;

    /// Offers every element to `consumer`, in order, until it returns
    /// `false` or the elements run out.
    ///
    /// # Arguments
    ///
    /// * `consumer` - Called once per element; returns whether production
    ///   should continue
    ///
    /// # Returns
    ///
    /// [`DriveOutcome::Stopped`] if `consumer` (or a consumer further down a
    /// composed chain) returned `false`, [`DriveOutcome::Exhausted`] otherwise.
    fn drive<C>(&mut self, consumer: C) -> DriveOutcome
    where
        C: FnMut(Self::Item) -> bool;

    /// Wraps this producer so every element is passed through `function`.
    ///
    /// Nothing runs until the result is driven, and `function` is only called
    /// for elements the downstream consumer actually receives.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::lazy::{self, Producer};
    ///
    /// let squares = lazy::iterate(1, |n| n + 1).map(|n| n * n);
    /// assert_eq!(squares.find(|square| *square > 10), Some(16));
    /// ```
    #[inline]
    fn map<U, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item) -> U,
    {
        Map::new(self, function)
    }

    /// Wraps this producer so only elements satisfying `predicate` are
    /// offered downstream.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::lazy::{self, Producer};
    ///
    /// let evens = lazy::iterate(1, |n| n + 1).filter(|n| n % 2 == 0);
    /// assert_eq!(evens.find(|n| *n > 7), Some(8));
    /// ```
    #[inline]
    fn filter<F>(self, predicate: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Drives this producer until the first element satisfying `predicate`.
    ///
    /// Stops the producer as soon as a match is seen. Returns `None` if the
    /// producer is exhausted without a match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::lazy::{self, Producer};
    ///
    /// assert_eq!(lazy::from_iter(vec![1, 2, 3]).find(|n| *n > 1), Some(2));
    /// assert_eq!(lazy::from_iter(vec![1, 2, 3]).find(|n| *n > 5), None);
    /// ```
    #[inline]
    fn find<F>(self, predicate: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item) -> bool,
    {
        super::find::find(self, predicate)
    }

    /// Borrows this producer mutably so combinators can wrap it without
    /// taking ownership.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seqops::lazy::{self, Producer};
    ///
    /// let mut naturals = lazy::iterate(0, |n| n + 1);
    /// assert_eq!(naturals.by_ref().find(|n| *n == 3), Some(3));
    /// // `Iterate` is re-runnable, so the next drive starts over.
    /// assert_eq!(naturals.find(|_| true), Some(0));
    /// ```
    #[inline]
    fn by_ref(&mut self) -> &mut Self
    where
        Self: Sized,
    {
        self
    }
}

impl<P: Producer> Producer for &mut P {
    type Item = P::Item;

    #[inline]
    fn drive<C>(&mut self, consumer: C) -> DriveOutcome
    where
        C: FnMut(Self::Item) -> bool,
    {
        (**self).drive(consumer)
    }
}
