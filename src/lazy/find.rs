//! Terminal search over a producer.

use super::producer::Producer;

/// Drives `producer` until the first element satisfying `predicate`.
///
/// The producer is told to stop as soon as a match is seen, so this
/// terminates on an infinite producer whenever some element matches.
/// Returns `None` if the producer is exhausted first.
///
/// Pass `&mut producer` (or `producer.by_ref()`) to keep the producer
/// after the search.
///
/// # Examples
///
/// ```rust
/// use seqops::lazy;
///
/// let first_multiple = lazy::find(lazy::iterate(1, |n| n + 1), |n| n % 7 == 0);
/// assert_eq!(first_multiple, Some(7));
///
/// assert_eq!(lazy::find(lazy::from_iter(vec![1, 2, 3]), |n| *n > 5), None);
/// ```
pub fn find<P, F>(mut producer: P, mut predicate: F) -> Option<P::Item>
where
    P: Producer,
    F: FnMut(&P::Item) -> bool,
{
    let mut found = None;
    producer.drive(|element| {
        if predicate(&element) {
            found = Some(element);
            false
        } else {
            true
        }
    });
    found
}
