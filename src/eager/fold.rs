//! Left folds and side-effecting traversal.

/// Folds `slice` from left to right, starting from `init`.
///
/// An empty slice returns `init` unchanged.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// let sum = eager::reduce(&[1, 2, 3], 0, |accumulator, element| accumulator + element);
/// assert_eq!(sum, 6);
///
/// // Order-sensitive
/// let digits = eager::reduce(&[1, 2, 3], String::new(), |mut accumulator, element| {
///     accumulator.push_str(&element.to_string());
///     accumulator
/// });
/// assert_eq!(digits, "123");
/// ```
pub fn reduce<T, U, F>(slice: &[T], init: U, function: F) -> U
where
    F: FnMut(U, &T) -> U,
{
    slice.iter().fold(init, function)
}

/// Runs `action` once per element, in order.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// let mut seen = Vec::new();
/// eager::for_each(&["a", "b"], |element| seen.push(*element));
/// assert_eq!(seen, vec!["a", "b"]);
/// ```
pub fn for_each<T, F>(slice: &[T], action: F)
where
    F: FnMut(&T),
{
    slice.iter().for_each(action);
}
