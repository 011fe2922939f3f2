//! Short-circuiting queries over slices.

/// Returns the first element satisfying `predicate`, or `None`.
///
/// Absence is a normal outcome: a default-valued element that matches is
/// `Some(&default)`, never confused with `None`.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// assert_eq!(eager::find(&[1, 2, 3, 4], |element| *element > 2), Some(&3));
/// assert_eq!(eager::find(&[1, 2, 3], |element| *element > 5), None);
/// assert_eq!(eager::find(&[0, 1], |element| *element == 0), Some(&0));
/// ```
pub fn find<T, P>(slice: &[T], mut predicate: P) -> Option<&T>
where
    P: FnMut(&T) -> bool,
{
    slice.iter().find(|element| predicate(*element))
}

/// Returns `true` if at least one element satisfies `predicate`.
///
/// Stops at the first match.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// assert!(eager::some(&[1, 2, 3], |element| *element == 2));
/// assert!(!eager::some::<i32, _>(&[], |_| true));
/// ```
pub fn some<T, P>(slice: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    slice.iter().any(predicate)
}

/// Returns `true` if every element satisfies `predicate`.
///
/// Stops at the first failure. Vacuously `true` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// assert!(eager::every(&[2, 4, 6], |element| element % 2 == 0));
/// assert!(!eager::every(&[2, 3, 6], |element| element % 2 == 0));
/// assert!(eager::every::<i32, _>(&[], |_| false));
/// ```
pub fn every<T, P>(slice: &[T], predicate: P) -> bool
where
    P: FnMut(&T) -> bool,
{
    slice.iter().all(predicate)
}

/// Returns `true` if some element is equal to `value`.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// let words = vec![String::from("left"), String::from("right")];
/// assert!(eager::includes(&words, &String::from("right")));
/// assert!(!eager::includes(&words, &String::from("up")));
/// ```
pub fn includes<T>(slice: &[T], value: &T) -> bool
where
    T: PartialEq,
{
    slice.contains(value)
}
