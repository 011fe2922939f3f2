//! Slice transformations that build a new `Vec`.

use super::error::InvalidChunkSizeError;

/// Applies `function` to every element, returning the results in order.
///
/// The result has the same length as `slice`, and element `i` of the result
/// is `function(&slice[i])`.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// assert_eq!(eager::map(&[1, 2, 3], |element| element * 2), vec![2, 4, 6]);
///
/// let lengths = eager::map(&["a", "bcd"], |word| word.len());
/// assert_eq!(lengths, vec![1, 3]);
/// ```
pub fn map<T, U, F>(slice: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> U,
{
    slice.iter().map(function).collect()
}

/// Returns clones of the elements satisfying `predicate`, in their original
/// relative order.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// let evens = eager::filter(&[1, 2, 3, 4], |element| element % 2 == 0);
/// assert_eq!(evens, vec![2, 4]);
///
/// let none = eager::filter(&[1, 3, 5], |element| element % 2 == 0);
/// assert!(none.is_empty());
/// ```
pub fn filter<T, P>(slice: &[T], mut predicate: P) -> Vec<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    slice
        .iter()
        .filter(|element| predicate(*element))
        .cloned()
        .collect()
}

/// Maps every element to a sequence and concatenates those sequences in
/// order.
///
/// Flattens exactly one level. Elements mapped to an empty sequence
/// contribute nothing.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// let doubled = eager::flat_map(&[1, 2], |element| [*element, *element]);
/// assert_eq!(doubled, vec![1, 1, 2, 2]);
///
/// let nested = eager::flat_map(&[vec![vec![1]], vec![]], |inner| inner.clone());
/// assert_eq!(nested, vec![vec![1]]);
/// ```
pub fn flat_map<T, U, I, F>(slice: &[T], function: F) -> Vec<U>
where
    F: FnMut(&T) -> I,
    I: IntoIterator<Item = U>,
{
    slice.iter().flat_map(function).collect()
}

/// Splits `slice` into consecutive chunks of `size` elements.
///
/// Every chunk has exactly `size` elements except possibly the last, which
/// holds the remainder. Concatenating the chunks in order reconstructs the
/// input. An empty slice yields no chunks.
///
/// # Errors
///
/// Returns [`InvalidChunkSizeError`] when `size` is zero. The size is checked
/// before any chunk is built.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// let chunks = eager::chunk(&[1, 2, 3, 4, 5], 2).unwrap();
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5]]);
///
/// assert!(eager::chunk(&[1, 2, 3], 0).is_err());
/// assert!(eager::chunk::<i32>(&[], 3).unwrap().is_empty());
/// ```
pub fn chunk<T>(slice: &[T], size: usize) -> Result<Vec<Vec<T>>, InvalidChunkSizeError>
where
    T: Clone,
{
    if size == 0 {
        return Err(InvalidChunkSizeError { size });
    }

    let mut chunks = Vec::with_capacity(slice.len().div_ceil(size));
    chunks.extend(slice.chunks(size).map(<[T]>::to_vec));
    Ok(chunks)
}

/// Like [`chunk`], but treats a zero size as a programming error.
///
/// # Panics
///
/// Panics with the [`InvalidChunkSizeError`] message when `size` is zero.
///
/// # Examples
///
/// ```rust
/// use seqops::eager;
///
/// assert_eq!(eager::chunk_or_panic(&[1, 2, 3], 3), vec![vec![1, 2, 3]]);
/// ```
///
/// ```rust,should_panic
/// use seqops::eager;
///
/// eager::chunk_or_panic(&[1, 2, 3], 0);
/// ```
pub fn chunk_or_panic<T>(slice: &[T], size: usize) -> Vec<Vec<T>>
where
    T: Clone,
{
    match chunk(slice, size) {
        Ok(chunks) => chunks,
        Err(error) => panic!("{error}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn map_preserves_length_and_order() {
        let result = map(&[3, 1, 2], |element| element * 10);
        assert_eq!(result, vec![30, 10, 20]);
    }

    #[rstest]
    fn map_on_empty_slice_never_calls_function() {
        let mut calls = 0;
        let result: Vec<i32> = map(&[] as &[i32], |element| {
            calls += 1;
            *element
        });
        assert!(result.is_empty());
        assert_eq!(calls, 0);
    }

    #[rstest]
    fn filter_leaves_input_untouched() {
        let input = vec![1, 2, 3, 4];
        let evens = filter(&input, |element| element % 2 == 0);
        assert_eq!(evens, vec![2, 4]);
        assert_eq!(input, vec![1, 2, 3, 4]);
    }

    #[rstest]
    fn flat_map_skips_empty_results() {
        let result = flat_map(&[0_usize, 1, 2, 3], |element| vec![*element; *element]);
        assert_eq!(result, vec![1, 2, 2, 3, 3, 3]);
    }

    #[rstest]
    #[case::even_split(vec![1, 2, 3, 4], 2, vec![vec![1, 2], vec![3, 4]])]
    #[case::remainder(vec![1, 2, 3, 4, 5], 2, vec![vec![1, 2], vec![3, 4], vec![5]])]
    #[case::size_one(vec![1, 2], 1, vec![vec![1], vec![2]])]
    #[case::size_larger_than_input(vec![1, 2], 5, vec![vec![1, 2]])]
    #[case::empty(vec![], 3, vec![])]
    fn chunk_splits_into_sized_pieces(
        #[case] input: Vec<i32>,
        #[case] size: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        assert_eq!(chunk(&input, size), Ok(expected));
    }

    #[rstest]
    fn chunk_rejects_zero_size() {
        assert_eq!(chunk(&[1, 2, 3], 0), Err(InvalidChunkSizeError { size: 0 }));
    }

    #[rstest]
    fn chunk_rejects_zero_size_on_empty_input() {
        assert!(chunk::<i32>(&[], 0).is_err());
    }

    #[rstest]
    #[should_panic(expected = "chunk size must be greater than 0")]
    fn chunk_or_panic_panics_on_zero_size() {
        let _ = chunk_or_panic(&[1, 2, 3], 0);
    }
}
