#![cfg(feature = "eager")]
//! Property-based tests for eager operation laws.
//!
//! This module verifies:
//!
//! - **Map**: length preservation and element-wise application
//! - **Filter**: every survivor satisfies the predicate, order preserved
//! - **Reduce**: equivalence with a manual left fold
//! - **Some / Every**: agreement with existential and universal quantifiers
//! - **Chunk**: concatenation reconstructs the input, sizes are exact

use proptest::prelude::*;
use seqops::eager;

// =============================================================================
// Map Laws
// =============================================================================

proptest! {
    /// Map preserves length and applies the function to each position
    #[test]
    fn prop_map_is_element_wise(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let function = |element: &i32| element.wrapping_mul(3);
        let mapped = eager::map(&elements, function);

        prop_assert_eq!(mapped.len(), elements.len());
        for (index, element) in elements.iter().enumerate() {
            prop_assert_eq!(mapped[index], function(element));
        }
    }
}

proptest! {
    /// Map composition: map(map(s, f), g) == map(s, g . f)
    #[test]
    fn prop_map_composition(elements in prop::collection::vec(any::<i32>(), 0..100)) {
        let function1 = |n: &i32| n.wrapping_add(1);
        let function2 = |n: &i32| n.wrapping_mul(2);

        let left = eager::map(&eager::map(&elements, function1), function2);
        let right = eager::map(&elements, |n| function2(&function1(n)));

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Filter Laws
// =============================================================================

proptest! {
    /// Every survivor satisfies the predicate and the output is no longer
    #[test]
    fn prop_filter_survivors_satisfy_predicate(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        modulus in 1_i32..10
    ) {
        let predicate = |element: &i32| element.rem_euclid(modulus) == 0;
        let filtered = eager::filter(&elements, predicate);

        prop_assert!(filtered.len() <= elements.len());
        prop_assert!(filtered.iter().all(predicate));
        prop_assert_eq!(
            filtered.len(),
            elements.iter().filter(|element| predicate(element)).count()
        );
    }
}

proptest! {
    /// Survivors keep their relative order: filtering indices yields an
    /// increasing subsequence of the input
    #[test]
    fn prop_filter_preserves_order(elements in prop::collection::vec(any::<u8>(), 0..100)) {
        let indexed: Vec<(usize, u8)> = elements.iter().copied().enumerate().collect();
        let filtered = eager::filter(&indexed, |(_, value)| value % 2 == 0);

        prop_assert!(filtered.windows(2).all(|pair| pair[0].0 < pair[1].0));
    }
}

// =============================================================================
// Reduce Laws
// =============================================================================

proptest! {
    /// Reduce equals a manual left fold
    #[test]
    fn prop_reduce_is_left_fold(
        elements in prop::collection::vec(any::<i64>(), 0..100),
        init in any::<i64>()
    ) {
        let mut expected = init;
        for element in &elements {
            expected = expected.wrapping_sub(*element);
        }

        let actual = eager::reduce(&elements, init, |accumulator, element| {
            accumulator.wrapping_sub(*element)
        });
        prop_assert_eq!(actual, expected);
    }
}

proptest! {
    /// Reduce over an empty slice returns init for any function
    #[test]
    fn prop_reduce_empty_is_init(init in any::<i32>(), delta in any::<i32>()) {
        let result = eager::reduce(&[] as &[i32], init, |accumulator, element| {
            accumulator.wrapping_add(*element).wrapping_add(delta)
        });
        prop_assert_eq!(result, init);
    }
}

// =============================================================================
// Quantifier Laws
// =============================================================================

proptest! {
    /// some(s, p) holds iff some index satisfies p; every(s, p) iff all do
    #[test]
    fn prop_some_and_every_match_quantifiers(
        elements in prop::collection::vec(-50_i32..50, 0..50),
        threshold in -50_i32..50
    ) {
        let predicate = |element: &i32| *element > threshold;

        let exists = (0..elements.len()).any(|index| predicate(&elements[index]));
        let for_all = (0..elements.len()).all(|index| predicate(&elements[index]));

        prop_assert_eq!(eager::some(&elements, predicate), exists);
        prop_assert_eq!(eager::every(&elements, predicate), for_all);
    }
}

proptest! {
    /// De Morgan: every(s, p) == !some(s, !p)
    #[test]
    fn prop_every_is_not_some_not(elements in prop::collection::vec(any::<i16>(), 0..50)) {
        let predicate = |element: &i16| *element >= 0;
        prop_assert_eq!(
            eager::every(&elements, predicate),
            !eager::some(&elements, |element| !predicate(element))
        );
    }
}

proptest! {
    /// includes agrees with find on equality
    #[test]
    fn prop_includes_matches_find(
        elements in prop::collection::vec(0_u8..20, 0..30),
        probe in 0_u8..20
    ) {
        prop_assert_eq!(
            eager::includes(&elements, &probe),
            eager::find(&elements, |element| *element == probe).is_some()
        );
    }
}

// =============================================================================
// Chunk Laws
// =============================================================================

proptest! {
    /// Concatenating chunks reconstructs the input; only the last chunk
    /// may be shorter than the requested size
    #[test]
    fn prop_chunk_reconstructs_input(
        elements in prop::collection::vec(any::<i32>(), 0..100),
        size in 1_usize..12
    ) {
        let chunks = eager::chunk(&elements, size).unwrap();

        let flattened: Vec<i32> = chunks.iter().flatten().copied().collect();
        prop_assert_eq!(&flattened, &elements);

        prop_assert_eq!(chunks.len(), elements.len().div_ceil(size));
        if let Some((last, init)) = chunks.split_last() {
            prop_assert!(init.iter().all(|chunk| chunk.len() == size));
            prop_assert!(!last.is_empty() && last.len() <= size);
        }
    }
}

proptest! {
    /// A zero size is always rejected, whatever the input
    #[test]
    fn prop_chunk_zero_size_always_fails(elements in prop::collection::vec(any::<i32>(), 0..20)) {
        prop_assert!(eager::chunk(&elements, 0).is_err());
    }
}

// =============================================================================
// FlatMap Laws
// =============================================================================

proptest! {
    /// flat_map with a singleton function behaves like map
    #[test]
    fn prop_flat_map_singleton_is_map(elements in prop::collection::vec(any::<i32>(), 0..50)) {
        let function = |element: &i32| element.wrapping_neg();
        prop_assert_eq!(
            eager::flat_map(&elements, |element| [function(element)]),
            eager::map(&elements, function)
        );
    }
}
