//! Assertions shared by sorter and experiment tests.

/// Returns true if `values` is in non-decreasing order.
pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}

/// Asserts that `output` is `input` rearranged into ascending order.
///
/// # Panics
///
/// Panics if `output` is unsorted or holds different elements than `input`.
pub fn assert_sorted_permutation(input: &[i64], output: &[i64]) {
    assert!(is_sorted(output), "not sorted: {output:?}");
    let mut expected = input.to_vec();
    expected.sort_unstable();
    assert_eq!(expected, output, "not a permutation of {input:?}");
}
