//! Top-down merge sort.

use super::CountingSorter;
use crate::count::OperationCount;

/// Recursive merge sort.
///
/// The left half is the first `n/2` elements. While merging, one comparison is
/// counted per step where both halves still have elements, and each element
/// taken from the right half counts as a swap (a proxy for cross-half
/// inversions). Ties take from the left, so the sort is stable.
#[derive(Debug, Clone, Copy, Default)]
pub struct MergeSort;

impl CountingSorter for MergeSort {
    fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount {
        merge_sort(sequence)
    }
}

fn merge_sort(sequence: &mut [i64]) -> OperationCount {
    if sequence.len() <= 1 {
        return OperationCount::ZERO;
    }

    let mid = sequence.len() / 2;
    let mut left = sequence[..mid].to_vec();
    let mut right = sequence[mid..].to_vec();

    let mut count = merge_sort(&mut left);
    count += merge_sort(&mut right);
    count += merge_into(sequence, &left, &right);
    count
}

// Merges two sorted runs into `out`, which has room for both.
fn merge_into(out: &mut [i64], left: &[i64], right: &[i64]) -> OperationCount {
    let mut count = OperationCount::ZERO;
    let (mut i, mut j, mut k) = (0, 0, 0);

    while i < left.len() && j < right.len() {
        count.compare();
        if left[i] <= right[j] {
            out[k] = left[i];
            i += 1;
        } else {
            count.swap();
            out[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    let rest_left = &left[i..];
    out[k..k + rest_left.len()].copy_from_slice(rest_left);
    k += rest_left.len();
    out[k..].copy_from_slice(&right[j..]);

    count
}
