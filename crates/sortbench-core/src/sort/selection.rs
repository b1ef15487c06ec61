//! Selection sort.

use super::CountingSorter;
use crate::count::OperationCount;

/// Selection sort.
///
/// Each scan over `i..n` starts with the *last* index of the whole sequence as
/// its minimum candidate, and every scanned element (including position `i`
/// itself) costs one comparison. The total is therefore `n(n-1)/2 + n`
/// comparisons regardless of input order. Because ties keep the current
/// candidate, equal keys can still be exchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl CountingSorter for SelectionSort {
    fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount {
        let mut count = OperationCount::ZERO;
        let Some(last) = sequence.len().checked_sub(1) else {
            return count;
        };

        for i in 0..sequence.len() {
            let mut min_idx = last;
            for j in i..sequence.len() {
                count.compare();
                if sequence[j] < sequence[min_idx] {
                    min_idx = j;
                }
            }
            if min_idx != i {
                count.swap();
                sequence.swap(i, min_idx);
            }
        }
        count
    }
}
