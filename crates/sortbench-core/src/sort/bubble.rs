//! Bubble sort, with and without the early-exit pass check.

use super::CountingSorter;
use crate::count::OperationCount;

/// Canonical bubble sort.
///
/// Every pass runs to the end of the unsorted prefix, so an input of length
/// `n` always costs exactly `n(n-1)/2` comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl CountingSorter for BubbleSort {
    fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount {
        let mut count = OperationCount::ZERO;
        for end in (1..sequence.len()).rev() {
            bubble_pass(sequence, end, &mut count);
        }
        count
    }
}

/// Bubble sort that stops once a pass makes no exchange.
///
/// Sorted input of length `n >= 2` costs `n-1` comparisons.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShortBubbleSort;

impl CountingSorter for ShortBubbleSort {
    fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount {
        let mut count = OperationCount::ZERO;
        for end in (1..sequence.len()).rev() {
            if !bubble_pass(sequence, end, &mut count) {
                break;
            }
        }
        count
    }
}

// One pass over sequence[..=end]; returns whether anything moved.
fn bubble_pass(sequence: &mut [i64], end: usize, count: &mut OperationCount) -> bool {
    let mut exchanged = false;
    for j in 0..end {
        count.compare();
        if sequence[j] > sequence[j + 1] {
            count.swap();
            sequence.swap(j, j + 1);
            exchanged = true;
        }
    }
    exchanged
}
