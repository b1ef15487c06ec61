//! In-place heap sort over a max-heap.

use tracing::trace;

use super::CountingSorter;
use crate::count::OperationCount;

/// Heap sort.
///
/// Heapify and extraction share the same counters. Each extraction counts one
/// swap for moving the root to the end, even when root and last are the same
/// value; sift-down stops as soon as the root is not smaller than its larger
/// child.
///
/// Stopping on equality means runs of equal keys cost fewer operations than
/// under a strict `>` rule: `[5, 5, 5, 5]` counts `(6, 3)` here, where a
/// strict rule would keep sifting and count `(7, 8)`. Sorted and reversed
/// inputs have distinct keys and are unaffected.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeapSort;

impl CountingSorter for HeapSort {
    fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount {
        let mut count = heapify(sequence);
        trace!(
            event = "heapify",
            len = sequence.len() as u64,
            comparisons = count.comparisons,
            swaps = count.swaps,
        );

        let mut last = sequence.len().saturating_sub(1);
        while last > 0 {
            count.swap();
            sequence.swap(0, last);
            last -= 1;
            count += perc_down(sequence, 0, last);
        }
        count
    }
}

/// Turns `sequence` into a max-heap, sifting down from the last parent to the root.
fn heapify(sequence: &mut [i64]) -> OperationCount {
    let mut count = OperationCount::ZERO;
    if sequence.len() < 2 {
        return count;
    }
    let last = sequence.len() - 1;
    for parent in (0..=(sequence.len() - 2) / 2).rev() {
        count += perc_down(sequence, parent, last);
    }
    count
}

/// Sifts `sequence[root]` down until `sequence[root..=last]` is a max-heap again.
///
/// Both subtrees of `root` must already be heaps.
fn perc_down(sequence: &mut [i64], mut root: usize, last: usize) -> OperationCount {
    let mut count = OperationCount::ZERO;
    let mut left = 2 * root + 1;

    while left <= last {
        let largest = if left < last {
            count.compare();
            if sequence[left] < sequence[left + 1] {
                left + 1
            } else {
                left
            }
        } else {
            left
        };

        count.compare();
        if sequence[root] >= sequence[largest] {
            break;
        }

        count.swap();
        sequence.swap(root, largest);
        root = largest;
        left = 2 * root + 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_max_heap(seq: &[i64]) -> bool {
        (1..seq.len()).all(|i| seq[(i - 1) / 2] >= seq[i])
    }

    #[test]
    fn test_heapify_builds_max_heap() {
        let mut data = vec![10, 12, 5, 4, 6, 7, 8, 2, 1];
        heapify(&mut data);
        assert!(is_max_heap(&data));
        assert_eq!(data[0], 12);
    }

    #[test]
    fn test_perc_down_stops_when_root_not_smaller() {
        let mut data = vec![9, 4, 7];
        let count = perc_down(&mut data, 0, 2);
        assert_eq!(count, OperationCount::new(2, 0));
        assert_eq!(data, vec![9, 4, 7]);
    }

    #[test]
    fn test_perc_down_single_child() {
        let mut data = vec![1, 5];
        let count = perc_down(&mut data, 0, 1);
        assert_eq!(count, OperationCount::new(1, 1));
        assert_eq!(data, vec![5, 1]);
    }
}
