//! Counting contracts for the built-in sorters.

use super::*;
use crate::count::OperationCount;
use sortbench_test::assert_sorted_permutation;
use sortbench_test::sequences::{all_equal, n_down_to_one, one_to, seeded_random, with_duplicates};

fn run(sorter: &dyn CountingSorter, input: &[i64]) -> (Vec<i64>, OperationCount) {
    let mut data = input.to_vec();
    let count = sorter.sort_in_place(&mut data);
    (data, count)
}

fn counts(sorter: &dyn CountingSorter, input: &[i64]) -> (u64, u64) {
    run(sorter, input).1.as_tuple()
}

fn triangle(n: u64) -> u64 {
    n * n.saturating_sub(1) / 2
}

#[test]
fn test_bubble_sort_reference_counts() {
    assert_eq!(counts(&BubbleSort, &one_to(10)), (45, 0));
    assert_eq!(counts(&BubbleSort, &n_down_to_one(10)), (45, 45));
}

#[test]
fn test_short_bubble_sort_reference_counts() {
    assert_eq!(counts(&ShortBubbleSort, &one_to(10)), (9, 0));
    assert_eq!(counts(&ShortBubbleSort, &n_down_to_one(10)), (45, 45));
}

#[test]
fn test_selection_sort_reference_counts() {
    assert_eq!(counts(&SelectionSort, &one_to(10)), (55, 0));
    assert_eq!(counts(&SelectionSort, &n_down_to_one(10)), (55, 5));
}

#[test]
fn test_merge_sort_reference_counts() {
    assert_eq!(counts(&MergeSort, &one_to(10)), (15, 0));
    assert_eq!(counts(&MergeSort, &n_down_to_one(10)), (19, 19));
}

#[test]
fn test_heap_sort_reference_counts() {
    assert_eq!(counts(&HeapSort, &one_to(10)), (41, 30));
    assert_eq!(counts(&HeapSort, &n_down_to_one(10)), (35, 21));
}

#[test]
fn test_counts_with_duplicate_keys() {
    let input = with_duplicates();
    assert_eq!(counts(&BubbleSort, &input), (21, 11));
    assert_eq!(counts(&ShortBubbleSort, &input), (20, 11));
    assert_eq!(counts(&SelectionSort, &input), (28, 5));
    assert_eq!(counts(&MergeSort, &input), (14, 7));
    assert_eq!(counts(&HeapSort, &input), (17, 13));
}

#[test]
fn test_counts_with_equal_keys() {
    let input = all_equal(4, 5);
    assert_eq!(counts(&BubbleSort, &input), (6, 0));
    assert_eq!(counts(&ShortBubbleSort, &input), (3, 0));
    // The last-index seed makes selection sort shuffle equal keys.
    assert_eq!(counts(&SelectionSort, &input), (10, 3));
    assert_eq!(counts(&MergeSort, &input), (4, 0));
    assert_eq!(counts(&HeapSort, &input), (6, 3));
}

#[test]
fn test_bubble_sort_comparisons_are_triangular() {
    for n in 0..40 {
        let input = seeded_random(n, n as u64);
        let (_, count) = run(&BubbleSort, &input);
        assert_eq!(count.comparisons, triangle(n as u64), "n = {n}");
    }
}

#[test]
fn test_bubble_sort_worst_case_swaps() {
    for n in 1..30 {
        let (_, count) = run(&BubbleSort, &n_down_to_one(n));
        assert_eq!(count.swaps, triangle(n as u64));
    }
}

#[test]
fn test_selection_sort_comparisons_ignore_order() {
    for n in 0..40 {
        let expected = triangle(n as u64) + n as u64;
        for input in [one_to(n), n_down_to_one(n), seeded_random(n, 99)] {
            let (_, count) = run(&SelectionSort, &input);
            assert_eq!(count.comparisons, expected, "n = {n}");
        }
    }
}

#[test]
fn test_all_sorters_produce_sorted_permutation() {
    for algorithm in SortAlgorithm::ALL {
        let descriptor = algorithm.descriptor();
        for n in [0, 1, 2, 3, 7, 16, 33, 100] {
            for input in [
                one_to(n),
                n_down_to_one(n),
                seeded_random(n, 5),
                all_equal(n, 1),
            ] {
                let (output, _) = run(descriptor.sorter(), &input);
                assert_sorted_permutation(&input, &output);
            }
        }
    }
}

#[test]
fn test_sorting_sorted_input_is_idempotent() {
    for algorithm in SortAlgorithm::ALL {
        let input = one_to(25);
        let (output, count) = run(algorithm.descriptor().sorter(), &input);
        assert_eq!(output, input);
        if algorithm != SortAlgorithm::HeapSort {
            assert_eq!(count.swaps, 0, "{algorithm}");
        }
    }
}

#[test]
fn test_counts_are_deterministic() {
    let input = seeded_random(200, 42);
    for sorter in [&MergeSort as &dyn CountingSorter, &HeapSort] {
        assert_eq!(run(sorter, &input).1, run(sorter, &input).1);
    }
}

#[test]
fn test_trivial_inputs_cost_nothing() {
    for algorithm in [
        SortAlgorithm::BubbleSort,
        SortAlgorithm::BubbleSortShort,
        SortAlgorithm::HeapSort,
        SortAlgorithm::MergeSort,
    ] {
        let sorter = algorithm.descriptor();
        assert_eq!(run(sorter.sorter(), &[]).1, OperationCount::ZERO);
        assert_eq!(run(sorter.sorter(), &[7]).1, OperationCount::ZERO);
    }
    // Selection sort still compares the single element with itself.
    assert_eq!(counts(&SelectionSort, &[]), (0, 0));
    assert_eq!(counts(&SelectionSort, &[7]), (1, 0));
}

#[test]
fn test_algorithm_names_round_trip() {
    for algorithm in SortAlgorithm::ALL {
        assert_eq!(SortAlgorithm::from_name(algorithm.name()), Some(algorithm));
        assert_eq!(algorithm.descriptor().name(), algorithm.name());
    }
}

#[test]
fn test_default_descriptor_order() {
    let names: Vec<_> = SortAlgorithm::default_descriptors()
        .iter()
        .map(|d| d.name().to_string())
        .collect();
    assert_eq!(
        names,
        ["bubble_sort", "heap_sort", "merge_sort", "selection_sort"]
    );
}

#[test]
fn test_descriptor_identity_is_name() {
    let a = AlgorithmDescriptor::new("fast", MergeSort);
    let b = AlgorithmDescriptor::new("fast", HeapSort);
    let c = AlgorithmDescriptor::new("slow", MergeSort);
    assert_eq!(a, b);
    assert_ne!(a, c);
}
