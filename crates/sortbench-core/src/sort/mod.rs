//! Instrumented sorting algorithms.
//!
//! Every sorter sorts an `i64` slice ascending in place and reports how many
//! element comparisons and swaps it performed. What counts as a "swap" is
//! algorithm specific:
//!
//! - [`BubbleSort`] / [`ShortBubbleSort`]: adjacent exchanges
//! - [`SelectionSort`]: one exchange per misplaced minimum
//! - [`MergeSort`]: one per element taken from the right half while merging
//! - [`HeapSort`]: sift-down exchanges plus one per root extraction
//!
//! The counting rules are part of each sorter's contract; the exact totals
//! are asserted in the tests.

mod bubble;
mod heap;
mod merge;
mod selection;

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::count::OperationCount;

pub use bubble::{BubbleSort, ShortBubbleSort};
pub use heap::HeapSort;
pub use merge::MergeSort;
pub use selection::SelectionSort;

/// A sorting algorithm that counts its own work.
///
/// Implementations are stateless; all counting happens in locals of a single
/// call, so one sorter may be shared across threads.
pub trait CountingSorter: Send + Sync + Debug {
    /// Sorts `sequence` ascending in place and returns the operations performed.
    fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount;
}

/// Named reference to a [`CountingSorter`].
///
/// The name is the algorithm's identity in result columns and charts; the
/// position in the configured list determines column order.
///
/// # Example
///
/// ```
/// use sortbench_core::{AlgorithmDescriptor, BubbleSort};
///
/// let descriptor = AlgorithmDescriptor::new("bubble_sort", BubbleSort);
/// let mut data = vec![3, 1, 2];
/// let count = descriptor.sort_in_place(&mut data);
///
/// assert_eq!(descriptor.name(), "bubble_sort");
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(count.comparisons, 3);
/// ```
#[derive(Clone)]
pub struct AlgorithmDescriptor {
    name: String,
    sorter: Arc<dyn CountingSorter>,
}

impl AlgorithmDescriptor {
    /// Creates a descriptor for `sorter` under `name`.
    pub fn new(name: impl Into<String>, sorter: impl CountingSorter + 'static) -> Self {
        Self {
            name: name.into(),
            sorter: Arc::new(sorter),
        }
    }

    /// Returns the algorithm name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the underlying sorter.
    pub fn sorter(&self) -> &dyn CountingSorter {
        self.sorter.as_ref()
    }

    /// Runs the sorter on `sequence`.
    pub fn sort_in_place(&self, sequence: &mut [i64]) -> OperationCount {
        self.sorter.sort_in_place(sequence)
    }
}

impl Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("name", &self.name)
            .field("sorter", &self.sorter)
            .finish()
    }
}

impl PartialEq for AlgorithmDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for AlgorithmDescriptor {}

/// The built-in sorters, as named in configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum SortAlgorithm {
    /// Canonical bubble sort, no early exit.
    BubbleSort,
    /// Bubble sort that stops after a pass without swaps.
    BubbleSortShort,
    HeapSort,
    MergeSort,
    SelectionSort,
}

impl SortAlgorithm {
    /// Every built-in sorter.
    pub const ALL: [SortAlgorithm; 5] = [
        SortAlgorithm::BubbleSort,
        SortAlgorithm::BubbleSortShort,
        SortAlgorithm::HeapSort,
        SortAlgorithm::MergeSort,
        SortAlgorithm::SelectionSort,
    ];

    /// The experiment's default algorithm set, in column order.
    pub const DEFAULT_SET: [SortAlgorithm; 4] = [
        SortAlgorithm::BubbleSort,
        SortAlgorithm::HeapSort,
        SortAlgorithm::MergeSort,
        SortAlgorithm::SelectionSort,
    ];

    /// Column name of this algorithm.
    pub fn name(&self) -> &'static str {
        match self {
            SortAlgorithm::BubbleSort => "bubble_sort",
            SortAlgorithm::BubbleSortShort => "bubble_sort_short",
            SortAlgorithm::HeapSort => "heap_sort",
            SortAlgorithm::MergeSort => "merge_sort",
            SortAlgorithm::SelectionSort => "selection_sort",
        }
    }

    /// Looks up a built-in sorter by its column name.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_core::SortAlgorithm;
    ///
    /// assert_eq!(SortAlgorithm::from_name("merge_sort"), Some(SortAlgorithm::MergeSort));
    /// assert_eq!(SortAlgorithm::from_name("quick_sort"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.name() == name)
    }

    /// Builds the descriptor for this sorter.
    pub fn descriptor(&self) -> AlgorithmDescriptor {
        match self {
            SortAlgorithm::BubbleSort => AlgorithmDescriptor::new(self.name(), BubbleSort),
            SortAlgorithm::BubbleSortShort => {
                AlgorithmDescriptor::new(self.name(), ShortBubbleSort)
            }
            SortAlgorithm::HeapSort => AlgorithmDescriptor::new(self.name(), HeapSort),
            SortAlgorithm::MergeSort => AlgorithmDescriptor::new(self.name(), MergeSort),
            SortAlgorithm::SelectionSort => AlgorithmDescriptor::new(self.name(), SelectionSort),
        }
    }

    /// Descriptors for the default experiment set.
    pub fn default_descriptors() -> Vec<AlgorithmDescriptor> {
        Self::DEFAULT_SET.iter().map(|a| a.descriptor()).collect()
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests;
