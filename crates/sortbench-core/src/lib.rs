//! SortBench Core - instrumented sorting algorithms
//!
//! This crate provides the pieces an experiment is built from:
//! - Counting sorters behind the [`CountingSorter`] trait
//! - [`OperationCount`] and [`Metric`] for what the sorters report
//! - Input generators for the three [`Distribution`]s
//! - The shared error type

pub mod count;
pub mod error;
pub mod input;
pub mod sort;

pub use count::{Metric, OperationCount};
pub use error::{Result, SortBenchError};
pub use input::{Distribution, InputSet};
pub use sort::{
    AlgorithmDescriptor, BubbleSort, CountingSorter, HeapSort, MergeSort, SelectionSort,
    ShortBubbleSort, SortAlgorithm,
};
