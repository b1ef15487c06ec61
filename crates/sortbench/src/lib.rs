//! SortBench - operation counts of classic sorting algorithms
//!
//! Sweep bubble, heap, merge and selection sort over growing inputs and see
//! how many comparisons and swaps each one makes.
//!
//! # Example
//!
//! ```rust
//! use sortbench::prelude::*;
//!
//! let mut data = vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1];
//! let count = SortAlgorithm::BubbleSort.descriptor().sort_in_place(&mut data);
//! assert_eq!(count, OperationCount::new(45, 45));
//! assert_eq!(data, (1..=10).collect::<Vec<i64>>());
//! ```

// Sorters and counts
pub use sortbench_core::{
    AlgorithmDescriptor, BubbleSort, CountingSorter, HeapSort, MergeSort, Metric, OperationCount,
    SelectionSort, ShortBubbleSort, SortAlgorithm,
};

// Inputs
pub use sortbench_core::{Distribution, InputSet};

// Errors
pub use sortbench_core::{Result, SortBenchError};

// Configuration
pub use sortbench_config::{ConfigError, ExperimentConfig, OutputConfig};

// Experiments, results and artifacts
pub use sortbench_benchmark::{
    column_name, run_experiment, sweep_sizes, ChartRenderer, CsvExporter, Experiment,
    ExperimentSession, JsonExporter, MarkdownReport, ResultRow, ResultTable, SIZE_COLUMN,
};

#[cfg(feature = "console")]
pub use sortbench_console as console;

mod run;
pub use run::{load_or_default, run_configured, run_session, CONFIG_FILE};

pub mod prelude {
    pub use super::{
        run_experiment, AlgorithmDescriptor, CountingSorter, Distribution, Metric, OperationCount,
        SortAlgorithm,
    };
    pub use super::{ExperimentConfig, ExperimentSession, ResultTable};
    pub use super::{Result, SortBenchError};
}
