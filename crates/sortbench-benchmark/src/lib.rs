//! Experiment driver for SortBench.
//!
//! This crate sweeps the instrumented sorters of `sortbench-core` over a grid
//! of input sizes, collects the counts into a [`ResultTable`], and writes the
//! table out as files and charts.
//!
//! # Overview
//!
//! - Sweep sizes `0, step, 2*step, ..` up to a maximum
//! - Generate one sorted, reversed and random input per size
//! - Run every algorithm on a private copy of every input
//! - Export results to CSV, Markdown and JSON, and render SVG charts
//!
//! # Example
//!
//! ```
//! use sortbench_benchmark::{run_experiment, CsvExporter};
//! use sortbench_core::SortAlgorithm;
//!
//! let table = run_experiment(100, 50, &SortAlgorithm::default_descriptors()).unwrap();
//!
//! assert_eq!(table.sizes(), vec![0, 50, 100]);
//! assert_eq!(table.column_names()[0], "Num items");
//! assert!(CsvExporter::to_string(&table).starts_with("Num items,bubble_sort-"));
//! ```
//!
//! A configured run with files on disk:
//!
//! ```text
//! let config = ExperimentConfig::load("sortbench.toml")?;
//! let mut session = ExperimentSession::new(config)?;
//! session.run()?;
//! session.export_data()?;
//! session.plot_data()?;
//! ```

mod chart;
mod report;
mod result;
mod runner;
mod session;

pub use chart::{worst_case_columns, ChartRenderer, WORST_CASE_FILE};
pub use report::{CsvExporter, JsonExporter, MarkdownReport};
pub use result::{column_name, ResultRow, ResultTable, COLUMNS_PER_ALGORITHM, SIZE_COLUMN};
pub use runner::{run_experiment, sweep_sizes, Experiment};
pub use session::{ExperimentSession, CSV_FILE, JSON_FILE, MARKDOWN_FILE};
