//! Experiment result types.

use serde::Serialize;
use sortbench_core::{Distribution, Metric, OperationCount};

/// Name of the first column, holding the input size.
pub const SIZE_COLUMN: &str = "Num items";

/// Result columns contributed by one algorithm (3 distributions x 2 metrics).
pub const COLUMNS_PER_ALGORITHM: usize = Distribution::ALL.len() * Metric::ALL.len();

/// Builds the column name for one (algorithm, distribution, metric) cell.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::column_name;
/// use sortbench_core::{Distribution, Metric};
///
/// assert_eq!(
///     column_name("heap_sort", Distribution::Reverse, Metric::Swaps),
///     "heap_sort-Reverse-Swaps"
/// );
/// ```
pub fn column_name(algorithm: &str, distribution: Distribution, metric: Metric) -> String {
    format!("{}-{}-{}", algorithm, distribution.name(), metric.name())
}

/// Counts recorded for one swept size.
///
/// `counts` holds one entry per (algorithm, distribution) pair, algorithm
/// major, in the table's configured order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultRow {
    /// Input length for every sort in this row.
    pub size: usize,
    /// Operation counts, `algorithm_index * 3 + distribution.index()`.
    pub counts: Vec<OperationCount>,
}

impl ResultRow {
    /// Returns the counts of one algorithm on one distribution.
    ///
    /// # Panics
    ///
    /// Panics if `algorithm_index` is outside the table's algorithm list.
    pub fn count(&self, algorithm_index: usize, distribution: Distribution) -> OperationCount {
        self.counts[algorithm_index * Distribution::ALL.len() + distribution.index()]
    }

    /// Flattens the row into scalar fields: size first, then comparisons and
    /// swaps for every (algorithm, distribution) pair.
    pub fn values(&self) -> Vec<u64> {
        let mut values = Vec::with_capacity(1 + self.counts.len() * Metric::ALL.len());
        values.push(self.size as u64);
        for count in &self.counts {
            values.push(count.comparisons);
            values.push(count.swaps);
        }
        values
    }
}

/// Rows of an experiment, one per swept size, ascending.
///
/// The column set is fixed when the table is created from the algorithm
/// names; every row carries the same number of cells in the same order. A
/// table is only built by the experiment driver and is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultTable {
    algorithm_names: Vec<String>,
    column_names: Vec<String>,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    pub(crate) fn new(algorithm_names: Vec<String>) -> Self {
        let mut column_names = Vec::with_capacity(1 + algorithm_names.len() * COLUMNS_PER_ALGORITHM);
        column_names.push(SIZE_COLUMN.to_string());
        for algorithm in &algorithm_names {
            for distribution in Distribution::ALL {
                for metric in Metric::ALL {
                    column_names.push(column_name(algorithm, distribution, metric));
                }
            }
        }
        Self {
            algorithm_names,
            column_names,
            rows: Vec::new(),
        }
    }

    pub(crate) fn push_row(&mut self, row: ResultRow) {
        debug_assert_eq!(
            row.counts.len(),
            self.algorithm_names.len() * Distribution::ALL.len()
        );
        debug_assert!(self.rows.last().map_or(true, |last| last.size < row.size));
        self.rows.push(row);
    }

    /// Algorithm names in column order.
    pub fn algorithm_names(&self) -> &[String] {
        &self.algorithm_names
    }

    /// Column names: [`SIZE_COLUMN`] then `{algorithm}-{distribution}-{metric}`.
    pub fn column_names(&self) -> &[String] {
        &self.column_names
    }

    /// Rows in ascending size order.
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no size was swept.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Swept sizes, ascending.
    pub fn sizes(&self) -> Vec<usize> {
        self.rows.iter().map(|r| r.size).collect()
    }

    /// Position of an algorithm in the column order.
    pub fn algorithm_index(&self, name: &str) -> Option<usize> {
        self.algorithm_names.iter().position(|n| n == name)
    }

    /// Position of a column in every flattened row.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_names.iter().position(|n| n == name)
    }

    /// All values of one column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<u64>> {
        let index = self.column_index(name)?;
        if index == 0 {
            return Some(self.sizes().into_iter().map(|s| s as u64).collect());
        }
        // Columns after the size come in (comparisons, swaps) pairs per cell.
        let cell = (index - 1) / Metric::ALL.len();
        let metric = Metric::ALL[(index - 1) % Metric::ALL.len()];
        Some(self.rows.iter().map(|row| row.counts[cell].get(metric)).collect())
    }

    /// `(size, value)` points of one algorithm's metric on one distribution.
    ///
    /// Returns `None` if the algorithm is not part of this table.
    pub fn series(
        &self,
        algorithm: &str,
        distribution: Distribution,
        metric: Metric,
    ) -> Option<Vec<(u64, u64)>> {
        let index = self.algorithm_index(algorithm)?;
        Some(
            self.rows
                .iter()
                .map(|row| (row.size as u64, row.count(index, distribution).get(metric)))
                .collect(),
        )
    }

    /// `(size, value)` points of a named column.
    pub fn column_series(&self, name: &str) -> Option<Vec<(u64, u64)>> {
        let values = self.column(name)?;
        Some(
            self.rows
                .iter()
                .zip(values)
                .map(|(row, value)| (row.size as u64, value))
                .collect(),
        )
    }

    /// The last (largest size) row.
    pub fn last_row(&self) -> Option<&ResultRow> {
        self.rows.last()
    }
}
