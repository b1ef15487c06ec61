//! Report generation for experiment results.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde::Serialize;
use sortbench_core::{Distribution, Result, SortBenchError};

use crate::result::{ResultTable, SIZE_COLUMN};

/// CSV exporter for result tables.
///
/// The header row is the table's column names; each data row is one swept
/// size. The output opens directly in spreadsheet applications.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{run_experiment, CsvExporter};
/// use sortbench_core::SortAlgorithm;
///
/// let table = run_experiment(4, 2, &[SortAlgorithm::BubbleSort.descriptor()]).unwrap();
/// let csv = CsvExporter::to_string(&table);
/// assert!(csv.starts_with("Num items,bubble_sort-Sorted-Comparisons,"));
/// assert_eq!(csv.lines().count(), 4);
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Exports every column to a CSV string.
    pub fn to_string(table: &ResultTable) -> String {
        let mut output = table.column_names().join(",");
        output.push('\n');
        for row in table.rows() {
            push_record(&mut output, &row.values());
        }
        output
    }

    /// Exports the named columns, in the given order, to a CSV string.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidConfiguration`] for a column the table
    /// does not have.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{run_experiment, CsvExporter};
    /// use sortbench_core::SortAlgorithm;
    ///
    /// let table = run_experiment(2, 2, &[SortAlgorithm::MergeSort.descriptor()]).unwrap();
    /// let csv = CsvExporter::columns_to_string(
    ///     &table,
    ///     &["Num items", "merge_sort-Reverse-Comparisons"],
    /// ).unwrap();
    /// assert_eq!(csv, "Num items,merge_sort-Reverse-Comparisons\n0,0\n2,1\n");
    /// ```
    pub fn columns_to_string<S: AsRef<str>>(table: &ResultTable, columns: &[S]) -> Result<String> {
        let indices = columns
            .iter()
            .map(|name| {
                table.column_index(name.as_ref()).ok_or_else(|| {
                    SortBenchError::invalid(format!("unknown column {}", name.as_ref()))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let header: Vec<&str> = columns.iter().map(AsRef::as_ref).collect();
        let mut output = header.join(",");
        output.push('\n');
        for row in table.rows() {
            let values = row.values();
            let selected: Vec<u64> = indices.iter().map(|&i| values[i]).collect();
            push_record(&mut output, &selected);
        }
        Ok(output)
    }

    /// Exports the table to a CSV file.
    pub fn to_file(table: &ResultTable, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(table))
    }

    /// Writes the table as CSV to a writer.
    pub fn write<W: Write>(table: &ResultTable, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(table).as_bytes())
    }
}

fn push_record(output: &mut String, values: &[u64]) {
    let fields: Vec<String> = values.iter().map(u64::to_string).collect();
    output.push_str(&fields.join(","));
    output.push('\n');
}

/// Markdown report generator.
///
/// Generates a human-readable report: sweep metadata, the counts at the
/// largest size, and one table per algorithm.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{run_experiment, MarkdownReport};
/// use sortbench_core::SortAlgorithm;
///
/// let table = run_experiment(10, 10, &SortAlgorithm::default_descriptors()).unwrap();
/// let md = MarkdownReport::to_string(&table);
/// assert!(md.contains("# Sorting Benchmark"));
/// assert!(md.contains("## Largest Size"));
/// assert!(md.contains("### heap_sort"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(table: &ResultTable) -> String {
        let mut output = String::new();
        // Writing into a String cannot fail.
        let _ = Self::render(table, &mut output);
        output
    }

    fn render(table: &ResultTable, output: &mut String) -> std::fmt::Result {
        writeln!(output, "# Sorting Benchmark")?;
        writeln!(output)?;

        let sizes = table.sizes();
        writeln!(output, "- **Algorithms**: {}", table.algorithm_names().join(", "))?;
        writeln!(output, "- **Sizes**: {}", sizes.len())?;
        if let (Some(first), Some(last)) = (sizes.first(), sizes.last()) {
            writeln!(output, "- **Range**: {} to {}", first, last)?;
        }
        writeln!(output)?;

        writeln!(output, "## Largest Size")?;
        writeln!(output)?;
        match table.last_row() {
            Some(row) => {
                writeln!(output, "n = {}", row.size)?;
                writeln!(output)?;
                writeln!(output, "| Algorithm | Distribution | Comparisons | Swaps |")?;
                writeln!(output, "|-----------|--------------|-------------|-------|")?;
                for (index, name) in table.algorithm_names().iter().enumerate() {
                    for distribution in Distribution::ALL {
                        let count = row.count(index, distribution);
                        writeln!(
                            output,
                            "| {} | {} | {} | {} |",
                            name, distribution, count.comparisons, count.swaps
                        )?;
                    }
                }
            }
            None => writeln!(output, "*No sizes swept.*")?,
        }
        writeln!(output)?;

        if table.is_empty() {
            return Ok(());
        }

        writeln!(output, "## Results")?;
        for (index, name) in table.algorithm_names().iter().enumerate() {
            writeln!(output)?;
            writeln!(output, "### {}", name)?;
            writeln!(output)?;

            write!(output, "| {} |", SIZE_COLUMN)?;
            for distribution in Distribution::ALL {
                write!(output, " {d} cmp | {d} swp |", d = distribution)?;
            }
            writeln!(output)?;
            write!(output, "|---|")?;
            for _ in Distribution::ALL {
                write!(output, "---|---|")?;
            }
            writeln!(output)?;

            for row in table.rows() {
                write!(output, "| {} |", row.size)?;
                for distribution in Distribution::ALL {
                    let count = row.count(index, distribution);
                    write!(output, " {} | {} |", count.comparisons, count.swaps)?;
                }
                writeln!(output)?;
            }
        }

        Ok(())
    }

    /// Writes Markdown report to a file.
    pub fn to_file(table: &ResultTable, path: impl AsRef<Path>) -> io::Result<()> {
        fs::write(path, Self::to_string(table))
    }

    /// Writes Markdown report to a writer.
    pub fn write<W: Write>(table: &ResultTable, mut writer: W) -> io::Result<()> {
        writer.write_all(Self::to_string(table).as_bytes())
    }
}

/// JSON exporter.
///
/// Emits `{"columns": [...], "rows": [[...], ...]}` with rows flattened in
/// column order.
pub struct JsonExporter;

#[derive(Serialize)]
struct JsonTable<'a> {
    columns: &'a [String],
    rows: Vec<Vec<u64>>,
}

impl JsonExporter {
    /// Exports the table to a pretty-printed JSON string.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{run_experiment, JsonExporter};
    /// use sortbench_core::SortAlgorithm;
    ///
    /// let table = run_experiment(1, 1, &[SortAlgorithm::HeapSort.descriptor()]).unwrap();
    /// let json = JsonExporter::to_string(&table).unwrap();
    /// assert!(json.contains("\"heap_sort-Random-Swaps\""));
    /// ```
    pub fn to_string(table: &ResultTable) -> Result<String> {
        let doc = JsonTable {
            columns: table.column_names(),
            rows: table.rows().iter().map(|r| r.values()).collect(),
        };
        serde_json::to_string_pretty(&doc).map_err(|e| SortBenchError::Serialization(e.to_string()))
    }

    /// Exports the table to a JSON file.
    pub fn to_file(table: &ResultTable, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, Self::to_string(table)?)?;
        Ok(())
    }

    /// Writes the table as JSON to a writer.
    pub fn write<W: Write>(table: &ResultTable, mut writer: W) -> Result<()> {
        writer.write_all(Self::to_string(table)?.as_bytes())?;
        Ok(())
    }
}
