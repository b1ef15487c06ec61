//! SVG charts of experiment results.
//!
//! One figure per algorithm with two panels (comparisons and swaps against
//! input size, one line per distribution), plus an overview that puts one
//! chosen column per algorithm on shared axes.

use std::error::Error;
use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use sortbench_core::{Distribution, Metric, Result, SortBenchError};
use tracing::info;

use crate::result::{column_name, ResultTable};

/// File name of the worst-case overview chart.
pub const WORST_CASE_FILE: &str = "worst_case_comparison.svg";

// matplotlib's default cycle, so figures look like the usual notebook output.
const PALETTE: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
];

struct Series {
    label: String,
    points: Vec<(u64, u64)>,
    color: RGBColor,
}

/// Renders result tables to SVG files.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::ChartRenderer;
///
/// let renderer = ChartRenderer::new().with_size(800, 600);
/// assert_eq!(renderer.size(), (800, 600));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ChartRenderer {
    width: u32,
    height: u32,
}

impl Default for ChartRenderer {
    fn default() -> Self {
        // 16x12 inches at 120 dpi
        Self {
            width: 1920,
            height: 1440,
        }
    }
}

impl ChartRenderer {
    /// Creates a renderer with the default 1920x1440 canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas size in pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Returns the canvas size in pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Renders `Figure{index}.svg` for every algorithm into `dir`.
    pub fn render_all(&self, table: &ResultTable, dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        let mut paths = Vec::with_capacity(table.algorithm_names().len());
        for (index, name) in table.algorithm_names().iter().enumerate() {
            let path = dir.join(format!("Figure{index}.svg"));
            self.render_algorithm(table, name, &path)?;
            paths.push(path);
        }
        Ok(paths)
    }

    /// Renders the comparisons and swaps panels of one algorithm.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidConfiguration`] if the algorithm is not
    /// in the table, and [`SortBenchError::Render`] if drawing fails.
    pub fn render_algorithm(
        &self,
        table: &ResultTable,
        algorithm: &str,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let comparisons = distribution_series(table, algorithm, Metric::Comparisons)?;
        let swaps = distribution_series(table, algorithm, Metric::Swaps)?;

        self.draw(path, |root| {
            let (left, right) = root.split_horizontally((self.width / 2) as i32);
            draw_panel(
                &left,
                &format!("Number of items vs number of comparisons in {algorithm}"),
                "Number of comparisons",
                &comparisons,
            )?;
            draw_panel(
                &right,
                &format!("Number of items vs number of swaps in {algorithm}"),
                "Number of swaps",
                &swaps,
            )
        })?;

        info!(event = "chart", path = %path.display(), algorithm = algorithm);
        Ok(())
    }

    /// Renders the named columns on one set of axes.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidConfiguration`] for an unknown column,
    /// and [`SortBenchError::Render`] if drawing fails.
    pub fn render_columns<S: AsRef<str>>(
        &self,
        table: &ResultTable,
        columns: &[S],
        title: &str,
        path: impl AsRef<Path>,
    ) -> Result<()> {
        let path = path.as_ref();
        let series = columns
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let name = name.as_ref();
                let points = table
                    .column_series(name)
                    .ok_or_else(|| SortBenchError::invalid(format!("unknown column {name}")))?;
                Ok(Series {
                    label: name.to_string(),
                    points,
                    color: PALETTE[i % PALETTE.len()],
                })
            })
            .collect::<Result<Vec<_>>>()?;

        self.draw(path, |root| draw_panel(root, title, "Number of comparisons", &series))?;

        info!(event = "chart", path = %path.display(), series = series.len() as u64);
        Ok(())
    }

    /// Renders the worst-case overview into `dir`.
    ///
    /// With no explicit `columns`, uses [`worst_case_columns`].
    pub fn render_worst_case<S: AsRef<str>>(
        &self,
        table: &ResultTable,
        columns: &[S],
        dir: impl AsRef<Path>,
    ) -> Result<PathBuf> {
        let path = dir.as_ref().join(WORST_CASE_FILE);
        let title = "Number of comparisons vs number of items, worst cases";
        if columns.is_empty() {
            self.render_columns(table, &worst_case_columns(table), title, &path)?;
        } else {
            self.render_columns(table, columns, title, &path)?;
        }
        Ok(path)
    }

    fn draw<F>(&self, path: &Path, paint: F) -> Result<()>
    where
        F: FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> std::result::Result<(), Box<dyn Error>>,
    {
        let root = SVGBackend::new(path, (self.width, self.height)).into_drawing_area();
        let drawn = root
            .fill(&WHITE)
            .map_err(|e| Box::new(e) as Box<dyn Error>)
            .and_then(|_| paint(&root))
            .and_then(|_| root.present().map_err(|e| Box::new(e) as Box<dyn Error>));
        drawn.map_err(|e| SortBenchError::Render(format!("{}: {}", path.display(), e)))
    }
}

/// Picks, per algorithm, the comparisons column of the distribution with
/// the most comparisons at the largest swept size.
///
/// Ties go to the earlier distribution (Sorted, then Reverse, then Random).
pub fn worst_case_columns(table: &ResultTable) -> Vec<String> {
    let Some(last) = table.last_row() else {
        return Vec::new();
    };
    table
        .algorithm_names()
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let mut worst = Distribution::Sorted;
            for distribution in Distribution::ALL {
                if last.count(index, distribution).comparisons
                    > last.count(index, worst).comparisons
                {
                    worst = distribution;
                }
            }
            column_name(name, worst, Metric::Comparisons)
        })
        .collect()
}

fn distribution_series(table: &ResultTable, algorithm: &str, metric: Metric) -> Result<Vec<Series>> {
    Distribution::ALL
        .iter()
        .map(|&distribution| {
            let points = table
                .series(algorithm, distribution, metric)
                .ok_or_else(|| SortBenchError::invalid(format!("unknown algorithm {algorithm}")))?;
            Ok(Series {
                label: column_name(algorithm, distribution, metric),
                points,
                color: PALETTE[distribution.index()],
            })
        })
        .collect()
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    y_desc: &str,
    series: &[Series],
) -> std::result::Result<(), Box<dyn Error>> {
    let x_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.0))
        .max()
        .unwrap_or(0)
        .max(1);
    let y_max = series
        .iter()
        .flat_map(|s| s.points.iter().map(|p| p.1))
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(90)
        .build_cartesian_2d(0..x_max, 0..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Number of items")
        .y_desc(y_desc)
        .draw()?;

    for s in series {
        let color = s.color;
        chart
            .draw_series(LineSeries::new(s.points.iter().copied(), color.stroke_width(2)))?
            .label(s.label.as_str())
            .legend(move |(x, y)| {
                PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2))
            });
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}
