//! Experiment session: one configuration, at most one result table.

use std::fs;
use std::path::PathBuf;

use sortbench_config::ExperimentConfig;
use sortbench_core::{Result, SortBenchError};
use tracing::info;

use crate::chart::ChartRenderer;
use crate::report::{CsvExporter, JsonExporter, MarkdownReport};
use crate::result::ResultTable;
use crate::runner::Experiment;

/// File name of the CSV export.
pub const CSV_FILE: &str = "output.csv";

/// File name of the Markdown report.
pub const MARKDOWN_FILE: &str = "report.md";

/// File name of the JSON export.
pub const JSON_FILE: &str = "output.json";

/// Holds a configuration and the table produced by its last run.
///
/// Export and plotting read the table, so both fail with
/// [`SortBenchError::PreconditionViolation`] until [`run`](Self::run) has
/// completed.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::ExperimentSession;
/// use sortbench_config::ExperimentConfig;
///
/// let config = ExperimentConfig::new().with_max_size(20).with_step(10).with_random_seed(1);
/// let mut session = ExperimentSession::new(config).unwrap();
/// assert!(session.table().is_err());
///
/// let table = session.run().unwrap();
/// assert_eq!(table.sizes(), vec![0, 10, 20]);
/// ```
#[derive(Debug, Clone)]
pub struct ExperimentSession {
    config: ExperimentConfig,
    table: Option<ResultTable>,
    renderer: ChartRenderer,
}

impl ExperimentSession {
    /// Creates a session after validating `config`.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidConfiguration`] if the configuration
    /// does not validate.
    pub fn new(config: ExperimentConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            table: None,
            renderer: ChartRenderer::default(),
        })
    }

    /// Uses `renderer` for [`plot_data`](Self::plot_data).
    pub fn with_renderer(mut self, renderer: ChartRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs the configured experiment, replacing any previous table.
    pub fn run(&mut self) -> Result<&ResultTable> {
        self.table = Some(Experiment::from_config(&self.config)?.run());
        self.table()
    }

    /// The table of the last run.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::PreconditionViolation`] before the first run.
    pub fn table(&self) -> Result<&ResultTable> {
        self.table
            .as_ref()
            .ok_or_else(|| SortBenchError::precondition("no experiment has been run"))
    }

    /// Path of the results folder, whether or not it exists yet.
    pub fn results_dir(&self) -> PathBuf {
        self.config.results_dir()
    }

    /// Writes the enabled exports into the results folder.
    ///
    /// Returns the written paths in the order CSV, Markdown, JSON.
    pub fn export_data(&self) -> Result<Vec<PathBuf>> {
        let table = self.table()?;
        let dir = self.ensure_results_dir()?;
        let output = &self.config.output;
        let mut written = Vec::new();

        if output.csv {
            let path = dir.join(CSV_FILE);
            CsvExporter::to_file(table, &path)?;
            info!(event = "export", path = %path.display(), format = "csv");
            written.push(path);
        }
        if output.markdown {
            let path = dir.join(MARKDOWN_FILE);
            MarkdownReport::to_file(table, &path)?;
            info!(event = "export", path = %path.display(), format = "markdown");
            written.push(path);
        }
        if output.json {
            let path = dir.join(JSON_FILE);
            JsonExporter::to_file(table, &path)?;
            info!(event = "export", path = %path.display(), format = "json");
            written.push(path);
        }
        Ok(written)
    }

    /// Renders every per-algorithm figure and the worst-case overview.
    ///
    /// Runs regardless of `output.charts`; callers decide whether to plot.
    pub fn plot_data(&self) -> Result<Vec<PathBuf>> {
        let table = self.table()?;
        let dir = self.ensure_results_dir()?;
        let mut written = self.renderer.render_all(table, &dir)?;
        written.push(self.renderer.render_worst_case(
            table,
            &self.config.output.worst_case_columns,
            &dir,
        )?);
        Ok(written)
    }

    fn ensure_results_dir(&self) -> Result<PathBuf> {
        let dir = self.results_dir();
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}
