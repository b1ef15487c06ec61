//! Configuration system for SortBench.
//!
//! Load experiment configuration from TOML or YAML files to control the
//! size sweep, the algorithm set, and which artifacts are written, without
//! code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use sortbench_config::ExperimentConfig;
//! use sortbench_core::SortAlgorithm;
//!
//! let config = ExperimentConfig::from_toml_str(r#"
//!     max_size = 500
//!     step = 50
//!     algorithms = ["merge_sort", "heap_sort"]
//!     random_seed = 7
//!
//!     [output]
//!     charts = false
//! "#).unwrap();
//!
//! assert_eq!(config.max_size, 500);
//! assert_eq!(config.algorithms, vec![SortAlgorithm::MergeSort, SortAlgorithm::HeapSort]);
//! assert!(!config.output.charts);
//! assert!(config.output.csv);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use sortbench_config::ExperimentConfig;
//!
//! let config = ExperimentConfig::load("sortbench.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use sortbench_core::{SortAlgorithm, SortBenchError};
use thiserror::Error;

/// Largest input size swept when nothing else is configured.
pub const DEFAULT_MAX_SIZE: i64 = 2500;

/// Size increment when nothing else is configured.
pub const DEFAULT_STEP: i64 = 100;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for SortBenchError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Io(e) => SortBenchError::Io(e),
            ConfigError::Invalid(msg) => SortBenchError::InvalidConfiguration(msg),
            other => SortBenchError::InvalidConfiguration(other.to_string()),
        }
    }
}

/// Main experiment configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExperimentConfig {
    /// Largest input size, inclusive.
    pub max_size: i64,

    /// Increment between swept sizes.
    pub step: i64,

    /// Algorithms to run, in column order.
    pub algorithms: Vec<SortAlgorithm>,

    /// Random seed for reproducible random inputs.
    pub random_seed: Option<u64>,

    /// Evaluate sizes on the rayon thread pool.
    pub parallel: bool,

    /// Artifact configuration.
    pub output: OutputConfig,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            step: DEFAULT_STEP,
            algorithms: SortAlgorithm::DEFAULT_SET.to_vec(),
            random_seed: None,
            parallel: false,
            output: OutputConfig::default(),
        }
    }
}

impl ExperimentConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist or contains invalid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a file, picking the format by extension.
    ///
    /// `.yaml` and `.yml` are parsed as YAML, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Self::from_toml_file(path),
        }
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the largest swept size.
    pub fn with_max_size(mut self, max_size: i64) -> Self {
        self.max_size = max_size;
        self
    }

    /// Sets the size increment.
    pub fn with_step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    /// Replaces the algorithm list.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = SortAlgorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Sets the random seed.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    /// Enables or disables the parallel sweep.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the directory results folders are created in.
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output.base_dir = dir.into();
        self
    }

    /// Checks the sweep parameters and algorithm list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench_config::ExperimentConfig;
    ///
    /// assert!(ExperimentConfig::new().validate().is_ok());
    /// assert!(ExperimentConfig::new().with_max_size(0).validate().is_err());
    /// assert!(ExperimentConfig::new().with_step(0).validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_size <= 0 {
            return Err(ConfigError::Invalid(format!(
                "max_size must be at least 1, got {}",
                self.max_size
            )));
        }
        if self.step <= 0 {
            return Err(ConfigError::Invalid(format!(
                "step must be at least 1, got {}",
                self.step
            )));
        }
        if self.algorithms.is_empty() {
            return Err(ConfigError::Invalid("no algorithms configured".to_string()));
        }
        let mut seen = HashSet::new();
        for algorithm in &self.algorithms {
            if !seen.insert(algorithm) {
                return Err(ConfigError::Invalid(format!(
                    "algorithm {algorithm} listed more than once"
                )));
            }
        }
        Ok(())
    }

    /// Name of the results folder for this sweep.
    ///
    /// # Examples
    ///
    /// ```
    /// use sortbench_config::ExperimentConfig;
    ///
    /// let config = ExperimentConfig::new().with_max_size(2500).with_step(100);
    /// assert_eq!(config.results_dir_name(), "Results - Max 2500 - Inc 100");
    /// ```
    pub fn results_dir_name(&self) -> String {
        results_dir_name(self.max_size, self.step)
    }

    /// Full path of the results folder for this sweep.
    pub fn results_dir(&self) -> PathBuf {
        self.output.base_dir.join(self.results_dir_name())
    }
}

/// Results folder name for a `(max_size, step)` sweep.
pub fn results_dir_name(max_size: i64, step: i64) -> String {
    format!("Results - Max {max_size} - Inc {step}")
}

/// Which artifacts an experiment writes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, rename_all = "snake_case")]
pub struct OutputConfig {
    /// Directory the results folder is created in.
    pub base_dir: PathBuf,

    /// Write `output.csv`.
    pub csv: bool,

    /// Write `report.md`.
    pub markdown: bool,

    /// Write `output.json`.
    pub json: bool,

    /// Render per-algorithm charts and the worst-case overview.
    pub charts: bool,

    /// Columns plotted in the worst-case overview. Empty picks, per
    /// algorithm, the distribution with the most comparisons.
    pub worst_case_columns: Vec<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("."),
            csv: true,
            markdown: false,
            json: false,
            charts: true,
            worst_case_columns: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests;
