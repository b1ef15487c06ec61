//! Experiment entry points that hide the session wiring.

use std::path::Path;

use sortbench_benchmark::ExperimentSession;
use sortbench_config::ExperimentConfig;
use sortbench_core::Result;
use tracing::info;

/// Configuration file read by [`run_configured`].
pub const CONFIG_FILE: &str = "sortbench.toml";

/// Runs an experiment configured by [`CONFIG_FILE`] in the working directory,
/// falling back to defaults when the file is missing.
///
/// # Errors
///
/// A config file that exists but does not parse is an error, as are the
/// failures of [`run_session`].
pub fn run_configured() -> Result<ExperimentSession> {
    run_session(load_or_default(CONFIG_FILE)?)
}

/// Loads `path` if it exists, or returns the default configuration.
///
/// The format is picked by extension, as in [`ExperimentConfig::from_file`].
pub fn load_or_default(path: impl AsRef<Path>) -> Result<ExperimentConfig> {
    let path = path.as_ref();
    if !path.is_file() {
        return Ok(ExperimentConfig::default());
    }
    Ok(ExperimentConfig::from_file(path)?)
}

/// Runs `config`, then writes every artifact its output section enables.
///
/// # Errors
///
/// Fails on an invalid configuration, or when an export or chart cannot be
/// written.
pub fn run_session(config: ExperimentConfig) -> Result<ExperimentSession> {
    let mut session = ExperimentSession::new(config)?;
    session.run()?;

    let output = &session.config().output;
    let exports = output.csv || output.markdown || output.json;
    let charts = output.charts;

    let mut written = 0;
    if exports {
        written += session.export_data()?.len();
    }
    if charts {
        written += session.plot_data()?.len();
    }
    info!(
        event = "results",
        path = %session.results_dir().display(),
        files = written as u64,
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortbench_core::SortBenchError;
    use std::fs;

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_or_default(dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, ExperimentConfig::default());
    }

    #[test]
    fn test_malformed_config_file_is_surfaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "max_size = 20\nalgorithms = [\"quick_sort\"]\n").unwrap();

        let err = load_or_default(&path).unwrap_err();
        assert!(matches!(err, SortBenchError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_existing_config_file_is_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "max_size = 20\nstep = 10\n").unwrap();

        let config = load_or_default(&path).unwrap();
        assert_eq!((config.max_size, config.step), (20, 10));
    }

    #[test]
    fn test_run_session_writes_enabled_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ExperimentConfig::new()
            .with_max_size(20)
            .with_step(10)
            .with_random_seed(4)
            .with_base_dir(dir.path());
        config.output.charts = false;
        config.output.json = true;

        let session = run_session(config).unwrap();
        let results = session.results_dir();
        assert!(results.join("output.csv").is_file());
        assert!(results.join("output.json").is_file());
        assert!(!results.join("report.md").exists());
        assert!(!results.join("Figure0.svg").exists());
        assert_eq!(session.table().unwrap().sizes(), vec![0, 10, 20]);
    }

    #[test]
    fn test_run_session_without_outputs_creates_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ExperimentConfig::new()
            .with_max_size(10)
            .with_step(5)
            .with_base_dir(dir.path());
        config.output.csv = false;
        config.output.charts = false;

        let session = run_session(config).unwrap();
        assert!(!session.results_dir().exists());
    }

    #[test]
    fn test_run_session_rejects_invalid_config() {
        let config = ExperimentConfig::new().with_max_size(0);
        assert!(run_session(config).is_err());
    }
}
