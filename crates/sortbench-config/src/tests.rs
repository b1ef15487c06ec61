//! Tests for experiment configuration.

use super::*;
use std::io::Write;

#[test]
fn test_toml_parsing() {
    let toml = r#"
        max_size = 1000
        step = 25
        algorithms = ["bubble_sort_short", "selection_sort"]
        random_seed = 42
        parallel = true

        [output]
        base_dir = "out"
        markdown = true
        worst_case_columns = ["selection_sort-Random-Comparisons"]
    "#;

    let config = ExperimentConfig::from_toml_str(toml).unwrap();
    assert_eq!(config.max_size, 1000);
    assert_eq!(config.step, 25);
    assert_eq!(
        config.algorithms,
        vec![SortAlgorithm::BubbleSortShort, SortAlgorithm::SelectionSort]
    );
    assert_eq!(config.random_seed, Some(42));
    assert!(config.parallel);
    assert_eq!(config.output.base_dir, PathBuf::from("out"));
    assert!(config.output.markdown);
    assert!(config.output.csv);
    assert_eq!(config.output.worst_case_columns.len(), 1);
}

#[test]
fn test_yaml_parsing() {
    let yaml = r#"
        max_size: 300
        step: 30
        algorithms:
          - heap_sort
          - merge_sort
        output:
          charts: false
          json: true
    "#;

    let config = ExperimentConfig::from_yaml_str(yaml).unwrap();
    assert_eq!(config.max_size, 300);
    assert_eq!(
        config.algorithms,
        vec![SortAlgorithm::HeapSort, SortAlgorithm::MergeSort]
    );
    assert!(!config.output.charts);
    assert!(config.output.json);
    assert_eq!(config.random_seed, None);
}

#[test]
fn test_empty_document_uses_defaults() {
    let config = ExperimentConfig::from_toml_str("").unwrap();
    assert_eq!(config, ExperimentConfig::default());
    assert_eq!(config.max_size, DEFAULT_MAX_SIZE);
    assert_eq!(config.step, DEFAULT_STEP);
    assert_eq!(config.algorithms, SortAlgorithm::DEFAULT_SET.to_vec());
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    let err = ExperimentConfig::from_toml_str(r#"algorithms = ["quick_sort"]"#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn test_builder() {
    let config = ExperimentConfig::new()
        .with_max_size(50)
        .with_step(5)
        .with_algorithms([SortAlgorithm::MergeSort])
        .with_random_seed(123)
        .with_parallel(true)
        .with_base_dir("/tmp/bench");

    assert_eq!(config.max_size, 50);
    assert_eq!(config.random_seed, Some(123));
    assert_eq!(config.algorithms.len(), 1);
    assert_eq!(
        config.results_dir(),
        PathBuf::from("/tmp/bench/Results - Max 50 - Inc 5")
    );
}

#[test]
fn test_validation_failures() {
    let negative = ExperimentConfig::new().with_max_size(-3);
    assert!(matches!(negative.validate(), Err(ConfigError::Invalid(_))));

    let empty = ExperimentConfig::new().with_algorithms(Vec::new());
    assert!(matches!(empty.validate(), Err(ConfigError::Invalid(_))));

    let duplicate = ExperimentConfig::new()
        .with_algorithms([SortAlgorithm::HeapSort, SortAlgorithm::HeapSort]);
    let err = duplicate.validate().unwrap_err();
    assert!(err.to_string().contains("heap_sort"));
}

#[test]
fn test_config_error_maps_to_invalid_configuration() {
    let err: SortBenchError = ConfigError::Invalid("bad".to_string()).into();
    assert!(matches!(err, SortBenchError::InvalidConfiguration(ref m) if m == "bad"));

    let parse = ExperimentConfig::from_toml_str("max_size = \"big\"").unwrap_err();
    let err: SortBenchError = parse.into();
    assert!(matches!(err, SortBenchError::InvalidConfiguration(_)));
}

#[test]
fn test_from_file_picks_format_by_extension() {
    let mut yaml = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    writeln!(yaml, "max_size: 77").unwrap();
    let config = ExperimentConfig::from_file(yaml.path()).unwrap();
    assert_eq!(config.max_size, 77);

    let mut toml = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(toml, "max_size = 88").unwrap();
    let config = ExperimentConfig::from_file(toml.path()).unwrap();
    assert_eq!(config.max_size, 88);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = ExperimentConfig::load("/nonexistent/sortbench.toml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}
