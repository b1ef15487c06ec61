//! Run a sorting experiment from the command line.
//!
//! Usage:
//!   sortbench                              Defaults, or ./sortbench.toml if present
//!   sortbench --max-size 1000 --step 50    Override the sweep
//!   sortbench --algorithms heap_sort,merge_sort --seed 7
//!   sortbench --config experiment.yaml --no-charts --print
//!
//! Set `RUST_LOG=sortbench=trace` to see every individual sort.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use sortbench::{
    run_session, ExperimentConfig, MarkdownReport, Result, SortAlgorithm, SortBenchError,
    CONFIG_FILE,
};

fn parse_algorithm(s: &str) -> std::result::Result<SortAlgorithm, String> {
    SortAlgorithm::from_name(s).ok_or_else(|| {
        let known: Vec<&str> = SortAlgorithm::ALL.iter().map(|a| a.name()).collect();
        format!("unknown algorithm '{}', expected one of {}", s, known.join(", "))
    })
}

#[derive(Parser, Debug)]
#[command(name = "sortbench", version)]
#[command(about = "Count comparisons and swaps of classic sorting algorithms")]
struct Args {
    /// Experiment configuration (TOML, or YAML by extension)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Largest input size, inclusive
    #[arg(short, long, allow_negative_numbers = true)]
    max_size: Option<i64>,

    /// Increment between swept sizes
    #[arg(short, long, allow_negative_numbers = true)]
    step: Option<i64>,

    /// Comma-separated algorithms, in column order
    #[arg(short, long, value_delimiter = ',', value_parser = parse_algorithm)]
    algorithms: Vec<SortAlgorithm>,

    /// Random seed for reproducible random inputs
    #[arg(long)]
    seed: Option<u64>,

    /// Evaluate sizes in parallel
    #[arg(long)]
    parallel: bool,

    /// Directory the results folder is created in
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Skip chart rendering
    #[arg(long)]
    no_charts: bool,

    /// Skip CSV, Markdown and JSON files
    #[arg(long)]
    no_export: bool,

    /// Print the result table as Markdown
    #[arg(long)]
    print: bool,
}

fn load_config(path: Option<&Path>) -> Result<ExperimentConfig> {
    match path {
        Some(path) => Ok(ExperimentConfig::from_file(path)?),
        None if Path::new(CONFIG_FILE).is_file() => Ok(ExperimentConfig::load(CONFIG_FILE)?),
        None => Ok(ExperimentConfig::default()),
    }
}

// Command-line flags win over file values.
fn apply_overrides(mut config: ExperimentConfig, args: &Args) -> ExperimentConfig {
    if let Some(max_size) = args.max_size {
        config.max_size = max_size;
    }
    if let Some(step) = args.step {
        config.step = step;
    }
    if !args.algorithms.is_empty() {
        config.algorithms = args.algorithms.clone();
    }
    if let Some(seed) = args.seed {
        config.random_seed = Some(seed);
    }
    if args.parallel {
        config.parallel = true;
    }
    if let Some(dir) = &args.output_dir {
        config.output.base_dir = dir.clone();
    }
    if args.no_charts {
        config.output.charts = false;
    }
    if args.no_export {
        config.output.csv = false;
        config.output.markdown = false;
        config.output.json = false;
    }
    config
}

fn run(args: &Args) -> Result<()> {
    let config = apply_overrides(load_config(args.config.as_deref())?, args);
    let session = run_session(config)?;

    if args.print {
        print!("{}", MarkdownReport::to_string(session.table()?));
    }

    let output = &session.config().output;
    if output.csv || output.markdown || output.json || output.charts {
        println!(
            "Results written to {}",
            session.results_dir().display().to_string().bright_white().bold()
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    sortbench::console::init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let label = match err {
                SortBenchError::InvalidConfiguration(_) => "invalid configuration",
                SortBenchError::PreconditionViolation(_) => "internal error",
                _ => "error",
            };
            eprintln!("{}: {}", label.bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("sortbench").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_flags_override_config() {
        let args = parse(&[
            "--max-size",
            "300",
            "--step",
            "30",
            "--algorithms",
            "merge_sort,bubble_sort_short",
            "--seed",
            "9",
            "--parallel",
            "--no-charts",
            "--no-export",
        ]);
        let config = apply_overrides(ExperimentConfig::default(), &args);

        assert_eq!(config.max_size, 300);
        assert_eq!(config.step, 30);
        assert_eq!(
            config.algorithms,
            vec![SortAlgorithm::MergeSort, SortAlgorithm::BubbleSortShort]
        );
        assert_eq!(config.random_seed, Some(9));
        assert!(config.parallel);
        assert!(!config.output.charts);
        assert!(!config.output.csv);
    }

    #[test]
    fn test_no_flags_keep_config() {
        let file = ExperimentConfig::new()
            .with_max_size(40)
            .with_algorithms([SortAlgorithm::HeapSort]);
        let config = apply_overrides(file.clone(), &parse(&[]));
        assert_eq!(config, file);
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let err = Args::try_parse_from(["sortbench", "--algorithms", "quick_sort"]).unwrap_err();
        assert!(err.to_string().contains("quick_sort"));
    }

    #[test]
    fn test_negative_max_size_reaches_validation() {
        let args = parse(&["--max-size", "-5", "--no-charts", "--no-export"]);
        let config = apply_overrides(ExperimentConfig::default(), &args);
        let err = run_session(config).unwrap_err();
        assert!(matches!(err, SortBenchError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "max_size = 60\nstep = 20").unwrap();
        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.max_size, 60);
        assert_eq!(config.step, 20);

        let err = load_config(Some(Path::new("/nonexistent/sortbench.toml"))).unwrap_err();
        assert!(matches!(err, SortBenchError::Io(_)));
    }
}
