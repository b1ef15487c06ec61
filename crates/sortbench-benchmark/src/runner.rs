//! Experiment runner.
//!
//! Logging levels:
//! - **INFO**: Experiment start/end, one line per completed size
//! - **TRACE**: Every (algorithm, distribution) cell

use std::collections::HashSet;
use std::time::Instant;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use sortbench_config::ExperimentConfig;
use sortbench_core::{AlgorithmDescriptor, Distribution, InputSet, Result, SortBenchError};
use tracing::{info, trace};

use crate::result::{ResultRow, ResultTable};

/// Runs every algorithm on every distribution for each size in
/// `0, step, 2*step, ..` up to `max_size`.
///
/// Random inputs come from OS entropy; use [`Experiment::with_seed`] for a
/// reproducible sweep.
///
/// # Errors
///
/// Returns [`SortBenchError::InvalidConfiguration`] if `max_size` or `step` is
/// not positive, or if the algorithm list is empty or repeats a name.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::run_experiment;
/// use sortbench_core::SortAlgorithm;
///
/// let table = run_experiment(10, 5, &SortAlgorithm::default_descriptors()).unwrap();
/// assert_eq!(table.sizes(), vec![0, 5, 10]);
/// assert_eq!(table.column_names().len(), 25);
/// ```
pub fn run_experiment(
    max_size: i64,
    step: i64,
    algorithms: &[AlgorithmDescriptor],
) -> Result<ResultTable> {
    Ok(Experiment::new(max_size, step, algorithms.to_vec())?.run())
}

/// Sizes swept for `(max_size, step)`: `0, step, 2*step, ..` while `<= max_size`.
///
/// # Panics
///
/// Panics if `step` is zero.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::sweep_sizes;
///
/// assert_eq!(sweep_sizes(25, 10), vec![0, 10, 20]);
/// assert_eq!(sweep_sizes(20, 10), vec![0, 10, 20]);
/// ```
pub fn sweep_sizes(max_size: usize, step: usize) -> Vec<usize> {
    (0..=max_size).step_by(step).collect()
}

/// A configured size sweep over a list of algorithms.
///
/// Inputs for a size are generated once and shared by every algorithm; each
/// sort call gets its own copy.
#[derive(Debug, Clone)]
pub struct Experiment {
    max_size: usize,
    step: usize,
    algorithms: Vec<AlgorithmDescriptor>,
    seed: Option<u64>,
    parallel: bool,
}

impl Experiment {
    /// Creates a sequential, unseeded experiment.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::InvalidConfiguration`] for a non-positive
    /// `max_size` or `step`, an empty algorithm list, or duplicate names.
    pub fn new(max_size: i64, step: i64, algorithms: Vec<AlgorithmDescriptor>) -> Result<Self> {
        if max_size <= 0 {
            return Err(SortBenchError::invalid(format!(
                "max_size must be at least 1, got {max_size}"
            )));
        }
        if step <= 0 {
            return Err(SortBenchError::invalid(format!(
                "step must be at least 1, got {step}"
            )));
        }
        if algorithms.is_empty() {
            return Err(SortBenchError::invalid("no algorithms to run"));
        }
        let mut names = HashSet::new();
        for algorithm in &algorithms {
            if !names.insert(algorithm.name()) {
                return Err(SortBenchError::invalid(format!(
                    "algorithm name {} used more than once",
                    algorithm.name()
                )));
            }
        }

        Ok(Self {
            max_size: max_size as usize,
            step: step as usize,
            algorithms,
            seed: None,
            parallel: false,
        })
    }

    /// Creates an experiment from a loaded configuration.
    pub fn from_config(config: &ExperimentConfig) -> Result<Self> {
        config.validate()?;
        let algorithms = config.algorithms.iter().map(|a| a.descriptor()).collect();
        let mut experiment =
            Self::new(config.max_size, config.step, algorithms)?.with_parallel(config.parallel);
        experiment.seed = config.random_seed;
        Ok(experiment)
    }

    /// Seeds the random input generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Evaluates sizes on the rayon thread pool.
    ///
    /// All inputs are still drawn sequentially from the generator first, so a
    /// seeded parallel run yields the same table as a sequential one.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Algorithms in column order.
    pub fn algorithms(&self) -> &[AlgorithmDescriptor] {
        &self.algorithms
    }

    /// Sizes this experiment will sweep.
    pub fn sizes(&self) -> Vec<usize> {
        sweep_sizes(self.max_size, self.step)
    }

    /// Runs the sweep with a generator seeded per configuration.
    pub fn run(&self) -> ResultTable {
        let mut rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        self.run_with_rng(&mut rng)
    }

    /// Runs the sweep drawing random inputs from `rng`.
    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> ResultTable {
        let start = Instant::now();
        let sizes = self.sizes();
        let names = self.algorithms.iter().map(|a| a.name().to_string()).collect();
        let mut table = ResultTable::new(names);

        info!(
            event = "experiment_start",
            max_size = self.max_size as u64,
            step = self.step as u64,
            algorithm_count = self.algorithms.len() as u64,
            size_count = sizes.len() as u64,
            parallel = self.parallel,
        );

        if self.parallel {
            let inputs: Vec<InputSet> = sizes
                .iter()
                .map(|&size| InputSet::generate(size, &mut *rng))
                .collect();
            let rows: Vec<ResultRow> = inputs
                .par_iter()
                .map(|inputs| self.run_size(inputs))
                .collect();
            for row in rows {
                table.push_row(row);
            }
        } else {
            for &size in &sizes {
                let inputs = InputSet::generate(size, &mut *rng);
                table.push_row(self.run_size(&inputs));
            }
        }

        info!(
            event = "experiment_end",
            rows = table.len() as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        table
    }

    // One row: every algorithm on a private copy of every input.
    fn run_size(&self, inputs: &InputSet) -> ResultRow {
        let start = Instant::now();
        let mut counts = Vec::with_capacity(self.algorithms.len() * Distribution::ALL.len());

        for algorithm in &self.algorithms {
            for distribution in Distribution::ALL {
                let mut sequence = inputs.fresh_copy(distribution);
                let count = algorithm.sort_in_place(&mut sequence);
                trace!(
                    event = "cell",
                    size = inputs.size() as u64,
                    algorithm = algorithm.name(),
                    distribution = distribution.name(),
                    comparisons = count.comparisons,
                    swaps = count.swaps,
                );
                counts.push(count);
            }
        }

        info!(
            event = "size_done",
            size = inputs.size() as u64,
            max_size = self.max_size as u64,
            duration_ms = start.elapsed().as_millis() as u64,
        );
        ResultRow {
            size: inputs.size(),
            counts,
        }
    }
}
