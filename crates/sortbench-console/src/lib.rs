//! Colorful console output for experiment progress.
//!
//! Provides a custom `tracing` layer that formats experiment events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Lifecycle events (experiment start/end, each swept size, files written)
//! - **TRACE**: Individual sorts and heap phases

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static RUN_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directive used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "sortbench=info";

/// Initializes the experiment console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the SortBench banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ExperimentConsoleLayer)
            .try_init();
    });
}

// Marks the start of an experiment for elapsed time tracking.
fn mark_run_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    RUN_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = RUN_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 ____             _   ____                  _
/ ___|  ___  _ __| |_| __ )  ___ _ __   ___| |__
\___ \ / _ \| '__| __|  _ \ / _ \ '_ \ / __| '_ \
 ___) | (_) | |  | |_| |_) |  __/ | | | (__| | | |
|____/ \___/|_|   \__|____/ \___|_| |_|\___|_| |_|
"#;

    let version_line = format!(
        "             v{} - Counting Sort Benchmark\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats experiment events with colors.
pub struct ExperimentConsoleLayer;

impl<S: Subscriber> Layer<S> for ExperimentConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        // Accept events from sortbench crates only
        if !metadata.target().starts_with("sortbench") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    algorithm: Option<String>,
    distribution: Option<String>,
    format: Option<String>,
    path: Option<String>,
    max_size: Option<u64>,
    step: Option<u64>,
    size: Option<u64>,
    len: Option<u64>,
    algorithm_count: Option<u64>,
    size_count: Option<u64>,
    series: Option<u64>,
    rows: Option<u64>,
    files: Option<u64>,
    comparisons: Option<u64>,
    swaps: Option<u64>,
    duration_ms: Option<u64>,
    parallel: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "path" => self.path = Some(s.trim_matches('"').to_string()),
            "algorithm" => self.algorithm = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "max_size" => self.max_size = Some(value),
            "step" => self.step = Some(value),
            "size" => self.size = Some(value),
            "len" => self.len = Some(value),
            "algorithm_count" => self.algorithm_count = Some(value),
            "size_count" => self.size_count = Some(value),
            "series" => self.series = Some(value),
            "rows" => self.rows = Some(value),
            "files" => self.files = Some(value),
            "comparisons" => self.comparisons = Some(value),
            "swaps" => self.swaps = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "parallel" {
            self.parallel = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "algorithm" => self.algorithm = Some(value.to_string()),
            "distribution" => self.distribution = Some(value.to_string()),
            "format" => self.format = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "experiment_start" => format_experiment_start(v),
        "experiment_end" => format_experiment_end(v),
        "size_done" => format_size_done(v),
        "export" => format_export(v),
        "chart" => format_chart(v),
        "results" => format_results(v),
        "cell" => format_cell(v, level),
        "heapify" => format_heapify(v, level),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn format_count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_experiment_start(v: &EventVisitor) -> String {
    mark_run_start();
    let max_size = v.max_size.unwrap_or(0);
    let step = v.step.unwrap_or(0);
    let algorithms = v.algorithm_count.unwrap_or(0);
    let sizes = v.size_count.unwrap_or(0);

    let mut output = format!(
        "{} {} Sweeping │ max {} │ step {} │ {} sizes │ {} algorithms",
        format_elapsed(),
        "▶".bright_green().bold(),
        format_count(max_size).bright_yellow(),
        format_count(step).bright_yellow(),
        format_count(sizes).bright_yellow(),
        format_count(algorithms).bright_yellow(),
    );

    if v.parallel.unwrap_or(false) {
        output.push_str(&format!(" │ {}", "parallel".bright_magenta()));
    }

    output
}

fn format_experiment_end(v: &EventVisitor) -> String {
    let rows = v.rows.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} Sweep complete │ {} rows │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(rows).white(),
        format_duration_ms(duration).yellow(),
    )
}

fn format_size_done(v: &EventVisitor) -> String {
    let size = v.size.unwrap_or(0);
    let max_size = v.max_size.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);

    format!(
        "{} {} n = {} / {} │ {}",
        format_elapsed(),
        "⚡".bright_cyan(),
        format!("{:>8}", format_count(size)).white(),
        format_count(max_size),
        format_duration_ms(duration).yellow(),
    )
}

fn format_export(v: &EventVisitor) -> String {
    let format = v.format.as_deref().unwrap_or("file");
    let path = v.path.as_deref().unwrap_or("?");

    format!(
        "{} {} Wrote {} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        format.white().bold(),
        path.bright_black(),
    )
}

fn format_chart(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let subject = match (&v.algorithm, v.series) {
        (Some(algorithm), _) => algorithm.clone(),
        (None, Some(series)) => format!("{} series", series),
        (None, None) => "chart".to_string(),
    };

    format!(
        "{} {} Plotted {} │ {}",
        format_elapsed(),
        "✓".bright_green(),
        subject.white().bold(),
        path.bright_black(),
    )
}

fn format_results(v: &EventVisitor) -> String {
    let path = v.path.as_deref().unwrap_or("?");
    let files = v.files.unwrap_or(0);

    format!(
        "{} {} Results │ {} files │ {}",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_count(files).white(),
        path.bright_white().bold(),
    )
}

fn format_cell(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} n = {} │ {:<18} │ {:<8} │ {:>12} cmp │ {:>12} swp",
        format_elapsed(),
        "·".bright_black(),
        format!("{:>8}", format_count(v.size.unwrap_or(0))).bright_black(),
        v.algorithm.as_deref().unwrap_or("?"),
        v.distribution.as_deref().unwrap_or("?"),
        format_count(v.comparisons.unwrap_or(0)),
        format_count(v.swaps.unwrap_or(0)),
    )
}

fn format_heapify(v: &EventVisitor, level: Level) -> String {
    if level != Level::TRACE {
        return String::new();
    }

    format!(
        "{} {} heapify len {} │ {} cmp │ {} swp",
        format_elapsed(),
        "·".bright_black(),
        format_count(v.len.unwrap_or(0)),
        format_count(v.comparisons.unwrap_or(0)),
        format_count(v.swaps.unwrap_or(0)),
    )
    .bright_black()
    .to_string()
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_experiment_start_line() {
        let v = EventVisitor {
            max_size: Some(2500),
            step: Some(100),
            algorithm_count: Some(4),
            size_count: Some(26),
            parallel: Some(true),
            ..visitor("experiment_start")
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("Sweeping"));
        assert!(line.contains("2,500"));
        assert!(line.contains("26"));
        assert!(line.contains("parallel"));
    }

    #[test]
    fn test_size_done_line() {
        let v = EventVisitor {
            size: Some(1200),
            max_size: Some(2500),
            duration_ms: Some(42),
            ..visitor("size_done")
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains("1,200"));
        assert!(line.contains("42ms"));
    }

    #[test]
    fn test_export_and_chart_lines() {
        let export = EventVisitor {
            format: Some("csv".to_string()),
            path: Some("out/output.csv".to_string()),
            ..visitor("export")
        };
        assert!(format_event(&export, Level::INFO).contains("out/output.csv"));

        let chart = EventVisitor {
            series: Some(4),
            path: Some("out/worst_case_comparison.svg".to_string()),
            ..visitor("chart")
        };
        assert!(format_event(&chart, Level::INFO).contains("4 series"));
    }

    #[test]
    fn test_cell_only_at_trace() {
        let v = EventVisitor {
            size: Some(10),
            algorithm: Some("bubble_sort".to_string()),
            distribution: Some("Reverse".to_string()),
            comparisons: Some(45),
            swaps: Some(45),
            ..visitor("cell")
        };
        assert!(format_event(&v, Level::DEBUG).is_empty());
        assert!(format_event(&v, Level::TRACE).contains("bubble_sort"));
    }

    #[test]
    fn test_sizes_are_padded_inside_color_codes() {
        let v = EventVisitor {
            size: Some(10),
            max_size: Some(2500),
            duration_ms: Some(1),
            ..visitor("size_done")
        };
        let line = format_event(&v, Level::INFO);
        assert!(line.contains(&format!("{:>8}", "10")), "{line:?}");

        let cell = EventVisitor {
            size: Some(1200),
            algorithm: Some("heap_sort".to_string()),
            distribution: Some("Random".to_string()),
            ..visitor("cell")
        };
        let line = format_event(&cell, Level::TRACE);
        assert!(line.contains(&format!("{:>8}", "1,200")), "{line:?}");
        assert!(line.contains(&format!("{:<18} │", "heap_sort")), "{line:?}");
    }

    #[test]
    fn test_unknown_event_is_silent() {
        assert!(format_event(&visitor("something_else"), Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::INFO).is_empty());
    }
}
