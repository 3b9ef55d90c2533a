#![warn(missing_docs)]
//! # BenchPlot
//!
//! Grouped bar-chart reports from benchmark result tables.
//!
//! BenchPlot reads a CSV of timing runs (`file,method,millis,count`) and writes:
//! - **Time**: mean wall time per input file and method, with standard deviation error bars
//! - **Speedup**: baseline mean divided by each method's mean (`SerialCPU` by default)
//! - **Counts**: mean result count per group, a cross-method sanity check
//!
//! Each chart is written plain and with value labels (`results_time.png`,
//! `results_time_annotated.png`, ...), next to the input file unless an
//! output directory is given.
//!
//! ## Quick Start
//!
//! ```ignore
//! use benchplot::{PipelineConfig, generate_charts};
//! use std::path::Path;
//!
//! let outcome = generate_charts(Path::new("results/results.csv"), &PipelineConfig::default())?;
//! for path in outcome.written_paths() {
//!     println!("{}", path.display());
//! }
//! ```
//!
//! ## Library Use
//!
//! ```ignore
//! use benchplot::{CANONICAL_METHODS, MeasurementTable, aggregate, compute_speedup};
//!
//! let table = MeasurementTable::from_path("results.csv")?;
//! let aggregates = aggregate(&table, &CANONICAL_METHODS);
//! let speedup = compute_speedup(&aggregates, "SerialCPU")?;
//! println!("{}", speedup.get("a.txt", "ParallelGPU"));
//! ```

// Re-export stats
pub use benchplot_stats::{
    Aggregates, CANONICAL_METHODS, CountStats, DEFAULT_BASELINE, GroupKey, LoadError, Measurement,
    MeasurementTable, SpeedupError, SpeedupTable, SummaryStatistics, TimeStats, aggregate,
    compute_speedup, compute_summary, order_methods, speedup_ratio,
};

// Re-export charts and reports
pub use benchplot_report::{
    Annotation, BarSeries, ChartError, ChartKind, ChartRecord, ChartStyle, GroupedBarChart,
    OutputFormat, Report, ReportEntry, ReportSummary, SkippedChart, counts_chart,
    render_grouped_bars, speedup_chart, time_chart,
};

// Re-export pipeline
pub use benchplot_cli::{
    Cli, PipelineConfig, PipelineOutcome, PlotConfig, build_report, generate_charts,
};

/// Run the BenchPlot CLI.
///
/// ```ignore
/// fn main() -> anyhow::Result<()> {
///     benchplot::run()
/// }
/// ```
pub use benchplot_cli::run;
