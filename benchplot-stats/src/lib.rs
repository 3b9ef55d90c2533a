#![warn(missing_docs)]
//! BenchPlot Statistical Engine
//!
//! Turns a table of benchmark runs into grouped statistics:
//! - CSV loading with column validation
//! - Mean / sample standard deviation per `(file, method)` group
//! - Stable method ordering shared by every chart
//! - Speedup ratios against a baseline method

mod aggregate;
mod measurement;
mod methods;
mod speedup;
mod summary;

pub use aggregate::{Aggregates, CountStats, GroupKey, TimeStats, aggregate};
pub use measurement::{LoadError, Measurement, MeasurementTable, REQUIRED_COLUMNS};
pub use methods::order_methods;
pub use speedup::{SpeedupError, SpeedupTable, compute_speedup, speedup_ratio};
pub use summary::{SummaryStatistics, compute_summary};

/// Reference method for speedup ratios (single-core implementation)
pub const DEFAULT_BASELINE: &str = "SerialCPU";

/// Display order for the well-known method labels
pub const CANONICAL_METHODS: [&str; 3] = ["SerialCPU", "ParallelCPU", "ParallelGPU"];
