//! Report Data Structures

use crate::figures::ChartKind;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete run report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub meta: ReportMeta,
    pub entries: Vec<ReportEntry>,
    pub charts: Vec<ChartRecord>,
    pub skipped: Vec<SkippedChart>,
    pub summary: ReportSummary,
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Tool version
    pub version: String,
    /// UTC time the report was built
    pub timestamp: DateTime<Utc>,
    /// Input CSV path
    pub input: String,
    /// Directory the images were written to
    pub output_dir: String,
    /// Baseline method used for speedups
    pub baseline: String,
}

/// Statistics for one `(file, method)` group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub file: String,
    pub method: String,
    pub samples: usize,
    pub mean_ms: f64,
    pub std_dev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub mean_count: f64,
    pub std_dev_count: f64,
    /// Speedup vs baseline; absent when the baseline never ran
    pub speedup: Option<f64>,
}

/// An image written during the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRecord {
    pub kind: ChartKind,
    pub path: String,
    pub annotated: bool,
}

/// A figure that was not produced, and why
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkippedChart {
    pub kind: ChartKind,
    pub reason: String,
}

/// Report summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total_rows: usize,
    pub files: usize,
    pub methods: usize,
    pub groups: usize,
    pub charts_written: usize,
    pub charts_skipped: usize,
}
