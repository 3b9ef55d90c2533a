//! Report Pipeline
//!
//! Loads a results table and turns it into chart images.
//!
//! ## Pipeline Overview
//!
//! ```text
//! results.csv
//!       │
//!       ▼
//! ┌─────────────┐
//! │    load     │  MeasurementTable (fatal on bad data)
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │  aggregate  │  (file, method) statistics + speedup
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   charts    │  time / speedup / counts PNGs
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Report + human/JSON/CSV summary
//! └─────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`charts`] - Chart generation and skip rules
//! - [`report`] - Report building
//! - [`formatting`] - Human-readable output formatting

mod charts;
mod formatting;
mod report;

pub use charts::write_chart_pair;
pub use formatting::format_human_output;
pub use report::build_report;

use anyhow::Context;
use benchplot_report::{
    ChartKind, ChartRecord, ChartStyle, SkippedChart, counts_chart, speedup_chart, time_chart,
};
use benchplot_stats::{
    Aggregates, CANONICAL_METHODS, DEFAULT_BASELINE, MeasurementTable, SpeedupTable, aggregate,
    compute_speedup,
};
use std::path::{Path, PathBuf};

/// Printed when the table has no usable method labels
pub const NO_METHODS_MESSAGE: &str = "No methods found in CSV.";

/// Settings for one pipeline run
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Method that speedups are measured against
    pub baseline: String,
    /// Display order for known method labels
    pub method_order: Vec<String>,
    /// Image dimensions
    pub style: ChartStyle,
    /// Where to write images; `None` means next to the input file
    pub output_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            baseline: DEFAULT_BASELINE.to_string(),
            method_order: CANONICAL_METHODS.iter().map(|m| m.to_string()).collect(),
            style: ChartStyle::default(),
            output_dir: None,
        }
    }
}

impl PipelineConfig {
    /// Directory charts for `input` are written to
    pub fn output_dir_for(&self, input: &Path) -> anyhow::Result<PathBuf> {
        if let Some(dir) = &self.output_dir {
            return Ok(dir.clone());
        }
        let absolute = std::path::absolute(input)
            .with_context(|| format!("Failed to resolve {}", input.display()))?;
        match absolute.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Ok(parent.to_path_buf()),
            _ => Ok(std::env::current_dir()?),
        }
    }
}

/// Everything a pipeline run produced
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    /// Input CSV
    pub input: PathBuf,
    /// Directory the charts went to
    pub output_dir: PathBuf,
    /// Number of rows read
    pub total_rows: usize,
    /// Grouped statistics
    pub aggregates: Aggregates,
    /// Speedups, when the baseline method was present
    pub speedup: Option<SpeedupTable>,
    /// Images written, in order
    pub written: Vec<ChartRecord>,
    /// Figures not produced
    pub skipped: Vec<SkippedChart>,
    /// Skip notices printed to stdout, in order
    pub notices: Vec<String>,
}

impl PipelineOutcome {
    /// Paths of all written images
    pub fn written_paths(&self) -> Vec<PathBuf> {
        self.written.iter().map(|c| PathBuf::from(&c.path)).collect()
    }

    /// Whether `kind` was skipped
    pub fn was_skipped(&self, kind: ChartKind) -> bool {
        self.skipped.iter().any(|s| s.kind == kind)
    }
}

/// Load `input`, aggregate it and write every chart that can be drawn.
///
/// Load errors abort the run. Missing methods or a missing baseline skip
/// the affected figures with a printed warning; rendering errors abort.
pub fn generate_charts(input: &Path, config: &PipelineConfig) -> anyhow::Result<PipelineOutcome> {
    let table = MeasurementTable::from_path(input)
        .with_context(|| format!("Failed to load results table {}", input.display()))?;
    tracing::info!(rows = table.len(), "loaded {}", input.display());

    let aggregates = aggregate(&table, &config.method_order);

    let output_dir = config.output_dir_for(input)?;
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create {}", output_dir.display()))?;

    let mut written = Vec::new();
    let mut skips = Skips::default();
    let has_methods = !aggregates.methods().is_empty();

    // Mean time with error bars
    if has_methods {
        written.extend(write_chart_pair(
            ChartKind::Time,
            &time_chart(&aggregates),
            &config.style,
            &output_dir,
        )?);
    } else {
        skips.record(ChartKind::Time, NO_METHODS_MESSAGE, NO_METHODS_MESSAGE.to_string());
    }

    // Speedup vs baseline
    let speedup = match compute_speedup(&aggregates, &config.baseline) {
        Ok(table) => {
            written.extend(write_chart_pair(
                ChartKind::Speedup,
                &speedup_chart(&table),
                &config.style,
                &output_dir,
            )?);
            Some(table)
        }
        Err(e) => {
            let reason = e.to_string();
            skips.record(
                ChartKind::Speedup,
                &reason,
                format!("{}; skipping speedup chart.", reason),
            );
            None
        }
    };

    // Counts sanity check
    if has_methods {
        written.extend(write_chart_pair(
            ChartKind::Counts,
            &counts_chart(&aggregates),
            &config.style,
            &output_dir,
        )?);
    } else {
        skips.record(
            ChartKind::Counts,
            NO_METHODS_MESSAGE,
            "No methods found; skipping counts chart.".to_string(),
        );
    }

    tracing::debug!(
        written = written.len(),
        skipped = skips.skipped.len(),
        "chart generation finished"
    );

    Ok(PipelineOutcome {
        input: input.to_path_buf(),
        output_dir,
        total_rows: table.len(),
        aggregates,
        speedup,
        written,
        skipped: skips.skipped,
        notices: skips.notices,
    })
}

#[derive(Default)]
struct Skips {
    skipped: Vec<SkippedChart>,
    notices: Vec<String>,
}

impl Skips {
    fn record(&mut self, kind: ChartKind, reason: &str, notice: String) {
        println!("{}", notice);
        tracing::debug!(chart = %kind, "{}", reason);
        self.skipped.push(SkippedChart {
            kind,
            reason: reason.to_string(),
        });
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_csv(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("results.csv");
        std::fs::write(&path, format!("file,method,millis,count\n{}", body)).unwrap();
        path
    }

    fn small_config() -> PipelineConfig {
        PipelineConfig {
            style: ChartStyle {
                width: 480,
                height: 320,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_default_output_dir_is_input_parent() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.csv");
        let out = PipelineConfig::default().output_dir_for(&input).unwrap();
        assert_eq!(out, std::path::absolute(dir.path()).unwrap());
    }

    #[test]
    fn test_output_dir_override() {
        let config = PipelineConfig {
            output_dir: Some(PathBuf::from("/tmp/charts")),
            ..Default::default()
        };
        let out = config.output_dir_for(Path::new("results.csv")).unwrap();
        assert_eq!(out, PathBuf::from("/tmp/charts"));
    }

    #[test]
    fn test_all_charts_written() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(
            dir.path(),
            "a.txt,SerialCPU,100,7\n\
             a.txt,SerialCPU,110,7\n\
             a.txt,ParallelCPU,40,7\n\
             a.txt,ParallelGPU,10,7\n\
             b.txt,SerialCPU,50,3\n\
             b.txt,ParallelGPU,5,3\n",
        );

        let outcome = generate_charts(&input, &small_config()).unwrap();

        assert_eq!(outcome.written.len(), 6);
        assert!(outcome.skipped.is_empty());
        assert!(outcome.notices.is_empty());
        for kind in ChartKind::ALL {
            for annotated in [false, true] {
                assert!(dir.path().join(kind.file_name(annotated)).exists());
            }
        }
        assert!(outcome.speedup.is_some());
        assert_eq!(outcome.total_rows, 6);
    }

    #[test]
    fn test_missing_baseline_skips_speedup() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "a.txt,ParallelCPU,40,7\na.txt,ParallelGPU,10,7\n");

        let outcome = generate_charts(&input, &small_config()).unwrap();

        assert!(outcome.was_skipped(ChartKind::Speedup));
        assert!(outcome.speedup.is_none());
        assert!(!dir.path().join("results_speedup.png").exists());
        assert!(!dir.path().join("results_speedup_annotated.png").exists());
        assert!(dir.path().join("results_time.png").exists());
        assert!(dir.path().join("results_counts_annotated.png").exists());
        assert_eq!(outcome.written.len(), 4);
        assert_eq!(
            outcome.notices,
            ["Baseline method 'SerialCPU' not found; skipping speedup chart."]
        );
    }

    #[test]
    fn test_no_methods_skips_time_chart() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "");

        let outcome = generate_charts(&input, &small_config()).unwrap();

        assert!(outcome.written.is_empty());
        assert!(outcome.was_skipped(ChartKind::Time));
        assert!(outcome.was_skipped(ChartKind::Counts));
        assert!(!dir.path().join("results_time.png").exists());
        assert!(!dir.path().join("results_time_annotated.png").exists());
        let reason = &outcome.skipped[0].reason;
        assert_eq!(reason, NO_METHODS_MESSAGE);
        assert_eq!(outcome.notices[0], "No methods found in CSV.");
        assert_eq!(
            outcome.notices.last().map(String::as_str),
            Some("No methods found; skipping counts chart.")
        );
    }

    #[test]
    fn test_blank_method_column_counts_as_no_methods() {
        let dir = tempfile::tempdir().unwrap();
        let input = write_csv(dir.path(), "a.txt,,10,1\nb.txt,,12,1\n");

        let outcome = generate_charts(&input, &small_config()).unwrap();
        assert!(outcome.was_skipped(ChartKind::Time));
        assert!(!dir.path().join("results_time.png").exists());
    }

    #[test]
    fn test_malformed_table_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("results.csv");
        std::fs::write(&input, "file,method,count\na.txt,SerialCPU,3\n").unwrap();

        let err = generate_charts(&input, &small_config()).unwrap_err();
        assert!(format!("{:#}", err).contains("millis"));
        assert!(!dir.path().join("results_time.png").exists());
    }
}
