//! Report Building
//!
//! Flattens a pipeline outcome into a serializable [`Report`]: one entry per
//! `(file, method)` group that has rows, in chart order.

use super::{PipelineConfig, PipelineOutcome};
use benchplot_report::{Report, ReportEntry, ReportMeta, ReportSummary};
use chrono::Utc;

/// Build a complete Report from a pipeline outcome
pub fn build_report(outcome: &PipelineOutcome, config: &PipelineConfig) -> Report {
    let aggregates = &outcome.aggregates;

    let mut entries = Vec::with_capacity(aggregates.time_stats().len());
    for file in aggregates.files() {
        for method in aggregates.methods() {
            let Some(time) = aggregates.time(file, method) else {
                continue;
            };
            let counts = aggregates.counts(file, method).copied().unwrap_or_default();

            entries.push(ReportEntry {
                file: file.clone(),
                method: method.clone(),
                samples: time.count,
                mean_ms: time.mean,
                std_dev_ms: time.std_dev,
                min_ms: time.min,
                max_ms: time.max,
                mean_count: counts.mean,
                std_dev_count: counts.std_dev,
                speedup: outcome.speedup.as_ref().map(|s| s.get(file, method)),
            });
        }
    }

    let summary = ReportSummary {
        total_rows: outcome.total_rows,
        files: aggregates.files().len(),
        methods: aggregates.methods().len(),
        groups: entries.len(),
        charts_written: outcome.written.len(),
        charts_skipped: outcome.skipped.len(),
    };

    Report {
        meta: ReportMeta {
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
            input: outcome.input.display().to_string(),
            output_dir: outcome.output_dir.display().to_string(),
            baseline: config.baseline.clone(),
        },
        entries,
        charts: outcome.written.clone(),
        skipped: outcome.skipped.clone(),
        summary,
    }
}
