//! Output Formatting
//!
//! Human-readable terminal summary:
//! - One block per input file with per-method time, count and speedup
//! - Written chart files and skipped figures

use benchplot_report::{Report, ReportEntry};

/// Format a report for human-readable terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str("BenchPlot Results\n");
    output.push_str(&"=".repeat(60));
    output.push_str("\n\n");
    output.push_str(&format!(
        "Input: {}  Baseline: {}\n\n",
        report.meta.input, report.meta.baseline
    ));

    // Group entries by file, keeping chart order
    let mut files: Vec<(&str, Vec<&ReportEntry>)> = Vec::new();
    for entry in &report.entries {
        match files.iter().position(|(f, _)| *f == entry.file) {
            Some(idx) => files[idx].1.push(entry),
            None => files.push((entry.file.as_str(), vec![entry])),
        }
    }

    for (file, entries) in files {
        output.push_str(&format!("File: {}\n", file));
        output.push_str(&"-".repeat(60));
        output.push('\n');

        let width = entries.iter().map(|e| e.method.len()).max().unwrap_or(10);
        for entry in entries {
            let speedup = entry
                .speedup
                .map(|s| format!("{:.2}x", s))
                .unwrap_or_else(|| "-".to_string());
            output.push_str(&format!(
                "  {:<width$}  mean: {:>10.2} ms  std: {:>9.2} ms  range: [{:.2}, {:.2}] ms  runs: {:>3}  count: {:>8.1}  speedup: {}\n",
                entry.method,
                entry.mean_ms,
                entry.std_dev_ms,
                entry.min_ms,
                entry.max_ms,
                entry.samples,
                entry.mean_count,
                speedup,
                width = width
            ));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Charts: {} written, {} skipped ({})\n",
        report.summary.charts_written, report.summary.charts_skipped, report.meta.output_dir
    ));
    for skipped in &report.skipped {
        output.push_str(&format!("  ⊘ {}: {}\n", skipped.kind, skipped.reason));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_report::{ChartKind, ReportMeta, ReportSummary, SkippedChart};

    fn entry(file: &str, method: &str, mean: f64, speedup: Option<f64>) -> ReportEntry {
        ReportEntry {
            file: file.to_string(),
            method: method.to_string(),
            samples: 3,
            mean_ms: mean,
            std_dev_ms: 1.0,
            min_ms: mean - 1.0,
            max_ms: mean + 1.0,
            mean_count: 42.0,
            std_dev_count: 0.0,
            speedup,
        }
    }

    #[test]
    fn test_human_output() {
        let report = Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: chrono::Utc::now(),
                input: "results.csv".to_string(),
                output_dir: "/data/results".to_string(),
                baseline: "SerialCPU".to_string(),
            },
            entries: vec![
                entry("a.txt", "SerialCPU", 100.0, Some(1.0)),
                entry("a.txt", "ParallelGPU", 25.0, Some(4.0)),
                entry("b.txt", "SerialCPU", 10.0, None),
            ],
            charts: vec![],
            skipped: vec![SkippedChart {
                kind: ChartKind::Speedup,
                reason: "Baseline method 'SerialCPU' not found".to_string(),
            }],
            summary: ReportSummary {
                charts_written: 4,
                charts_skipped: 1,
                ..Default::default()
            },
        };

        let text = format_human_output(&report);

        assert!(text.contains("File: a.txt"));
        assert!(text.contains("File: b.txt"));
        assert!(text.contains("4.00x"));
        assert!(text.contains("Charts: 4 written, 1 skipped (/data/results)"));
        assert!(text.contains("range: [99.00, 101.00] ms"));
        assert!(text.contains("speedup: Baseline method 'SerialCPU' not found"));
        assert!(text.find("File: a.txt").unwrap() < text.find("File: b.txt").unwrap());
    }
}
