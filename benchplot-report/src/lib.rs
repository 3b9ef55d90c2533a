#![warn(missing_docs)]
//! BenchPlot Report - Charts and Summaries
//!
//! Generates:
//! - PNG grouped bar charts (time, speedup, counts), plain and annotated
//! - JSON (machine-readable run summary)
//! - CSV (spreadsheet-compatible per-group statistics)

mod chart;
mod csv;
mod figures;
mod json;
mod report;

pub use self::csv::{CSV_HEADER, generate_csv_report};
pub use chart::{
    Annotation, BarSeries, ChartError, ChartStyle, GroupedBarChart, render_grouped_bars,
    series_color,
};
pub use figures::{ChartKind, counts_chart, speedup_chart, time_chart};
pub use json::generate_json_report;
pub use report::{ChartRecord, Report, ReportEntry, ReportMeta, ReportSummary, SkippedChart};

/// Summary output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable terminal table
    Human,
    /// JSON with full report
    Json,
    /// CSV for spreadsheets
    Csv,
    /// No summary, charts only
    None,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            "none" | "off" => Ok(OutputFormat::None),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_report() -> Report {
        Report {
            meta: ReportMeta {
                version: "0.1.0".to_string(),
                timestamp: Utc::now(),
                input: "results/results.csv".to_string(),
                output_dir: "results".to_string(),
                baseline: "SerialCPU".to_string(),
            },
            entries: vec![
                ReportEntry {
                    file: "a.txt".to_string(),
                    method: "SerialCPU".to_string(),
                    samples: 2,
                    mean_ms: 20.0,
                    std_dev_ms: 14.142,
                    min_ms: 10.0,
                    max_ms: 30.0,
                    mean_count: 3.0,
                    std_dev_count: 0.0,
                    speedup: Some(1.0),
                },
                ReportEntry {
                    file: "a.txt".to_string(),
                    method: "ParallelGPU".to_string(),
                    samples: 1,
                    mean_ms: 5.0,
                    std_dev_ms: 0.0,
                    min_ms: 5.0,
                    max_ms: 5.0,
                    mean_count: 3.0,
                    std_dev_count: 0.0,
                    speedup: None,
                },
            ],
            charts: vec![ChartRecord {
                kind: ChartKind::Time,
                path: "results/results_time.png".to_string(),
                annotated: false,
            }],
            skipped: vec![SkippedChart {
                kind: ChartKind::Speedup,
                reason: "baseline not found".to_string(),
            }],
            summary: ReportSummary {
                total_rows: 3,
                files: 1,
                methods: 2,
                groups: 2,
                charts_written: 1,
                charts_skipped: 1,
            },
        }
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("none".parse::<OutputFormat>().unwrap(), OutputFormat::None);
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_json_report_round_trips_kind() {
        let json = generate_json_report(&sample_report()).unwrap();
        assert!(json.contains("\"kind\": \"time\""));
        assert!(json.contains("\"kind\": \"speedup\""));

        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.entries, sample_report().entries);
        assert_eq!(parsed.summary.charts_skipped, 1);
    }

    #[test]
    fn test_csv_report() {
        let csv = generate_csv_report(&sample_report()).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "file,method,samples,mean_ms,std_dev_ms,min_ms,max_ms,mean_count,std_dev_count,speedup"
        );
        assert_eq!(lines[1], "a.txt,SerialCPU,2,20.0,14.142,10.0,30.0,3.0,0.0,1.0");
        assert_eq!(lines[2], "a.txt,ParallelGPU,1,5.0,0.0,5.0,5.0,3.0,0.0,");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_csv_report_without_entries_keeps_header() {
        let mut report = sample_report();
        report.entries.clear();

        let csv = generate_csv_report(&report).unwrap();

        assert_eq!(csv, format!("{}\n", CSV_HEADER.join(",")));
    }
}
