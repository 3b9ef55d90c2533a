//! CSV Output
//!
//! One row per `(file, method)` entry. An absent speedup is an empty cell.
//! The header row is always written, so a run with no groups still yields
//! a valid table.

use crate::report::Report;

/// Column names, in [`ReportEntry`](crate::ReportEntry) field order
pub const CSV_HEADER: [&str; 10] = [
    "file",
    "method",
    "samples",
    "mean_ms",
    "std_dev_ms",
    "min_ms",
    "max_ms",
    "mean_count",
    "std_dev_count",
    "speedup",
];

/// Generate a CSV table of the report entries.
pub fn generate_csv_report(report: &Report) -> Result<String, csv::Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;
    for entry in &report.entries {
        writer.serialize(entry)?;
    }
    let bytes = writer.into_inner().map_err(|e| e.into_error())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
