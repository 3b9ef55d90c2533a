//! Measurement Table
//!
//! Loads benchmark result rows from CSV. The header must name at least the
//! `file`, `method`, `millis` and `count` columns; any other column is
//! ignored. Loading is all-or-nothing: the first malformed row aborts.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Columns every results table must provide
pub const REQUIRED_COLUMNS: [&str; 4] = ["file", "method", "millis", "count"];

/// One benchmark run
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Measurement {
    /// Input file the run processed
    pub file: String,
    /// Implementation label (e.g. `SerialCPU`); empty when unknown
    #[serde(default)]
    pub method: String,
    /// Elapsed wall time in milliseconds
    pub millis: f64,
    /// Number of events the run reported
    pub count: u64,
}

impl Measurement {
    /// Build a measurement row
    pub fn new(file: impl Into<String>, method: impl Into<String>, millis: f64, count: u64) -> Self {
        Self {
            file: file.into(),
            method: method.into(),
            millis,
            count,
        }
    }
}

/// Errors raised while loading a results table
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("Failed to open {}: {source}", .path.display())]
    Io {
        /// Path that failed
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The header row lacks a required column
    #[error("Missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A data row could not be parsed
    #[error("Malformed row {row}: {source}")]
    Malformed {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Underlying CSV error
        source: csv::Error,
    },

    /// A `millis` value is negative, NaN or infinite
    #[error("Row {row}: millis must be a non-negative finite number, got {value}")]
    InvalidMillis {
        /// 1-based data row number (header excluded)
        row: usize,
        /// Offending value
        value: f64,
    },

    /// The header row itself could not be read
    #[error("Failed to read CSV header: {0}")]
    Header(#[from] csv::Error),
}

/// Immutable set of measurement rows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementTable {
    rows: Vec<Measurement>,
}

impl MeasurementTable {
    /// Wrap already-parsed rows
    pub fn from_rows(rows: Vec<Measurement>) -> Self {
        Self { rows }
    }

    /// Load a table from a CSV file on disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_reader(file)?;
        tracing::debug!(rows = table.len(), path = %path.display(), "loaded measurements");
        Ok(table)
    }

    /// Load a table from any CSV byte stream
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(LoadError::MissingColumn(column));
            }
        }

        let mut rows = Vec::new();
        for (index, record) in csv_reader.deserialize::<Measurement>().enumerate() {
            let row = index + 1;
            let measurement = record.map_err(|source| LoadError::Malformed { row, source })?;
            if !measurement.millis.is_finite() || measurement.millis < 0.0 {
                return Err(LoadError::InvalidMillis {
                    row,
                    value: measurement.millis,
                });
            }
            rows.push(measurement);
        }

        Ok(Self { rows })
    }

    /// All rows in file order
    pub fn rows(&self) -> &[Measurement] {
        &self.rows
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
