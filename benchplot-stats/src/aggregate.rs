//! Grouped Aggregation
//!
//! Groups measurement rows by `(file, method)` and summarizes each group:
//! - Time: mean, sample standard deviation, range and row count of `millis`
//! - Counts: mean and sample standard deviation of `count`
//!
//! Files are sorted lexicographically; methods follow [`order_methods`].
//! Series accessors return one value per file so that a `(file, method)`
//! pair without rows shows up as a zero bar instead of shifting the axis.

use crate::measurement::MeasurementTable;
use crate::methods::order_methods;
use crate::summary::compute_summary;
use std::collections::{BTreeMap, BTreeSet};

/// Key of one aggregate record
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupKey {
    /// Input file
    pub file: String,
    /// Method label
    pub method: String,
}

impl GroupKey {
    /// Build a key
    pub fn new(file: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            method: method.into(),
        }
    }
}

/// Elapsed-time statistics for one `(file, method)` group
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TimeStats {
    /// Mean of `millis`
    pub mean: f64,
    /// Sample standard deviation of `millis` (0.0 for a single run)
    pub std_dev: f64,
    /// Fastest run
    pub min: f64,
    /// Slowest run
    pub max: f64,
    /// Number of rows in the group
    pub count: usize,
}

/// Event-count statistics for one `(file, method)` group
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CountStats {
    /// Mean of `count`
    pub mean: f64,
    /// Sample standard deviation of `count` (0.0 for a single run)
    pub std_dev: f64,
}

/// Per-group statistics plus the category axes shared by all charts
#[derive(Debug, Clone, Default)]
pub struct Aggregates {
    files: Vec<String>,
    methods: Vec<String>,
    time: BTreeMap<GroupKey, TimeStats>,
    counts: BTreeMap<GroupKey, CountStats>,
}

/// Group `table` by `(file, method)` and compute time and count statistics.
///
/// `method_order` lists the canonical method labels; see [`order_methods`].
/// Rows with an empty method label are ignored.
pub fn aggregate<S: AsRef<str>>(table: &MeasurementTable, method_order: &[S]) -> Aggregates {
    let mut groups: BTreeMap<GroupKey, (Vec<f64>, Vec<f64>)> = BTreeMap::new();
    let mut files = BTreeSet::new();

    for row in table.rows().iter().filter(|r| !r.method.is_empty()) {
        files.insert(row.file.as_str());
        let (millis, counts) = groups
            .entry(GroupKey::new(row.file.as_str(), row.method.as_str()))
            .or_default();
        millis.push(row.millis);
        counts.push(row.count as f64);
    }

    let methods = order_methods(table.rows().iter().map(|r| r.method.as_str()), method_order);
    let files: Vec<String> = files.into_iter().map(str::to_string).collect();

    let mut time = BTreeMap::new();
    let mut counts = BTreeMap::new();
    for (key, (millis, event_counts)) in groups {
        let time_summary = compute_summary(&millis);
        let count_summary = compute_summary(&event_counts);
        time.insert(
            key.clone(),
            TimeStats {
                mean: time_summary.mean,
                std_dev: time_summary.std_dev,
                min: time_summary.min,
                max: time_summary.max,
                count: time_summary.sample_count,
            },
        );
        counts.insert(
            key,
            CountStats {
                mean: count_summary.mean,
                std_dev: count_summary.std_dev,
            },
        );
    }

    tracing::debug!(
        files = files.len(),
        methods = methods.len(),
        groups = time.len(),
        "aggregated measurements"
    );

    Aggregates {
        files,
        methods,
        time,
        counts,
    }
}

impl Aggregates {
    /// File categories, sorted
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Method labels in display order
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Whether at least one row used `method`
    pub fn has_method(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }

    /// Time statistics for every group present in the data
    pub fn time_stats(&self) -> &BTreeMap<GroupKey, TimeStats> {
        &self.time
    }

    /// Count statistics for every group present in the data
    pub fn count_stats(&self) -> &BTreeMap<GroupKey, CountStats> {
        &self.counts
    }

    /// Time statistics for one group, if it has rows
    pub fn time(&self, file: &str, method: &str) -> Option<&TimeStats> {
        self.time.get(&GroupKey::new(file, method))
    }

    /// Count statistics for one group, if it has rows
    pub fn counts(&self, file: &str, method: &str) -> Option<&CountStats> {
        self.counts.get(&GroupKey::new(file, method))
    }

    /// Mean time per file for `method`; 0.0 where the group is absent
    pub fn mean_series(&self, method: &str) -> Vec<f64> {
        self.series(method, |f, m| self.time(f, m).map(|s| s.mean))
    }

    /// Time standard deviation per file for `method`; 0.0 where absent
    pub fn std_dev_series(&self, method: &str) -> Vec<f64> {
        self.series(method, |f, m| self.time(f, m).map(|s| s.std_dev))
    }

    /// Mean count per file for `method`; 0.0 where absent
    pub fn count_series(&self, method: &str) -> Vec<f64> {
        self.series(method, |f, m| self.counts(f, m).map(|s| s.mean))
    }

    fn series<F>(&self, method: &str, value: F) -> Vec<f64>
    where
        F: Fn(&str, &str) -> Option<f64>,
    {
        self.files
            .iter()
            .map(|file| value(file, method).unwrap_or(0.0))
            .collect()
    }
}
