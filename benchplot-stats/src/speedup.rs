//! Speedup relative to a baseline method
//!
//! speedup(file, method) = baseline_mean(file) / method_mean(file, method)
//!
//! Values above 1.0 mean the method is faster than the baseline. Any ratio
//! that cannot be formed (baseline or method missing for the file, zero
//! method mean, non-finite result) is reported as 0.0 so charts never see
//! NaN or infinity.

use crate::aggregate::{Aggregates, GroupKey};
use std::collections::BTreeMap;
use thiserror::Error;

/// Errors from speedup computation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeedupError {
    /// No row in the table used the baseline method
    #[error("Baseline method '{0}' not found")]
    MissingBaseline(String),
}

/// Ratio of baseline mean to method mean, or 0.0 when undefined
pub fn speedup_ratio(baseline_mean: Option<f64>, method_mean: Option<f64>) -> f64 {
    match (baseline_mean, method_mean) {
        (Some(baseline), Some(method)) => {
            let ratio = baseline / method;
            if ratio.is_finite() { ratio } else { 0.0 }
        }
        _ => 0.0,
    }
}

/// Speedup for every `(file, method)` cell of the chart grid
#[derive(Debug, Clone, PartialEq)]
pub struct SpeedupTable {
    baseline: String,
    files: Vec<String>,
    methods: Vec<String>,
    values: BTreeMap<GroupKey, f64>,
}

/// Compute speedups of every method against `baseline`.
///
/// Fails only when the baseline method is absent from the whole table; a
/// baseline missing for individual files yields zeros for those files.
pub fn compute_speedup(
    aggregates: &Aggregates,
    baseline: &str,
) -> Result<SpeedupTable, SpeedupError> {
    if !aggregates.has_method(baseline) {
        return Err(SpeedupError::MissingBaseline(baseline.to_string()));
    }

    let mut values = BTreeMap::new();
    for file in aggregates.files() {
        let baseline_mean = aggregates.time(file, baseline).map(|s| s.mean);
        for method in aggregates.methods() {
            let method_mean = aggregates.time(file, method).map(|s| s.mean);
            values.insert(
                GroupKey::new(file.as_str(), method.as_str()),
                speedup_ratio(baseline_mean, method_mean),
            );
        }
    }

    Ok(SpeedupTable {
        baseline: baseline.to_string(),
        files: aggregates.files().to_vec(),
        methods: aggregates.methods().to_vec(),
        values,
    })
}

impl SpeedupTable {
    /// Baseline method name
    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    /// File categories, in chart order
    pub fn files(&self) -> &[String] {
        &self.files
    }

    /// Methods, in chart order
    pub fn methods(&self) -> &[String] {
        &self.methods
    }

    /// Speedup of one cell (0.0 for unknown cells)
    pub fn get(&self, file: &str, method: &str) -> f64 {
        self.values
            .get(&GroupKey::new(file, method))
            .copied()
            .unwrap_or(0.0)
    }

    /// Speedup per file for `method`
    pub fn series(&self, method: &str) -> Vec<f64> {
        self.files.iter().map(|f| self.get(f, method)).collect()
    }
}
