//! Summary Statistics
//!
//! Central tendency and spread for one group of observations:
//! - Mean over all samples
//! - Sample standard deviation (n - 1 denominator)
//! - Min and max
//!
//! Groups with fewer than two samples report a standard deviation of zero,
//! so a single run never produces a NaN error bar.

/// Summary statistics for one group of samples
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SummaryStatistics {
    /// Arithmetic mean
    pub mean: f64,
    /// Sample standard deviation (0.0 when fewer than two samples)
    pub std_dev: f64,
    /// Smallest sample
    pub min: f64,
    /// Largest sample
    pub max: f64,
    /// Number of samples
    pub sample_count: usize,
}

/// Compute summary statistics for a slice of samples
pub fn compute_summary(samples: &[f64]) -> SummaryStatistics {
    if samples.is_empty() {
        return SummaryStatistics::default();
    }

    let n = samples.len() as f64;
    let mean = samples.iter().sum::<f64>() / n;

    let std_dev = if samples.len() < 2 {
        0.0
    } else {
        let variance = samples.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
        variance.sqrt()
    };

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    SummaryStatistics {
        mean,
        std_dev,
        min,
        max,
        sample_count: samples.len(),
    }
}
