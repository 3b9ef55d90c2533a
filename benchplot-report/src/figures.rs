//! The three report figures: mean time, speedup and counts.

use crate::chart::{Annotation, BarSeries, GroupedBarChart};
use benchplot_stats::{Aggregates, SpeedupTable};
use serde::{Deserialize, Serialize};

/// Which figure a chart file holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Mean elapsed time with standard-deviation error bars
    Time,
    /// Baseline mean divided by method mean
    Speedup,
    /// Mean event count
    Counts,
}

impl ChartKind {
    /// All figures in generation order
    pub const ALL: [ChartKind; 3] = [ChartKind::Time, ChartKind::Speedup, ChartKind::Counts];

    /// Output file name, e.g. `results_time.png` or `results_time_annotated.png`
    pub fn file_name(self, annotated: bool) -> String {
        let suffix = if annotated { "_annotated" } else { "" };
        format!("results_{}{}.png", self.as_str(), suffix)
    }

    /// Precision used for on-bar labels
    pub fn annotation(self) -> Annotation {
        match self {
            ChartKind::Time | ChartKind::Counts => Annotation { precision: 1 },
            ChartKind::Speedup => Annotation { precision: 2 },
        }
    }

    /// Short lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            ChartKind::Time => "time",
            ChartKind::Speedup => "speedup",
            ChartKind::Counts => "counts",
        }
    }
}

impl std::fmt::Display for ChartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Mean time per method and file, with standard deviation error bars
pub fn time_chart(aggregates: &Aggregates) -> GroupedBarChart {
    GroupedBarChart {
        title: "Mean time per method and file (with std dev)".to_string(),
        y_label: "Mean time (ms)".to_string(),
        categories: aggregates.files().to_vec(),
        series: aggregates
            .methods()
            .iter()
            .map(|method| BarSeries {
                label: method.clone(),
                values: aggregates.mean_series(method),
                errors: Some(aggregates.std_dev_series(method)),
            })
            .collect(),
    }
}

/// Speedup of every method relative to the baseline
pub fn speedup_chart(speedup: &SpeedupTable) -> GroupedBarChart {
    GroupedBarChart {
        title: format!(
            "Speedup relative to {} (higher is better)",
            speedup.baseline()
        ),
        y_label: format!("Speedup ({} / method)", speedup.baseline()),
        categories: speedup.files().to_vec(),
        series: speedup
            .methods()
            .iter()
            .map(|method| BarSeries {
                label: method.clone(),
                values: speedup.series(method),
                errors: None,
            })
            .collect(),
    }
}

/// Mean event count per method and file
pub fn counts_chart(aggregates: &Aggregates) -> GroupedBarChart {
    GroupedBarChart {
        title: "Mean count per method and file".to_string(),
        y_label: "Mean count".to_string(),
        categories: aggregates.files().to_vec(),
        series: aggregates
            .methods()
            .iter()
            .map(|method| BarSeries {
                label: method.clone(),
                values: aggregates.count_series(method),
                errors: None,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchplot_stats::{
        CANONICAL_METHODS, Measurement, MeasurementTable, aggregate, compute_speedup,
    };

    fn sample() -> Aggregates {
        let table = MeasurementTable::from_rows(vec![
            Measurement::new("b.txt", "ParallelGPU", 5.0, 10),
            Measurement::new("a.txt", "SerialCPU", 100.0, 12),
            Measurement::new("a.txt", "SerialCPU", 120.0, 12),
            Measurement::new("b.txt", "SerialCPU", 50.0, 10),
        ]);
        aggregate(&table, &CANONICAL_METHODS)
    }

    #[test]
    fn test_file_names() {
        assert_eq!(ChartKind::Time.file_name(false), "results_time.png");
        assert_eq!(ChartKind::Time.file_name(true), "results_time_annotated.png");
        assert_eq!(ChartKind::Speedup.file_name(false), "results_speedup.png");
        assert_eq!(ChartKind::Speedup.file_name(true), "results_speedup_annotated.png");
        assert_eq!(ChartKind::Counts.file_name(false), "results_counts.png");
        assert_eq!(ChartKind::Counts.file_name(true), "results_counts_annotated.png");
    }

    #[test]
    fn test_annotation_precision() {
        assert_eq!(ChartKind::Time.annotation().precision, 1);
        assert_eq!(ChartKind::Speedup.annotation().precision, 2);
        assert_eq!(ChartKind::Counts.annotation().precision, 1);
    }

    #[test]
    fn test_time_chart_series() {
        let chart = time_chart(&sample());

        assert_eq!(chart.categories, vec!["a.txt", "b.txt"]);
        let labels: Vec<_> = chart.series.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, vec!["SerialCPU", "ParallelGPU"]);

        assert_eq!(chart.series[0].values, vec![110.0, 50.0]);
        // ParallelGPU has no rows for a.txt
        assert_eq!(chart.series[1].values, vec![0.0, 5.0]);
        assert_eq!(chart.series[1].errors, Some(vec![0.0, 0.0]));
        assert!(chart.series[0].errors.as_ref().unwrap()[0] > 0.0);
    }

    #[test]
    fn test_speedup_chart_series() {
        let speedup = compute_speedup(&sample(), "SerialCPU").unwrap();
        let chart = speedup_chart(&speedup);

        assert!(chart.y_label.contains("SerialCPU"));
        assert_eq!(chart.series[0].values, vec![1.0, 1.0]);
        assert_eq!(chart.series[1].values, vec![0.0, 10.0]);
        assert!(chart.series.iter().all(|s| s.errors.is_none()));
    }

    #[test]
    fn test_counts_chart_series() {
        let chart = counts_chart(&sample());
        assert_eq!(chart.series[0].values, vec![12.0, 10.0]);
        assert_eq!(chart.series[1].values, vec![0.0, 10.0]);
    }

    #[test]
    fn test_method_order_shared_across_charts() {
        let agg = sample();
        let speedup = compute_speedup(&agg, "SerialCPU").unwrap();
        let labels = |c: &GroupedBarChart| -> Vec<String> {
            c.series.iter().map(|s| s.label.clone()).collect()
        };

        assert_eq!(labels(&time_chart(&agg)), labels(&speedup_chart(&speedup)));
        assert_eq!(labels(&time_chart(&agg)), labels(&counts_chart(&agg)));
    }
}
