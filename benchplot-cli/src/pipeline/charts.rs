//! Chart Writing
//!
//! Every figure is written twice: once plain and once with value labels on
//! the bars. Files are written in place; nothing is retried or rolled back.

use anyhow::Context;
use benchplot_report::{ChartKind, ChartRecord, ChartStyle, GroupedBarChart, render_grouped_bars};
use std::path::Path;

/// Render the plain and annotated variants of `chart` into `output_dir`.
pub fn write_chart_pair(
    kind: ChartKind,
    chart: &GroupedBarChart,
    style: &ChartStyle,
    output_dir: &Path,
) -> anyhow::Result<Vec<ChartRecord>> {
    let mut records = Vec::with_capacity(2);

    for annotated in [false, true] {
        let path = output_dir.join(kind.file_name(annotated));
        let annotation = annotated.then(|| kind.annotation());

        tracing::debug!(
            chart = %kind,
            annotated,
            categories = chart.categories.len(),
            series = chart.series.len(),
            "rendering {}",
            path.display()
        );
        render_grouped_bars(chart, annotation, style, &path)
            .with_context(|| format!("Failed to write {} chart", kind))?;
        println!("Chart saved to: {}", path.display());

        records.push(ChartRecord {
            kind,
            path: path.display().to_string(),
            annotated,
        });
    }

    Ok(records)
}
