//! Grouped Bar Chart Rendering
//!
//! Draws one slot per category with one bar per series side by side.
//! Layout:
//! - Each category slot is 0.8 wide; every bar is `0.8 / n_series` wide
//! - Series `i` always gets palette colour `i`, so a method keeps its colour
//!   across charts as long as callers pass series in the same order
//! - Optional vertical error whiskers with caps and on-bar value annotations
//! - File labels turn vertical once they would overlap their neighbours

use plotters::prelude::*;
use plotters::style::FontTransform;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use thiserror::Error;

// Font sizes
const TITLE_FONT_SIZE: u32 = 28;
const AXIS_LABEL_FONT_SIZE: u32 = 20;
const TICK_LABEL_FONT_SIZE: u32 = 16;
const LEGEND_FONT_SIZE: u32 = 16;
const DATA_LABEL_FONT_SIZE: u32 = 13;

const X_LABEL_AREA_SIZE: u32 = 50;
const Y_LABEL_AREA_SIZE: u32 = 80;
const CHART_MARGIN: u32 = 20;
/// Rough advance width of one tick-label glyph, as a fraction of the font size
const GLYPH_WIDTH_RATIO: f64 = 0.6;

/// Width of one category slot in axis units
const SLOT_WIDTH: f64 = 0.8;
/// Headroom above the tallest bar (or error bar); keeps the legend clear of the data
const Y_HEADROOM: f64 = 1.35;
/// Error bar cap width as a fraction of the bar width
const ERROR_CAP_RATIO: f64 = 0.4;

/// Colour-blind friendly palette, indexed by series position
const PALETTE: &[RGBColor] = &[
    RGBColor(1, 115, 178),
    RGBColor(222, 143, 5),
    RGBColor(2, 158, 115),
    RGBColor(213, 94, 0),
    RGBColor(204, 120, 188),
    RGBColor(202, 145, 97),
    RGBColor(251, 175, 228),
    RGBColor(148, 148, 148),
    RGBColor(236, 225, 51),
    RGBColor(86, 180, 233),
];

/// Colour assigned to the series at `index`
pub fn series_color(index: usize) -> RGBColor {
    PALETTE[index % PALETTE.len()]
}

/// Errors from chart rendering
#[derive(Debug, Error)]
pub enum ChartError {
    /// The chart has nothing to draw
    #[error("Chart '{0}' has no series")]
    NoSeries(String),

    /// A series does not have one value per category
    #[error("Series '{label}' has {got} values, expected {expected}")]
    LengthMismatch {
        /// Series label
        label: String,
        /// Values supplied
        got: usize,
        /// Number of categories
        expected: usize,
    },

    /// The drawing backend failed
    #[error("Failed to render {}: {message}", .path.display())]
    Render {
        /// Output path
        path: PathBuf,
        /// Backend error text
        message: String,
    },
}

/// Output image dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartStyle {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
        }
    }
}

/// One bar series (one method)
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Legend label
    pub label: String,
    /// Bar height per category
    pub values: Vec<f64>,
    /// Symmetric error per category, if error bars are wanted
    pub errors: Option<Vec<f64>>,
}

/// On-bar value labels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Annotation {
    /// Digits after the decimal point
    pub precision: usize,
}

impl Annotation {
    /// Format a bar height for display
    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.precision, value)
    }
}

/// A grouped bar chart ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBarChart {
    /// Caption
    pub title: String,
    /// Y axis description
    pub y_label: String,
    /// X axis categories (input files)
    pub categories: Vec<String>,
    /// One series per method
    pub series: Vec<BarSeries>,
}

impl GroupedBarChart {
    /// Width of a single bar in axis units
    pub fn bar_width(&self) -> f64 {
        SLOT_WIDTH / self.series.len().max(1) as f64
    }

    /// Horizontal offset of series `index` from its category centre
    pub fn bar_offset(&self, index: usize) -> f64 {
        -SLOT_WIDTH / 2.0 + (index as f64 + 0.5) * self.bar_width()
    }

    /// Upper bound of the y axis
    pub fn y_max(&self) -> f64 {
        let tallest = self
            .series
            .iter()
            .flat_map(|s| {
                s.values.iter().enumerate().map(move |(i, v)| {
                    let err = s
                        .errors
                        .as_ref()
                        .and_then(|e| e.get(i))
                        .copied()
                        .unwrap_or(0.0);
                    finite_or_zero(*v) + finite_or_zero(err)
                })
            })
            .fold(0.0_f64, f64::max);

        if tallest > 0.0 { tallest * Y_HEADROOM } else { 1.0 }
    }

    /// Value labels for series `index` as `(x, y, text)`.
    ///
    /// Only finite, non-zero bars are labelled.
    pub fn annotated_points(&self, index: usize, annotation: Annotation) -> Vec<(f64, f64, String)> {
        let Some(series) = self.series.get(index) else {
            return Vec::new();
        };
        let offset = self.bar_offset(index);
        series
            .values
            .iter()
            .enumerate()
            .filter(|(_, value)| value.is_finite() && **value != 0.0)
            .map(|(cat, value)| (cat as f64 + offset, *value, annotation.format(*value)))
            .collect()
    }

    /// Error whiskers for series `index` as `(x, low, high)`, clamped at zero.
    ///
    /// Bars without a positive, finite error get no whisker.
    pub fn error_whiskers(&self, index: usize) -> Vec<(f64, f64, f64)> {
        let Some(series) = self.series.get(index) else {
            return Vec::new();
        };
        let Some(errors) = &series.errors else {
            return Vec::new();
        };
        let offset = self.bar_offset(index);
        series
            .values
            .iter()
            .zip(errors)
            .enumerate()
            .filter(|(_, (_, err))| err.is_finite() && **err > 0.0)
            .map(|(cat, (value, err))| {
                let value = finite_or_zero(*value);
                (cat as f64 + offset, (value - err).max(0.0), value + err)
            })
            .collect()
    }

    /// Whether category labels have to be drawn vertically at `style`,
    /// and the label area height that fits them.
    fn x_label_layout(&self, style: &ChartStyle) -> XLabelLayout {
        let longest = self
            .categories
            .iter()
            .map(|c| c.chars().count())
            .max()
            .unwrap_or(0);
        let label_px = longest as f64 * TICK_LABEL_FONT_SIZE as f64 * GLYPH_WIDTH_RATIO;

        let plot_px = style
            .width
            .saturating_sub(Y_LABEL_AREA_SIZE + 2 * CHART_MARGIN) as f64;
        let slot_px = plot_px / self.categories.len().max(1) as f64;

        if label_px <= slot_px * 0.9 {
            return XLabelLayout {
                rotated: false,
                area_size: X_LABEL_AREA_SIZE,
            };
        }
        let area_size = (label_px as u32 + 20)
            .min(style.height / 3)
            .max(X_LABEL_AREA_SIZE);
        XLabelLayout {
            rotated: true,
            area_size,
        }
    }

    fn validate(&self) -> Result<(), ChartError> {
        if self.series.is_empty() {
            return Err(ChartError::NoSeries(self.title.clone()));
        }
        let expected = self.categories.len();
        for series in &self.series {
            let lengths = std::iter::once(series.values.len())
                .chain(series.errors.as_ref().map(Vec::len));
            for got in lengths {
                if got != expected {
                    return Err(ChartError::LengthMismatch {
                        label: series.label.clone(),
                        got,
                        expected,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct XLabelLayout {
    rotated: bool,
    area_size: u32,
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Render `chart` as a PNG at `path`, with value labels when `annotation` is set.
pub fn render_grouped_bars(
    chart: &GroupedBarChart,
    annotation: Option<Annotation>,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), ChartError> {
    chart.validate()?;
    draw(chart, annotation, style, path).map_err(|e| ChartError::Render {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn draw(
    chart: &GroupedBarChart,
    annotation: Option<Annotation>,
    style: &ChartStyle,
    path: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new(path, (style.width, style.height)).into_drawing_area();
    root.fill(&WHITE)?;

    let categories = &chart.categories;
    let num_categories = categories.len();
    let y_max = chart.y_max();
    let bar_width = chart.bar_width();
    let cap_half = bar_width * ERROR_CAP_RATIO / 2.0;
    let layout = chart.x_label_layout(style);

    let tick_font = ("sans-serif", TICK_LABEL_FONT_SIZE).into_font();
    let x_tick_font = if layout.rotated {
        tick_font.transform(FontTransform::Rotate90)
    } else {
        tick_font.clone()
    };

    let mut ctx = ChartBuilder::on(&root)
        .caption(&chart.title, ("sans-serif", TITLE_FONT_SIZE))
        .margin(CHART_MARGIN)
        .x_label_area_size(layout.area_size)
        .y_label_area_size(Y_LABEL_AREA_SIZE)
        .build_cartesian_2d(-0.5..(num_categories.max(1) as f64 - 0.5), 0.0..y_max)?;

    ctx.configure_mesh()
        .disable_x_mesh()
        .x_labels(num_categories.max(1))
        .x_label_formatter(&|x| {
            let idx = x.round();
            if idx >= 0.0 && (x - idx).abs() < 0.3 {
                categories.get(idx as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .y_desc(chart.y_label.as_str())
        .label_style(tick_font)
        .x_label_style(x_tick_font)
        .axis_desc_style(("sans-serif", AXIS_LABEL_FONT_SIZE))
        .draw()?;

    for (index, series) in chart.series.iter().enumerate() {
        let color = series_color(index);
        let offset = chart.bar_offset(index);

        let bars = series.values.iter().enumerate().map(|(cat, value)| {
            let center = cat as f64 + offset;
            Rectangle::new(
                [
                    (center - bar_width / 2.0, 0.0),
                    (center + bar_width / 2.0, finite_or_zero(*value)),
                ],
                color.filled(),
            )
        });
        ctx.draw_series(bars)?
            .label(series.label.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 20, y + 5)], color.filled()));

        let whiskers = chart.error_whiskers(index);
        if !whiskers.is_empty() {
            let segments = whiskers.into_iter().flat_map(|(x, low, high)| {
                [
                    vec![(x, low), (x, high)],
                    vec![(x - cap_half, low), (x + cap_half, low)],
                    vec![(x - cap_half, high), (x + cap_half, high)],
                ]
                .into_iter()
                .map(|points| PathElement::new(points, BLACK.stroke_width(1)))
            });
            ctx.draw_series(segments)?;
        }

        if let Some(annotation) = annotation {
            let labels = chart
                .annotated_points(index, annotation)
                .into_iter()
                .map(|(x, y, text)| {
                    Text::new(
                        text,
                        (x, y),
                        ("sans-serif", DATA_LABEL_FONT_SIZE)
                            .into_font()
                            .color(&BLACK)
                            .pos(Pos::new(HPos::Center, VPos::Bottom)),
                    )
                });
            ctx.draw_series(labels)?;
        }
    }

    ctx.configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.85))
        .border_style(BLACK)
        .label_font(("sans-serif", LEGEND_FONT_SIZE))
        .draw()?;

    root.present()?;
    Ok(())
}
