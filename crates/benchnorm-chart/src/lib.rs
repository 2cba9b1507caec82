//! benchnorm-chart: draws a [`Report`] as a vector chart.
//!
//! Relative reports become grouped bars (one group per benchmark, the last
//! group under `G-Mean`); scaling reports become one marked line per series.
//! Styling is whatever plotters does by default plus a palette.

use std::path::PathBuf;

use benchnorm_core::{Label, Mode, Report};
use plotters::prelude::*;
use thiserror::Error;

const Y_LABEL: &str = "Normalized Execution Time";
const BAR_X_LABEL: &str = "Benchmarks";
const LINE_X_LABEL: &str = "Number of Low Priority Workload";

/// Fraction of a label slot covered by its bar group.
const GROUP_WIDTH: f64 = 0.8;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("nothing to draw: report has no series or no labels")]
    EmptyReport,
    #[error("drawing failed: {0}")]
    Draw(String),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}

/// Anything that can turn a finished report into an artifact.
pub trait Renderer {
    fn render(&self, report: &Report) -> Result<(), ChartError>;
}

/// Writes an SVG file.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    pub output: PathBuf,
    pub size: (u32, u32),
}

impl SvgRenderer {
    pub fn new(output: impl Into<PathBuf>, size: (u32, u32)) -> Self {
        Self { output: output.into(), size }
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, report: &Report) -> Result<(), ChartError> {
        if report.series.is_empty() || report.labels.is_empty() {
            return Err(ChartError::EmptyReport);
        }

        let root = SVGBackend::new(&self.output, self.size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        match report.mode {
            Mode::Relative => draw_bars(&root, report)?,
            Mode::Scaling => draw_lines(&root, report)?,
        }

        root.present().map_err(draw_err)?;
        tracing::info!(path = %self.output.display(), "chart written");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Grouped bars
// ---------------------------------------------------------------------------

fn draw_bars(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    report: &Report,
) -> Result<(), ChartError> {
    let labels: Vec<String> = report.labels.iter().map(Label::to_string).collect();
    let slots = labels.len();
    let bar_width = GROUP_WIDTH / report.series.len() as f64;

    // one unit per label, centred on integer x
    let x_range = -0.5f64..slots as f64 - 0.5;
    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, 0f64..y_upper(report))
        .map_err(draw_err)?;

    let x_formatter = |x: &f64| label_at(&labels, *x);
    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(slots)
        .x_label_formatter(&x_formatter)
        .x_desc(BAR_X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(draw_err)?;

    for (j, series) in report.series.iter().enumerate() {
        let color = Palette99::pick(j).to_rgba();
        let offset = -GROUP_WIDTH / 2.0 + j as f64 * bar_width;
        let bars = series
            .points()
            .into_iter()
            .enumerate()
            .filter(|(_, y)| y.is_finite())
            .map(move |(i, y)| {
                let x0 = i as f64 + offset;
                Rectangle::new([(x0, 0.0), (x0 + bar_width, y)], color.filled())
            });

        chart
            .draw_series(bars)
            .map_err(draw_err)?
            .label(series.name.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 5), (x + 10, y + 5)], color.filled()));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Lines
// ---------------------------------------------------------------------------

fn draw_lines(
    root: &DrawingArea<SVGBackend<'_>, plotters::coord::Shift>,
    report: &Report,
) -> Result<(), ChartError> {
    let xs: Vec<f64> = report
        .labels
        .iter()
        .enumerate()
        .map(|(i, label)| match label {
            Label::Workload(n) => *n as f64,
            Label::Name(_) => i as f64,
        })
        .collect();
    let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let mut x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if x_max <= x_min {
        x_max = x_min + 1.0;
    }

    let mut chart = ChartBuilder::on(root)
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0f64..y_upper(report))
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc(LINE_X_LABEL)
        .y_desc(Y_LABEL)
        .draw()
        .map_err(draw_err)?;

    for (j, series) in report.series.iter().enumerate() {
        let color = Palette99::pick(j).to_rgba();
        let points: Vec<(f64, f64)> = xs
            .iter()
            .copied()
            .zip(series.values.iter().copied())
            .filter(|(_, y)| y.is_finite())
            .collect();

        chart
            .draw_series(LineSeries::new(points.clone(), color.stroke_width(2)))
            .map_err(draw_err)?
            .label(series.name.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
        chart
            .draw_series(points.into_iter().map(|p| Circle::new(p, 4, color.filled())))
            .map_err(draw_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_err)?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Top of the y axis: 10% above the largest finite point, and never below
/// 1.0 so the baseline level is always visible.
fn y_upper(report: &Report) -> f64 {
    let max = report
        .series
        .iter()
        .flat_map(|s| s.points())
        .filter(|v| v.is_finite())
        .fold(0.0f64, f64::max);
    (max * 1.1).max(1.0)
}

/// Label for an x key point; empty between slots.
fn label_at(labels: &[String], x: f64) -> String {
    let slot = x.round();
    if slot < 0.0 || (x - slot).abs() > 1e-6 {
        return String::new();
    }
    labels.get(slot as usize).cloned().unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
