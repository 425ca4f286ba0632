//! Render Spec Module
//! Declarative description of a chart, consumed by the drawing backends.

use crate::data::DataPoint;
use crate::stats::{format_value, summarize, ChartSummary};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Line stroke color (RGB).
pub const LINE_COLOR: [u8; 3] = [52, 199, 89]; // Green

/// Default frame size when none is given.
pub const DEFAULT_WIDTH: f32 = 600.0;
pub const DEFAULT_HEIGHT: f32 = 400.0;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Invalid chart size {width}x{height}")]
    InvalidSize { width: f32, height: f32 },
    #[error("Non-finite value at point {index} ({label})")]
    NonFiniteValue { index: usize, label: String },
    #[error("{0} charts are not implemented yet")]
    Unsupported(ChartType),
}

/// Chart kind selected by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Pie,
}

impl ChartType {
    pub const ALL: [ChartType; 3] = [ChartType::Line, ChartType::Bar, ChartType::Pie];
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ChartType::Line => "Line",
            ChartType::Bar => "Bar",
            ChartType::Pie => "Pie",
        };
        f.write_str(name)
    }
}

/// How consecutive series points are joined.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Interpolation {
    Linear,
    Cardinal,
}

/// A plotted point; `x` is the category position along the horizontal axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub points: Vec<SeriesPoint>,
    pub interpolation: Interpolation,
    pub color: [u8; 3],
}

impl LineSeries {
    /// Points as `[x, y]` pairs for the plotting backends.
    pub fn coordinates(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.x, p.y]).collect()
    }
}

/// Where an annotation sits relative to its point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationPosition {
    Top,
    Bottom,
}

/// Annotated point with no visible symbol; only `text` is drawn.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub point: SeriesPoint,
    pub text: String,
    pub position: AnnotationPosition,
    pub symbol_size: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSize {
    pub width: f32,
    pub height: f32,
}

impl Default for FrameSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

/// Everything a backend needs to draw the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSpec {
    pub series: Vec<LineSeries>,
    pub markers: Vec<Marker>,
    /// Vertical scale domain `(min, max)`.
    pub y_scale: (f64, f64),
    /// Leading-edge vertical ticks at min, mid and max.
    pub y_ticks: Vec<AxisTick>,
    /// Always empty: the horizontal axis carries no labels.
    pub x_ticks: Vec<AxisTick>,
    pub frame: FrameSize,
    pub summary: ChartSummary,
}

impl RenderSpec {
    /// Number of categories on the horizontal axis.
    pub fn category_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).max().unwrap_or(0)
    }

    /// Horizontal range covering every category position.
    pub fn x_range(&self) -> (f64, f64) {
        let last = self.category_count().saturating_sub(1) as f64;
        (0.0, last.max(1.0))
    }

    /// Drawable vertical range; a flat series gets one unit of room each side.
    pub fn y_range(&self) -> (f64, f64) {
        let (min, max) = self.y_scale;
        if max > min {
            (min, max)
        } else {
            (min - 1.0, max + 1.0)
        }
    }
}

fn series_point(points: &[DataPoint], index: usize) -> SeriesPoint {
    let point = &points[index];
    SeriesPoint {
        label: point.label.clone(),
        x: index as f64,
        y: point.value,
    }
}

/// Build the line chart description for `points`.
pub fn render(points: &[DataPoint], summary: &ChartSummary) -> RenderSpec {
    let series = LineSeries {
        points: (0..points.len()).map(|i| series_point(points, i)).collect(),
        interpolation: Interpolation::Cardinal,
        color: LINE_COLOR,
    };

    let mut markers = Vec::with_capacity(2);
    if !summary.is_empty() {
        let extremes = [
            (summary.max_index, AnnotationPosition::Top),
            (summary.min_index, AnnotationPosition::Bottom),
        ];
        for (index, position) in extremes {
            if let Some(index) = index.filter(|&i| i < points.len()) {
                let point = series_point(points, index);
                markers.push(Marker {
                    text: format_value(point.y),
                    point,
                    position,
                    symbol_size: 0.0,
                });
            }
        }
    }

    let y_ticks = summary
        .ticks()
        .iter()
        .map(|&value| AxisTick {
            value,
            label: format_value(value),
        })
        .collect();

    RenderSpec {
        series: vec![series],
        markers,
        y_scale: (summary.min, summary.max),
        y_ticks,
        x_ticks: Vec::new(),
        frame: FrameSize::default(),
        summary: *summary,
    }
}

/// A sized, typed chart over an injected point sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartView {
    pub width: f32,
    pub height: f32,
    pub chart_type: ChartType,
    pub data: Vec<DataPoint>,
}

impl ChartView {
    pub fn new(width: f32, height: f32, chart_type: ChartType, data: Vec<DataPoint>) -> Self {
        Self {
            width,
            height,
            chart_type,
            data,
        }
    }

    fn validate(&self) -> Result<(), ChartError> {
        let valid_dim = |d: f32| d.is_finite() && d > 0.0;
        if !valid_dim(self.width) || !valid_dim(self.height) {
            return Err(ChartError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if let Some((index, point)) = self
            .data
            .iter()
            .enumerate()
            .find(|(_, p)| !p.value.is_finite())
        {
            return Err(ChartError::NonFiniteValue {
                index,
                label: point.label.clone(),
            });
        }
        Ok(())
    }

    /// Validate the view and produce its render description.
    pub fn build(&self) -> Result<RenderSpec, ChartError> {
        self.validate()?;

        match self.chart_type {
            ChartType::Line => {
                let summary = summarize(&self.data);
                let mut spec = render(&self.data, &summary);
                spec.frame = FrameSize {
                    width: self.width,
                    height: self.height,
                };
                debug!(
                    points = self.data.len(),
                    min = summary.min,
                    max = summary.max,
                    "line chart built"
                );
                Ok(spec)
            }
            ChartType::Bar | ChartType::Pie => {
                debug!(chart_type = %self.chart_type, "unsupported chart type requested");
                Err(ChartError::Unsupported(self.chart_type))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_series;

    fn sample_spec() -> RenderSpec {
        let points = sample_series();
        render(&points, &summarize(&points))
    }

    #[test]
    fn sample_spec_has_one_series_of_ten_points() {
        let spec = sample_spec();
        assert_eq!(spec.series.len(), 1);
        assert_eq!(spec.series[0].points.len(), 10);
        assert_eq!(spec.series[0].interpolation, Interpolation::Cardinal);
        assert_eq!(spec.category_count(), 10);
    }

    #[test]
    fn sample_spec_axes() {
        let spec = sample_spec();
        let labels: Vec<&str> = spec.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["10.00", "13.50", "17.00"]);
        assert!(spec.x_ticks.is_empty());
        assert_eq!(spec.y_scale, (10.0, 17.0));
    }

    #[test]
    fn sample_spec_markers_annotate_extremes() {
        let spec = sample_spec();
        assert_eq!(spec.markers.len(), 2);

        let max = &spec.markers[0];
        assert_eq!(max.point.label, "6");
        assert_eq!(max.point.x, 5.0);
        assert_eq!(max.text, "17.00");
        assert_eq!(max.position, AnnotationPosition::Top);
        assert_eq!(max.symbol_size, 0.0);

        let min = &spec.markers[1];
        assert_eq!(min.point.label, "1");
        assert_eq!(min.text, "10.00");
        assert_eq!(min.position, AnnotationPosition::Bottom);
    }

    #[test]
    fn empty_series_renders_zero_axis_without_markers() {
        let spec = render(&[], &summarize(&[]));
        assert_eq!(spec.series.len(), 1);
        assert!(spec.series[0].points.is_empty());
        assert!(spec.markers.is_empty());
        let labels: Vec<&str> = spec.y_ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["0.00", "0.00", "0.00"]);
    }

    #[test]
    fn empty_summary_places_no_markers() {
        let spec = render(&sample_series(), &ChartSummary::default());
        assert_eq!(spec.series[0].points.len(), 10);
        assert!(spec.markers.is_empty());
    }

    #[test]
    fn view_carries_frame_size() {
        let view = ChartView::new(320.0, 180.0, ChartType::Line, sample_series());
        let spec = view.build().unwrap();
        assert_eq!(spec.frame, FrameSize { width: 320.0, height: 180.0 });
    }

    #[test]
    fn bar_and_pie_are_unsupported() {
        for chart_type in [ChartType::Bar, ChartType::Pie] {
            let view = ChartView::new(320.0, 180.0, chart_type, sample_series());
            assert_eq!(view.build(), Err(ChartError::Unsupported(chart_type)));
        }
    }

    #[test]
    fn non_finite_value_is_rejected() {
        let mut data = sample_series();
        data[3].value = f64::NAN;
        let view = ChartView::new(320.0, 180.0, ChartType::Line, data);
        assert_eq!(
            view.build(),
            Err(ChartError::NonFiniteValue {
                index: 3,
                label: "4".to_string()
            })
        );
    }

    #[test]
    fn zero_size_is_rejected() {
        let view = ChartView::new(0.0, 180.0, ChartType::Line, sample_series());
        assert!(matches!(view.build(), Err(ChartError::InvalidSize { .. })));
    }

    #[test]
    fn chart_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ChartType::Pie).unwrap(), "\"pie\"");
        let parsed: ChartType = serde_json::from_str("\"bar\"").unwrap();
        assert_eq!(parsed, ChartType::Bar);
    }
}
