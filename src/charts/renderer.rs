//! Static Chart Renderer
//! Renders a `RenderSpec` to a PNG image with plotters, or exports it as JSON.
//!
//! Layout:
//! 1. Line through all points (cardinal curve, green)
//! 2. Light horizontal guides at min, mid and max with two-decimal labels
//! 3. Max value annotated above its point, min value below
//! 4. No horizontal axis labels

use crate::charts::interpolate::{cardinal_spline, CARDINAL_TENSION, SAMPLES_PER_SEGMENT};
use crate::charts::{AnnotationPosition, Interpolation, RenderSpec};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;
use tracing::info;

// Colors
const GRID: RGBColor = RGBColor(200, 200, 200);
const TEXT: RGBColor = RGBColor(0, 0, 0);

const MARGIN: u32 = 24;
const Y_LABEL_AREA: u32 = 60;
const FONT: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Drawing failed: {0}")]
    Drawing(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON export failed: {0}")]
    Json(#[from] serde_json::Error),
}

fn drawing<E: std::fmt::Display>(e: E) -> RenderError {
    RenderError::Drawing(e.to_string())
}

pub struct StaticChartRenderer;

impl StaticChartRenderer {
    /// Output image size in pixels.
    pub fn pixel_size(spec: &RenderSpec) -> (u32, u32) {
        let px = |v: f32| v.round().max(1.0) as u32;
        (px(spec.frame.width), px(spec.frame.height))
    }

    /// Render the chart to a PNG file.
    pub fn render_png(spec: &RenderSpec, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, Self::pixel_size(spec)).into_drawing_area();
        Self::draw(&root, spec)?;
        root.present().map_err(drawing)?;
        info!(path = %path.display(), "chart image written");
        Ok(())
    }

    /// Write the render description as pretty JSON.
    pub fn export_json(spec: &RenderSpec, path: &Path) -> Result<(), RenderError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, spec)?;
        info!(path = %path.display(), "render spec written");
        Ok(())
    }

    fn draw<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        spec: &RenderSpec,
    ) -> Result<(), RenderError> {
        root.fill(&WHITE).map_err(drawing)?;

        let (x_min, x_max) = spec.x_range();
        let (y_min, y_max) = spec.y_range();

        let mut chart = ChartBuilder::on(root)
            .margin(MARGIN)
            .y_label_area_size(Y_LABEL_AREA)
            .build_cartesian_2d(x_min..x_max, y_min..y_max)
            .map_err(drawing)?;

        chart
            .configure_mesh()
            .disable_mesh()
            .x_labels(0)
            .y_labels(0)
            .draw()
            .map_err(drawing)?;

        // Vertical axis: guides and labels only at `y_ticks`
        let tick_style = (FONT, 14)
            .into_font()
            .color(&TEXT)
            .pos(Pos::new(HPos::Right, VPos::Center));
        for tick in &spec.y_ticks {
            chart
                .draw_series(LineSeries::new(
                    vec![(x_min, tick.value), (x_max, tick.value)],
                    GRID.stroke_width(1),
                ))
                .map_err(drawing)?;
            let (px, py) = chart.backend_coord(&(x_min, tick.value));
            root.draw(&Text::new(tick.label.clone(), (px - 8, py), tick_style.clone()))
                .map_err(drawing)?;
        }

        for series in &spec.series {
            let coords = series.coordinates();
            let curve = match series.interpolation {
                Interpolation::Linear => coords,
                Interpolation::Cardinal => {
                    cardinal_spline(&coords, CARDINAL_TENSION, SAMPLES_PER_SEGMENT)
                }
            };
            let [r, g, b] = series.color;
            chart
                .draw_series(LineSeries::new(
                    curve.into_iter().map(|[x, y]| (x, y)),
                    RGBColor(r, g, b).stroke_width(2),
                ))
                .map_err(drawing)?;
        }

        for marker in &spec.markers {
            let (px, py) = chart.backend_coord(&(marker.point.x, marker.point.y));
            let (offset, vpos) = match marker.position {
                AnnotationPosition::Top => (-4, VPos::Bottom),
                AnnotationPosition::Bottom => (4, VPos::Top),
            };
            let style = (FONT, 12)
                .into_font()
                .color(&TEXT)
                .pos(Pos::new(HPos::Center, vpos));
            root.draw(&Text::new(marker.text.clone(), (px, py + offset), style))
                .map_err(drawing)?;
        }

        Ok(())
    }
}
