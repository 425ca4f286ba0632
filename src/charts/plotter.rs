//! Chart Plotter Module
//! Draws a `RenderSpec` interactively using egui_plot.

use crate::charts::interpolate::{cardinal_spline, CARDINAL_TENSION, SAMPLES_PER_SEGMENT};
use crate::charts::{AnnotationPosition, Interpolation, LineSeries, RenderSpec};
use egui::{Align2, Color32, FontId, Rect, RichText};
use egui_plot::{GridMark, Line, Plot, PlotBounds, PlotPoint, PlotPoints};

/// Annotation text size, close to a caption font.
const ANNOTATION_SIZE: f32 = 12.0;

/// Pixels between an annotation and its point.
const ANNOTATION_GAP: f32 = 4.0;

/// Draws line charts with extremum annotations.
pub struct ChartPlotter;

impl ChartPlotter {
    pub fn color(rgb: [u8; 3]) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Points to draw for a series, after interpolation.
    pub fn curve(series: &LineSeries) -> Vec<[f64; 2]> {
        let coords = series.coordinates();
        match series.interpolation {
            Interpolation::Linear => coords,
            Interpolation::Cardinal => {
                cardinal_spline(&coords, CARDINAL_TENSION, SAMPLES_PER_SEGMENT)
            }
        }
    }

    /// Grid marks for the vertical axis: exactly `spec.y_ticks`.
    pub fn y_marks(spec: &RenderSpec) -> Vec<GridMark> {
        let (min, max) = spec.y_scale;
        // One step size for all marks so none of them is faded out
        let step_size = if max > min { max - min } else { 1.0 };
        spec.y_ticks
            .iter()
            .map(|tick| GridMark {
                value: tick.value,
                step_size,
            })
            .collect()
    }

    /// Plot bounds pinned to the category positions and the vertical scale.
    pub fn plot_bounds(spec: &RenderSpec) -> PlotBounds {
        let (x_min, x_max) = spec.x_range();
        let (y_min, y_max) = spec.y_range();
        PlotBounds::from_min_max([x_min, y_min], [x_max, y_max])
    }

    /// Text anchor and vertical pixel offset of an annotation relative to its point.
    pub fn annotation_anchor(position: AnnotationPosition) -> (Align2, f32) {
        match position {
            AnnotationPosition::Top => (Align2::CENTER_BOTTOM, -ANNOTATION_GAP),
            AnnotationPosition::Bottom => (Align2::CENTER_TOP, ANNOTATION_GAP),
        }
    }

    /// Draw the chart described by `spec` into `ui`.
    ///
    /// Returns the screen rects of the painted annotations.
    pub fn draw(ui: &mut egui::Ui, id: &str, spec: &RenderSpec) -> Vec<Rect> {
        let bounds = Self::plot_bounds(spec);
        let y_marks = Self::y_marks(spec);
        let text_color = ui.visuals().text_color();

        // Room for the annotations, which are painted outside the plot frame
        ui.add_space(ANNOTATION_SIZE + ANNOTATION_GAP);

        let response = Plot::new(id)
            .width(spec.frame.width)
            .height(spec.frame.height)
            .allow_zoom(false)
            .allow_drag(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .allow_double_click_reset(false)
            .show_x(false)
            .show_y(false)
            .set_margin_fraction(egui::vec2(0.0, 0.0))
            .auto_bounds(egui::Vec2b::FALSE)
            .y_grid_spacer(move |_input| y_marks.clone())
            .y_axis_formatter(|mark, _range| format!("{:.2}", mark.value))
            // No horizontal axis labels
            .x_axis_formatter(|_mark, _range| String::new())
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(bounds);
                for series in &spec.series {
                    let curve = Self::curve(series);
                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(curve))
                            .color(Self::color(series.color))
                            .width(2.0),
                    );
                }
            });

        ui.add_space(ANNOTATION_SIZE + ANNOTATION_GAP);

        // egui_plot clips its items to the frame, so the extremum labels go on the ui painter
        let painter = ui.painter();
        spec.markers
            .iter()
            .map(|marker| {
                let (anchor, offset) = Self::annotation_anchor(marker.position);
                let point = PlotPoint::new(marker.point.x, marker.point.y);
                let pos = response.transform.position_from_point(&point) + egui::vec2(0.0, offset);
                painter.text(
                    pos,
                    anchor,
                    &marker.text,
                    FontId::proportional(ANNOTATION_SIZE),
                    text_color,
                )
            })
            .collect()
    }

    /// Placeholder shown in the chart frame when the view cannot be built.
    pub fn draw_message(ui: &mut egui::Ui, width: f32, height: f32, message: &str) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .show(ui, |ui| {
                ui.set_min_size(egui::vec2(width, height));
                ui.centered_and_justified(|ui| {
                    ui.label(
                        RichText::new(message)
                            .size(16.0)
                            .color(Color32::from_rgb(220, 53, 69)),
                    );
                });
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::render;
    use crate::data::sample_series;
    use crate::stats::summarize;

    #[test]
    fn y_marks_match_ticks() {
        let points = sample_series();
        let spec = render(&points, &summarize(&points));
        let values: Vec<f64> = ChartPlotter::y_marks(&spec).iter().map(|m| m.value).collect();
        assert_eq!(values, vec![10.0, 13.5, 17.0]);
    }

    #[test]
    fn flat_series_uses_unit_step() {
        let spec = render(&[], &summarize(&[]));
        assert!(ChartPlotter::y_marks(&spec).iter().all(|m| m.step_size == 1.0));
    }

    #[test]
    fn bounds_are_pinned_to_the_scale() {
        let points = sample_series();
        let spec = render(&points, &summarize(&points));
        let bounds = ChartPlotter::plot_bounds(&spec);
        assert_eq!(bounds.min(), [0.0, 10.0]);
        assert_eq!(bounds.max(), [9.0, 17.0]);
    }

    #[test]
    fn max_label_sits_above_and_min_label_below() {
        let (top, up) = ChartPlotter::annotation_anchor(AnnotationPosition::Top);
        let (bottom, down) = ChartPlotter::annotation_anchor(AnnotationPosition::Bottom);
        assert_eq!(top, Align2::CENTER_BOTTOM);
        assert_eq!(bottom, Align2::CENTER_TOP);
        assert!(up < 0.0 && down > 0.0);
    }

    #[test]
    fn annotations_are_painted_inside_the_visible_area() {
        let points = sample_series();
        let spec = render(&points, &summarize(&points));
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(800.0, 600.0))),
            ..Default::default()
        };

        let mut placed = Vec::new();
        let mut clip = Rect::NOTHING;
        let _ = ctx.run(input, |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                placed = ChartPlotter::draw(ui, "annotations", &spec);
                clip = ui.clip_rect();
            });
        });

        assert_eq!(placed.len(), 2);
        for rect in &placed {
            assert!(clip.contains_rect(*rect), "{:?} outside {:?}", rect, clip);
        }
        // "17.00" above "10.00"
        assert!(placed[0].bottom() < placed[1].top());
    }

    #[test]
    fn cardinal_curve_is_denser_than_input() {
        let points = sample_series();
        let spec = render(&points, &summarize(&points));
        let curve = ChartPlotter::curve(&spec.series[0]);
        assert_eq!(curve.len(), 9 * SAMPLES_PER_SEGMENT + 1);
        assert_eq!(curve[0], [0.0, 10.0]);
        assert_eq!(*curve.last().unwrap(), [9.0, 10.0]);
    }
}
