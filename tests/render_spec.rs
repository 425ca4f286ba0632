use easy_chart::charts::{AnnotationPosition, ChartError, ChartType, ChartView};
use easy_chart::data::{sample_series, DataPoint};
use easy_chart::{render, summarize};

fn sample_points() -> Vec<DataPoint> {
    [
        ("1", 10.0),
        ("2", 11.0),
        ("3", 10.0),
        ("4", 13.0),
        ("5", 12.0),
        ("6", 17.0),
        ("7", 15.0),
        ("8", 13.0),
        ("9", 11.0),
        ("10", 10.0),
    ]
    .iter()
    .map(|&(label, value)| DataPoint::new(label, value))
    .collect()
}

#[test]
fn sample_matches_demo_series() {
    assert_eq!(sample_points(), sample_series());
}

#[test]
fn sample_summary_and_extreme_labels() {
    let points = sample_points();
    let summary = summarize(&points);
    assert_eq!((summary.min, summary.max, summary.mid), (10.0, 17.0, 13.5));
    assert_eq!(points[summary.max_index.unwrap()].label, "6");
    assert_eq!(points[summary.min_index.unwrap()].label, "1");
}

#[test]
fn sample_render_spec_shape() {
    let points = sample_points();
    let spec = render(&points, &summarize(&points));

    assert_eq!(spec.series.len(), 1);
    assert_eq!(spec.series[0].points.len(), 10);
    assert_eq!(spec.markers.len(), 2);
    let labels: Vec<&str> = spec.y_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["10.00", "13.50", "17.00"]);
    assert!(spec.x_ticks.is_empty());

    let positions: Vec<AnnotationPosition> = spec.markers.iter().map(|m| m.position).collect();
    assert_eq!(positions, [AnnotationPosition::Top, AnnotationPosition::Bottom]);
}

#[test]
fn chart_view_builds_line_with_frame() {
    let view = ChartView::new(480.0, 240.0, ChartType::Line, sample_points());
    let spec = view.build().expect("line chart builds");
    assert_eq!(spec.frame.width, 480.0);
    assert_eq!(spec.frame.height, 240.0);
    assert_eq!(spec.summary.mid, 13.5);
}

#[test]
fn chart_view_rejects_unimplemented_types() {
    let view = ChartView::new(480.0, 240.0, ChartType::Pie, sample_points());
    let err = view.build().unwrap_err();
    assert_eq!(err, ChartError::Unsupported(ChartType::Pie));
    assert_eq!(err.to_string(), "Pie charts are not implemented yet");
}

#[test]
fn chart_view_rejects_infinite_values() {
    let mut points = sample_points();
    points[7].value = f64::INFINITY;
    let view = ChartView::new(480.0, 240.0, ChartType::Line, points);
    assert!(matches!(
        view.build(),
        Err(ChartError::NonFiniteValue { index: 7, .. })
    ));
}

#[test]
fn empty_view_still_builds() {
    let view = ChartView::new(480.0, 240.0, ChartType::Line, Vec::new());
    let spec = view.build().unwrap();
    assert!(spec.markers.is_empty());
    assert_eq!(spec.y_scale, (0.0, 0.0));
}
