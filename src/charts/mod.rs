//! Charts module - Render spec and drawing backends

mod interpolate;
mod plotter;
mod renderer;
mod spec;

pub use interpolate::cardinal_spline;
pub use plotter::ChartPlotter;
pub use renderer::{RenderError, StaticChartRenderer};
pub use spec::{
    render, AnnotationPosition, AxisTick, ChartError, ChartType, ChartView, FrameSize,
    Interpolation, LineSeries, Marker, RenderSpec, SeriesPoint, DEFAULT_HEIGHT, DEFAULT_WIDTH,
    LINE_COLOR,
};
