//! EasyChart - line chart widget with min/max annotations
//!
//! A point series is summarized into min/mid/max, turned into a declarative
//! `RenderSpec`, and drawn with egui_plot (interactive) or plotters (PNG).

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod stats;

pub use charts::{render, ChartError, ChartType, ChartView, RenderSpec};
pub use data::{DataPoint, SeriesLoader};
pub use stats::{summarize, ChartSummary};
