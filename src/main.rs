//! EasyChart - desktop viewer
//!
//! Usage: `easy_chart [config.json]`

use anyhow::Context;
use easy_chart::config::AppConfig;
use easy_chart::data::sample_series;
use easy_chart::gui::EasyChartApp;
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("easy_chart=info")),
        )
        .with_target(true)
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => AppConfig::load(&path)?,
        None => AppConfig::default(),
    };
    info!(
        chart_type = %config.chart_type,
        width = config.width,
        height = config.height,
        "starting"
    );

    let data = config.data.load().unwrap_or_else(|e| {
        error!(error = %e, "could not load configured series, using demo data");
        sample_series()
    });

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([800.0, 500.0])
            .with_title("EasyChart"),
        ..Default::default()
    };

    eframe::run_native(
        "EasyChart",
        options,
        Box::new(move |cc| Ok(Box::new(EasyChartApp::new(cc, &config, data)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the chart window")
}
