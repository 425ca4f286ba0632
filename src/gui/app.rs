//! EasyChart Main Application
//! Main window with control panel and chart viewer.

use crate::charts::{ChartView, StaticChartRenderer};
use crate::config::AppConfig;
use crate::data::{sample_series, DataPoint, SeriesLoader};
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::SidePanel;
use polars::prelude::DataFrame;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;
use tracing::{error, info};

/// File loading result from background thread
enum LoadResult {
    Csv {
        df: DataFrame,
        columns: Vec<String>,
        path: PathBuf,
    },
    Json {
        points: Vec<DataPoint>,
        path: PathBuf,
    },
    Error(String),
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Main application window.
pub struct EasyChartApp {
    loader: SeriesLoader,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,

    // Async file loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl EasyChartApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: &AppConfig,
        data: Vec<DataPoint>,
    ) -> Self {
        Self {
            loader: SeriesLoader::new(),
            control_panel: ControlPanel::new(config.chart_type, config.width, config.height),
            chart_viewer: ChartViewer::new(ChartView::new(
                config.width,
                config.height,
                config.chart_type,
                data,
            )),
            load_rx: None,
            is_loading: false,
        }
    }

    /// Handle file selection; the file is read on a background thread.
    fn handle_browse(&mut self) {
        if self.is_loading {
            return;
        }

        let Some(path) = rfd::FileDialog::new()
            .add_filter("Series", &["csv", "json"])
            .pick_file()
        else {
            return;
        };

        self.control_panel.settings.source_path = Some(path.clone());
        self.control_panel.set_status("Loading file...");
        self.is_loading = true;
        self.control_panel.busy = true;

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = if is_json(&path) {
                match SeriesLoader::load_json(&path) {
                    Ok(points) => LoadResult::Json { points, path },
                    Err(e) => LoadResult::Error(e.to_string()),
                }
            } else {
                match SeriesLoader::read_csv(&path) {
                    Ok(df) => {
                        let columns = df
                            .get_column_names()
                            .iter()
                            .map(|s| s.to_string())
                            .collect();
                        LoadResult::Csv { df, columns, path }
                    }
                    Err(e) => LoadResult::Error(e.to_string()),
                }
            };
            let _ = tx.send(result);
        });
    }

    /// Check for file loading results
    fn check_load_results(&mut self) {
        let Some(rx) = self.load_rx.take() else {
            return;
        };

        match rx.try_recv() {
            Ok(LoadResult::Csv { df, columns, path }) => {
                info!(path = %path.display(), rows = df.height(), "csv loaded");
                self.loader.set_dataframe(df);
                self.control_panel.update_columns(columns);
                self.apply_columns();
                self.finish_loading();
            }
            Ok(LoadResult::Json { points, path }) => {
                self.loader.clear();
                self.control_panel.clear_columns();
                self.control_panel.set_status(&format!(
                    "Loaded {} points from {}",
                    points.len(),
                    path.display()
                ));
                self.chart_viewer.set_data(points);
                self.finish_loading();
            }
            Ok(LoadResult::Error(e)) => {
                error!(error = %e, "file load failed");
                self.control_panel.set_status(&format!("Error: {}", e));
                self.finish_loading();
            }
            Err(std::sync::mpsc::TryRecvError::Empty) => {
                // Still loading
                self.load_rx = Some(rx);
            }
            Err(std::sync::mpsc::TryRecvError::Disconnected) => {
                self.control_panel.set_status("Error: loader stopped");
                self.finish_loading();
            }
        }
    }

    fn finish_loading(&mut self) {
        self.is_loading = false;
        self.control_panel.busy = false;
    }

    /// Rebuild the series from the selected CSV columns
    fn apply_columns(&mut self) {
        let settings = &self.control_panel.settings;
        match self.loader.series(&settings.label_col, &settings.value_col) {
            Ok(points) => {
                let status = format!(
                    "Loaded {} points ({} / {})",
                    points.len(),
                    settings.label_col,
                    settings.value_col
                );
                self.chart_viewer.set_data(points);
                self.control_panel.set_status(&status);
            }
            Err(e) => {
                error!(error = %e, "series extraction failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    fn handle_use_sample(&mut self) {
        self.loader.clear();
        self.control_panel.clear_columns();
        self.control_panel.settings.source_path = None;
        self.chart_viewer.set_data(sample_series());
        self.control_panel.set_status("Demo series");
    }

    /// Handle PNG export via plotters, then open the image
    fn handle_export_png(&mut self) {
        let spec = match self.chart_viewer.spec() {
            Ok(spec) => spec,
            Err(e) => {
                self.control_panel.set_status(&format!("Error: {}", e));
                return;
            }
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("PNG Image", &["png"])
            .set_file_name("chart.png")
            .save_file()
        else {
            return; // User cancelled
        };

        match StaticChartRenderer::render_png(&spec, &output_path) {
            Ok(()) => {
                self.control_panel
                    .set_status(&format!("Exported {}", output_path.display()));
                if let Err(e) = open::that(&output_path) {
                    error!(error = %e, "could not open exported image");
                }
            }
            Err(e) => {
                error!(error = %e, "png export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }

    /// Handle render spec export as JSON
    fn handle_export_json(&mut self) {
        let spec = match self.chart_viewer.spec() {
            Ok(spec) => spec,
            Err(e) => {
                self.control_panel.set_status(&format!("Error: {}", e));
                return;
            }
        };

        let Some(output_path) = rfd::FileDialog::new()
            .add_filter("JSON", &["json"])
            .set_file_name("chart_spec.json")
            .save_file()
        else {
            return;
        };

        match StaticChartRenderer::export_json(&spec, &output_path) {
            Ok(()) => self
                .control_panel
                .set_status(&format!("Exported {}", output_path.display())),
            Err(e) => {
                error!(error = %e, "spec export failed");
                self.control_panel.set_status(&format!("Error: {}", e));
            }
        }
    }
}

impl eframe::App for EasyChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        // Left panel - Control Panel
        SidePanel::left("control_panel")
            .min_width(280.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    match self.control_panel.show(ui) {
                        ControlPanelAction::Browse => self.handle_browse(),
                        ControlPanelAction::UseSample => self.handle_use_sample(),
                        ControlPanelAction::ColumnsChanged => self.apply_columns(),
                        ControlPanelAction::ExportPng => self.handle_export_png(),
                        ControlPanelAction::ExportJson => self.handle_export_json(),
                        ControlPanelAction::None => {}
                    }
                });
            });

        let settings = &self.control_panel.settings;
        self.chart_viewer
            .configure(settings.chart_type, settings.width, settings.height);

        // Central panel - Chart Viewer
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::both().show(ui, |ui| {
                self.chart_viewer.show(ui);
            });
        });
    }
}
