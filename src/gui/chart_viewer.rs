//! Chart Viewer Widget
//! Central panel showing the configured chart view.

use crate::charts::{ChartPlotter, ChartType, ChartView, RenderSpec};
use crate::data::DataPoint;
use egui::RichText;

/// Holds the current chart view; the render spec is rebuilt on every frame.
pub struct ChartViewer {
    pub view: ChartView,
}

impl ChartViewer {
    pub fn new(view: ChartView) -> Self {
        Self { view }
    }

    pub fn set_data(&mut self, data: Vec<DataPoint>) {
        self.view.data = data;
    }

    /// Sync frame size and chart type from the control panel.
    pub fn configure(&mut self, chart_type: ChartType, width: f32, height: f32) {
        self.view.chart_type = chart_type;
        self.view.width = width;
        self.view.height = height;
    }

    /// Build the current spec for export.
    pub fn spec(&self) -> Result<RenderSpec, crate::charts::ChartError> {
        self.view.build()
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        let title = format!(
            "{} chart · {} points",
            self.view.chart_type,
            self.view.data.len()
        );
        ui.label(RichText::new(title).size(14.0).strong());
        ui.add_space(8.0);

        match self.view.build() {
            Ok(spec) => {
                ChartPlotter::draw(ui, "easy_chart", &spec);
            }
            Err(e) => {
                let message = e.to_string();
                ChartPlotter::draw_message(ui, self.view.width, self.view.height, &message);
            }
        }
    }
}
