//! Control Panel Widget
//! Left side panel with data source, chart settings and export controls.

use crate::charts::ChartType;
use egui::{Color32, ComboBox, RichText};
use std::path::PathBuf;

/// User settings for the chart
#[derive(Clone)]
pub struct UserSettings {
    pub source_path: Option<PathBuf>,
    pub chart_type: ChartType,
    pub width: f32,
    pub height: f32,
    pub label_col: String,
    pub value_col: String,
}

/// Left side control panel with file selection and export controls.
pub struct ControlPanel {
    pub settings: UserSettings,
    pub columns: Vec<String>,
    pub status: String,
    pub busy: bool,
}

impl ControlPanel {
    pub fn new(chart_type: ChartType, width: f32, height: f32) -> Self {
        Self {
            settings: UserSettings {
                source_path: None,
                chart_type,
                width,
                height,
                label_col: String::new(),
                value_col: String::new(),
            },
            columns: Vec::new(),
            status: "Ready".to_string(),
            busy: false,
        }
    }

    /// Update available columns after CSV load; first column is the label,
    /// second (if any) the value.
    pub fn update_columns(&mut self, columns: Vec<String>) {
        self.settings.label_col = columns.first().cloned().unwrap_or_default();
        self.settings.value_col = columns
            .get(1)
            .or_else(|| columns.first())
            .cloned()
            .unwrap_or_default();
        self.columns = columns;
    }

    pub fn clear_columns(&mut self) {
        self.columns.clear();
        self.settings.label_col.clear();
        self.settings.value_col.clear();
    }

    fn column_combo(
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        columns: &[String],
        selected: &mut String,
    ) -> bool {
        let mut changed = false;
        ui.horizontal(|ui| {
            ui.add_sized([100.0, 20.0], egui::Label::new(label));
            ComboBox::from_id_salt(id)
                .width(150.0)
                .selected_text(selected.as_str())
                .show_ui(ui, |ui| {
                    for col in columns {
                        if ui.selectable_label(*selected == *col, col).clicked() {
                            *selected = col.clone();
                            changed = true;
                        }
                    }
                });
        });
        changed
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("📈 EasyChart")
                    .size(22.0)
                    .color(Color32::from_rgb(52, 199, 89)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Data Source Section =====
        ui.label(RichText::new("📁 Data Source").size(14.0).strong());
        ui.add_space(5.0);

        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let path_text = self
                        .settings
                        .source_path
                        .as_ref()
                        .and_then(|p| p.file_name())
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_else(|| "Demo series".to_string());
                    ui.label(RichText::new(&path_text).size(12.0));

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.add_enabled_ui(!self.busy, |ui| {
                            if ui.button("📂 Browse").clicked() {
                                action = ControlPanelAction::Browse;
                            }
                            if ui.button("Demo").clicked() {
                                action = ControlPanelAction::UseSample;
                            }
                        });
                    });
                });
            });

        if !self.columns.is_empty() {
            ui.add_space(8.0);
            let label_changed = Self::column_combo(
                ui,
                "label_col",
                "Label Column:",
                &self.columns,
                &mut self.settings.label_col,
            );
            let value_changed = Self::column_combo(
                ui,
                "value_col",
                "Value Column:",
                &self.columns,
                &mut self.settings.value_col,
            );
            if label_changed || value_changed {
                action = ControlPanelAction::ColumnsChanged;
            }
        }

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Chart Section =====
        ui.label(RichText::new("⚙️ Chart").size(14.0).strong());
        ui.add_space(5.0);

        ui.horizontal(|ui| {
            for chart_type in ChartType::ALL {
                ui.radio_value(
                    &mut self.settings.chart_type,
                    chart_type,
                    chart_type.to_string(),
                );
            }
        });
        ui.add(egui::Slider::new(&mut self.settings.width, 200.0..=1200.0).text("Width"));
        ui.add(egui::Slider::new(&mut self.settings.height, 150.0..=900.0).text("Height"));

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(10.0);

        // ===== Export Section =====
        ui.vertical_centered(|ui| {
            let export_enabled = !self.busy && self.settings.chart_type == ChartType::Line;
            ui.add_enabled_ui(export_enabled, |ui| {
                let png_button = egui::Button::new(RichText::new("🖼 Export PNG").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(png_button).clicked() {
                    action = ControlPanelAction::ExportPng;
                }
                ui.add_space(5.0);
                let json_button = egui::Button::new(RichText::new("📄 Export Spec").size(14.0))
                    .min_size(egui::vec2(150.0, 30.0));
                if ui.add(json_button).clicked() {
                    action = ControlPanelAction::ExportJson;
                }
            });
        });

        ui.add_space(15.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.starts_with("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    /// Set status line
    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    Browse,
    UseSample,
    ColumnsChanged,
    ExportPng,
    ExportJson,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_two_columns_become_label_and_value() {
        let mut panel = ControlPanel::new(ChartType::Line, 600.0, 400.0);
        panel.update_columns(vec!["date".into(), "close".into(), "volume".into()]);
        assert_eq!(panel.settings.label_col, "date");
        assert_eq!(panel.settings.value_col, "close");
    }

    #[test]
    fn single_column_is_used_for_both() {
        let mut panel = ControlPanel::new(ChartType::Line, 600.0, 400.0);
        panel.update_columns(vec!["price".into()]);
        assert_eq!(panel.settings.label_col, "price");
        assert_eq!(panel.settings.value_col, "price");

        panel.clear_columns();
        assert!(panel.columns.is_empty());
        assert!(panel.settings.value_col.is_empty());
    }
}
