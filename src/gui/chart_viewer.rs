//! Chart Viewer Widget
//! Central area showing the current chart, or the start-up error in its place.

use crate::charts::{ChartPlotter, ChartSpec};
use egui::{Color32, RichText};

const MIN_CHART_HEIGHT: f32 = 240.0;
/// Room left under the plot for the footer hint.
const FOOTER_HEIGHT: f32 = 40.0;

/// Displays one chart at a time.
#[derive(Default)]
pub struct ChartViewer;

impl ChartViewer {
    pub fn new() -> Self {
        Self
    }

    /// Draw `spec` with its title, filling the remaining space.
    pub fn show(&mut self, ui: &mut egui::Ui, spec: &ChartSpec) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&spec.title).size(18.0).strong());
        });
        ui.add_space(8.0);

        let height = (ui.available_height() - FOOTER_HEIGHT).max(MIN_CHART_HEIGHT);
        ChartPlotter::draw(ui, spec, height);

        ui.add_space(8.0);
        ui.label("Select from the dropdown to switch between graphs.");
    }

    /// Draw a fatal error; nothing else is rendered.
    pub fn show_error(&mut self, ui: &mut egui::Ui, message: &str) {
        egui::Frame::none()
            .fill(Color32::from_rgb(255, 235, 238))
            .stroke(egui::Stroke::new(1.0, Color32::from_rgb(220, 53, 69)))
            .rounding(5.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.label(
                    RichText::new(format!("Error: {}", message))
                        .size(14.0)
                        .color(Color32::from_rgb(156, 0, 6)),
                );
            });
    }
}
