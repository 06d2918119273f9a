//! Control Panel Widget
//! Top panel with the view dropdown and data status line.

use crate::charts::ChartSelection;
use egui::{Color32, ComboBox, RichText};

/// View picker plus a one-line status.
pub struct ControlPanel {
    pub selection: ChartSelection,
    pub status: String,
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self {
            selection: ChartSelection::default(),
            status: "Ready".to_string(),
        }
    }
}

impl ControlPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }

    /// Draw the control panel
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.label(RichText::new("Select the graph to display:").size(14.0));
        ui.add_space(4.0);

        ComboBox::from_id_salt("graph_option")
            .width(260.0)
            .selected_text(self.selection.caption())
            .show_ui(ui, |ui| {
                for option in ChartSelection::ALL {
                    if ui
                        .selectable_label(self.selection == option, option.caption())
                        .clicked()
                        && self.selection != option
                    {
                        self.selection = option;
                        action = ControlPanelAction::SelectionChanged(option);
                    }
                }
            });

        ui.add_space(6.0);
        ui.label(RichText::new(&self.status).size(11.0).color(Color32::GRAY));

        action
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged(ChartSelection),
}
