//! Circadian Viewer Main Application
//! Header, view dropdown and chart area over an already-initialised session.

use crate::charts::ChartSpec;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use crate::session::{Session, SessionError};
use egui::{Color32, RichText, TopBottomPanel};

pub const APP_TITLE: &str = "Circadian Data Visualization";

/// What the window shows for the whole session.
enum AppState {
    Ready(Session),
    /// Start-up failed; only this message is displayed.
    Failed(String),
}

/// Main application window.
pub struct CircadianApp {
    state: AppState,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
}

impl CircadianApp {
    /// Wrap the result of [`Session::initialize`].
    pub fn new(session: Result<Session, SessionError>) -> Self {
        let mut control_panel = ControlPanel::new();

        let state = match session {
            Ok(session) => {
                control_panel.set_status(&format!(
                    "{} ({})",
                    session.presenter().summary(),
                    session.data_path().display()
                ));
                AppState::Ready(session)
            }
            Err(err) => AppState::Failed(err.to_string()),
        };

        Self {
            state,
            control_panel,
            chart_viewer: ChartViewer::new(),
        }
    }

    /// Chart for the current selection; `None` once start-up has failed.
    pub fn current_chart(&self) -> Option<ChartSpec> {
        match &self.state {
            AppState::Ready(session) => {
                Some(session.presenter().chart(self.control_panel.selection))
            }
            AppState::Failed(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            AppState::Failed(message) => Some(message.as_str()),
            AppState::Ready(_) => None,
        }
    }

    fn show_header(ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.label(RichText::new(APP_TITLE).size(26.0).strong());
        ui.label(
            RichText::new("This app visualizes Brightness and CCT over time.")
                .size(13.0)
                .color(Color32::DARK_GRAY),
        );
        ui.add_space(6.0);
    }
}

impl eframe::App for CircadianApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        TopBottomPanel::top("header").show(ctx, |ui| {
            Self::show_header(ui);

            if matches!(self.state, AppState::Ready(_)) {
                ui.separator();
                match self.control_panel.show(ui) {
                    ControlPanelAction::SelectionChanged(selection) => {
                        log::debug!("Switched view to '{}'", selection);
                    }
                    ControlPanelAction::None => {}
                }
                ui.add_space(6.0);
            }
        });

        egui::CentralPanel::default().show(ctx, |ui| match &self.state {
            AppState::Failed(message) => self.chart_viewer.show_error(ui, message),
            AppState::Ready(session) => {
                let spec = session.presenter().chart(self.control_panel.selection);
                self.chart_viewer.show(ui, &spec);
            }
        });
    }
}
