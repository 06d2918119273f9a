//! Circadian Viewer - Brightness & CCT Dashboard
//!
//! Plots a day of circadian lighting data loaded from `circadian.json`.

use anyhow::anyhow;
use circadian_viewer::config::ViewerConfig;
use circadian_viewer::gui::{CircadianApp, APP_TITLE};
use circadian_viewer::session::Session;
use eframe::egui;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = ViewerConfig::load_default();

    // Load once up front; the window only ever sees the result.
    let session = Session::initialize(&config);
    if let Err(e) = &session {
        log::error!("{}", e);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 420.0])
            .with_title(APP_TITLE),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::light());
            Ok(Box::new(CircadianApp::new(session)))
        }),
    )
    .map_err(|e| anyhow!("failed to run the viewer window: {e}"))
}
