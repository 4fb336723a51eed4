// Rust Gantt Application
// Main entry point

use std::path::PathBuf;

use anyhow::{anyhow, Result};
use rust_gantt::models::settings::Settings;
use rust_gantt::services::chart::{ChartInput, ChartSession};
use rust_gantt::services::settings::SettingsService;
use rust_gantt::ui_egui::GanttApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Gantt");

    let settings = match SettingsService::default_location().get() {
        Ok(settings) => settings,
        Err(err) => {
            log::warn!("Falling back to default settings: {err:?}");
            Settings::default()
        }
    };

    // Optional path to a chart input JSON file; the demo window otherwise
    let input = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => ChartInput::load(&path)?,
        None => ChartInput::demo(),
    };
    let session = ChartSession::new(input, &settings)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Gantt",
        options,
        Box::new(move |cc| Ok(Box::new(GanttApp::new(cc, session, settings)))),
    )
    .map_err(|e| anyhow!("Failed to run application: {e}"))
}
