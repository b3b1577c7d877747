// Rust Timetable Application
// Main entry point

use anyhow::{anyhow, Context, Result};
use rust_timetable::services::settings::SettingsService;
use rust_timetable::ui_egui::TimetableApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Rust Timetable Application");

    let settings_service = match std::env::args_os().nth(1) {
        Some(path) => SettingsService::new(path),
        None => SettingsService::at_default_location(),
    };
    log::info!("Using settings file {}", settings_service.path().display());

    let settings = settings_service.load_or_default();
    let app = TimetableApp::new(&settings).context("Failed to build timetable from settings")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Timetable")
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rust Timetable",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| anyhow!("Failed to run the timetable window: {}", e))
}
