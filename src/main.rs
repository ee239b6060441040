// src/main.rs
use anyhow::{Context, Result};
use eframe::egui;
use tracing::{info, warn};

mod analysis;
mod app;
mod config;
mod fixtures;
mod logging;
mod state;
mod ui;
mod utils;

use app::DashboardApp;
use config::DashboardSettings;

fn main() -> Result<()> {
    let (settings, settings_error) = match DashboardSettings::load() {
        Ok(settings) => (settings, None),
        Err(e) => (DashboardSettings::default(), Some(e)),
    };

    logging::init_tracing(&settings.log_filter);
    let startup_error = settings_error.map(|e| {
        warn!(error = %e, "Falling back to default settings");
        format!("Settings could not be loaded, using defaults.\n{}", e)
    });

    // Hosts the analysis delay; the UI itself stays on the main thread
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .thread_name("dbops-worker")
        .build()
        .context("Failed to start async runtime")?;
    let handle = runtime.handle().clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_title("Database Operations Dashboard"),
        ..Default::default()
    };

    info!(initial_panel = ?settings.initial_panel, "Starting dashboard");
    eframe::run_native(
        "dbops-dashboard",
        options,
        Box::new(move |cc| Box::new(DashboardApp::new(cc, handle, settings, startup_error))),
    ).map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))?;

    runtime.shutdown_background();
    Ok(())
}
