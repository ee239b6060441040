// src/app.rs
use std::sync::Arc;

use eframe::egui;
use tokio::runtime::Handle;
use tracing::debug;

use crate::analysis::Notifier;
use crate::config::DashboardSettings;
use crate::state::{AppState, Panel, PanelState};
use crate::ui;

/// eframe storage key for the last selected panel.
pub const ACTIVE_PANEL_KEY: &str = "active_panel";

pub struct DashboardApp {
    state: AppState,
    settings: DashboardSettings,
}

impl DashboardApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        runtime: Handle,
        settings: DashboardSettings,
        startup_error: Option<String>,
    ) -> Self {
        let ctx = cc.egui_ctx.clone();
        let notify: Notifier = Arc::new(move || ctx.request_repaint());

        let restored = cc.storage
            .filter(|_| settings.remember_panel)
            .and_then(|storage| eframe::get_value::<Panel>(storage, ACTIVE_PANEL_KEY));
        let initial = restored.unwrap_or(settings.initial_panel);
        debug!(?initial, restored = restored.is_some(), "Mounting initial panel");

        let mut state = AppState::new(runtime, notify, initial);
        state.error_message = startup_error;

        Self { state, settings }
    }

    fn show_header(&mut self, ui: &mut egui::Ui) {
        ui.add_space(6.0);
        ui.heading("MySQL Operations");
        ui.label(egui::RichText::new("Scalable Deployment & Query Optimization").weak());
        ui.add_space(6.0);

        // Panel selection
        ui.horizontal(|ui| {
            for panel in Panel::ALL {
                if ui.selectable_label(self.state.current_panel() == panel, panel.label()).clicked() {
                    self.state.select_panel(panel);
                }
            }
        });
        ui.add_space(4.0);
    }

    fn show_panel(&mut self, ui: &mut egui::Ui) {
        match &mut self.state.active {
            PanelState::Replication => ui::show_replication_view(ui),
            PanelState::Queries(query) => ui::show_queries_view(ui, query),
            PanelState::Backup(backup) => ui::show_backup_view(ui, backup),
            PanelState::LoadTesting(load) => ui::show_load_testing_view(ui, load),
            PanelState::Architecture(tab) => ui::show_architecture_view(ui, tab),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            self.show_header(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_source(self.state.current_panel().label())
                .show(ui, |ui| self.show_panel(ui));
        });

        // Show error modal if needed
        if let Some(error) = self.state.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .show(ctx, |ui| {
                    ui.label(&error);
                    if ui.button("OK").clicked() {
                        self.state.error_message = None;
                    }
                });
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if self.settings.remember_panel {
            eframe::set_value(storage, ACTIVE_PANEL_KEY, &self.state.current_panel());
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.teardown();
    }
}
