// src/ui/widgets.rs
use eframe::egui::{self, Color32, RichText};

use crate::fixtures::StatCard;
use super::charts::{CHART_1, CHART_2, CHART_4};

pub const SUCCESS_COLOR: Color32 = CHART_2;
pub const PENDING_COLOR: Color32 = CHART_1;
pub const WARNING_COLOR: Color32 = Color32::from_rgb(230, 160, 40);
pub const DANGER_COLOR: Color32 = CHART_4;

/// Horizontal row of selectable labels. Returns `true` when the selection changed.
pub fn tab_bar<T: Copy + PartialEq>(ui: &mut egui::Ui, current: &mut T, tabs: &[(T, &str)]) -> bool {
    let mut changed = false;
    ui.horizontal(|ui| {
        for &(tab, label) in tabs {
            if ui.selectable_label(*current == tab, label).clicked() && *current != tab {
                *current = tab;
                changed = true;
            }
        }
    });
    ui.add_space(4.0);
    ui.separator();
    ui.add_space(8.0);
    changed
}

pub fn section_heading(ui: &mut egui::Ui, title: &str, description: &str) {
    ui.heading(title);
    if !description.is_empty() {
        ui.label(RichText::new(description).weak());
    }
    ui.add_space(8.0);
}

pub fn stat_card(ui: &mut egui::Ui, card: &StatCard) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(card.title).small().weak());
        ui.label(RichText::new(card.value).size(22.0).strong());
        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 4.0;
            if let Some(highlight) = card.highlight {
                ui.label(RichText::new(highlight).small().color(SUCCESS_COLOR));
            }
            ui.label(RichText::new(card.caption).small().weak());
        });
    });
}

/// The row of headline cards at the top of each panel.
pub fn stat_cards(ui: &mut egui::Ui, cards: &[StatCard]) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |columns| {
        for (column, card) in columns.iter_mut().zip(cards) {
            stat_card(column, card);
        }
    });
    ui.add_space(12.0);
}

/// Label/value pairs in a two-column grid.
pub fn detail_rows(ui: &mut egui::Ui, id: &str, rows: &[(&str, &str)]) {
    egui::Grid::new(id)
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            for (label, value) in rows {
                ui.label(RichText::new(*label).weak());
                ui.label(RichText::new(*value).monospace());
                ui.end_row();
            }
        });
}

pub fn badge(ui: &mut egui::Ui, text: &str, color: Color32) -> egui::Response {
    egui::Frame::none()
        .fill(color.gamma_multiply(0.2))
        .rounding(4.0)
        .inner_margin(egui::Margin::symmetric(6.0, 2.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).small().color(color));
        })
        .response
}

/// Labelled progress bar with the percentage printed on the right.
pub fn meter(ui: &mut egui::Ui, label: &str, percent: f32) {
    ui.horizontal(|ui| {
        ui.label(label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{:.0}%", percent)).monospace());
        });
    });
    ui.add(egui::ProgressBar::new((percent / 100.0).clamp(0.0, 1.0)));
}

/// Logs a button that has nothing behind it.
pub fn inert_button(ui: &mut egui::Ui, label: &str, action: &'static str) {
    if ui.button(label).clicked() {
        tracing::info!(action, "Action requested (no backend attached)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Tab {
        First,
        Second,
    }

    #[test]
    fn tab_bar_keeps_selection_without_clicks() {
        let ctx = egui::Context::default();
        let mut current = Tab::Second;
        let mut changed = true;
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                changed = tab_bar(ui, &mut current, &[(Tab::First, "First"), (Tab::Second, "Second")]);
            });
        });
        assert!(!changed);
        assert_eq!(current, Tab::Second);
    }
}
