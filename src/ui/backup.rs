// src/ui/backup.rs
use eframe::egui::{self, RichText};

use crate::fixtures::backup::{
    Backup, BackupStatus, FailoverTest, RestoreTarget, SyncState, AUTOMATIC_FAILOVER, BACKUPS, BACKUP_STATS,
    FAILOVER_TESTS, RECOVERY_OBJECTIVES, REPLICA_HEALTH, RETENTION_NOTE, RETENTION_POLICIES, SCHEDULE_NOTE,
};
use crate::state::{BackupState, BackupTab, RestoreDialogState};
use super::widgets::{self, PENDING_COLOR, SUCCESS_COLOR};

const DISPLAY_FORMAT: &str = "%b %-d, %Y %H:%M";

/// Backup timestamp for display, falling back to the raw fixture text.
pub fn display_timestamp(backup: &Backup) -> String {
    backup.taken_at()
        .map(|at| at.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| backup.timestamp.to_string())
}

/// Fill level of a retention policy's bar, in percent.
pub fn retention_fill(count: u32) -> f32 {
    count as f32 / (count as f32 + 10.0) * 100.0
}

pub fn show_backup_view(ui: &mut egui::Ui, state: &mut BackupState) {
    widgets::section_heading(
        ui,
        "Backup & Failover Management",
        "Automated backup strategies with point-in-time recovery and disaster recovery orchestration",
    );
    widgets::stat_cards(ui, &BACKUP_STATS);

    widgets::tab_bar(ui, &mut state.tab, &[
        (BackupTab::Backups, "Backups"),
        (BackupTab::Failover, "Failover"),
        (BackupTab::Retention, "Retention Policies"),
        (BackupTab::Replicas, "Replica Status"),
    ]);

    match state.tab {
        BackupTab::Backups => draw_backups(ui, &mut state.restore),
        BackupTab::Failover => draw_failover(ui),
        BackupTab::Retention => draw_retention(ui),
        BackupTab::Replicas => draw_replicas(ui),
    }

    let ctx = ui.ctx().clone();
    show_restore_dialog(&ctx, &mut state.restore);
}

fn draw_backups(ui: &mut egui::Ui, restore: &mut RestoreDialogState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Backup Schedule");
                ui.label(RichText::new("Automated backups with point-in-time recovery").weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::inert_button(ui, "▶ Run Manual Backup", "run_manual_backup");
                widgets::inert_button(ui, "⚙ Configure", "configure_backups");
            });
        });
        ui.add_space(8.0);

        for backup in BACKUPS {
            draw_backup_row(ui, backup, restore);
            ui.add_space(4.0);
        }
    });
    ui.add_space(8.0);
    ui.label(RichText::new(format!("📅 {}", SCHEDULE_NOTE)).weak());
}

fn draw_backup_row(ui: &mut egui::Ui, backup: &Backup, restore: &mut RestoreDialogState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            let (icon, color) = match backup.status {
                BackupStatus::Completed => ("✔", SUCCESS_COLOR),
                BackupStatus::InProgress => ("⟳", PENDING_COLOR),
            };
            ui.label(RichText::new(icon).size(18.0).color(color));

            ui.vertical(|ui| {
                ui.label(RichText::new(backup.kind).strong());
                ui.label(RichText::new(display_timestamp(backup)).weak());
                ui.label(RichText::new(backup.location).small().weak());
            });

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if backup.is_restorable() && ui.button("⬇ Restore").clicked() {
                    restore.open(backup.id);
                }
                widgets::badge(ui, backup.status.label(), color);
                for (label, value) in [
                    ("Retention", backup.retention),
                    ("Duration", backup.duration),
                    ("Size", backup.size),
                ] {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).small().weak());
                        ui.label(RichText::new(value).monospace());
                    });
                }
            });
        });
    });
}

/// Confirmation window for restoring a completed backup.
pub fn show_restore_dialog(ctx: &egui::Context, dialog: &mut RestoreDialogState) {
    let Some(backup) = dialog.backup() else {
        return;
    };

    egui::Window::new("Restore Database")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(format!("Restore from backup: {} - {}", backup.kind, backup.timestamp));
            ui.add_space(8.0);
            ui.label(RichText::new(format!(
                "ⓘ This will restore the database to the state at {}. Current data will be backed up before restoration.",
                backup.timestamp
            )).weak());
            ui.add_space(8.0);

            ui.label(RichText::new("Restore Target").strong());
            let selected = dialog.target.map(|t| t.label()).unwrap_or("Select target database");
            egui::ComboBox::from_id_source("restore_target")
                .selected_text(selected)
                .width(240.0)
                .show_ui(ui, |ui| {
                    for target in RestoreTarget::ALL {
                        ui.selectable_value(&mut dialog.target, Some(target), target.label());
                    }
                });
            ui.add_space(8.0);

            ui.label(RichText::new("Backup Details").strong());
            ui.label(RichText::new(format!("Size: {}", backup.size)).weak());
            ui.label(RichText::new(format!("Location: {}", backup.location)).weak());
            ui.label(RichText::new(format!("Estimated restore time: ~{}", backup.duration)).weak());
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    dialog.cancel();
                }
                if ui.add_enabled(dialog.can_confirm(), egui::Button::new("Start Restore")).clicked() {
                    dialog.confirm();
                }
            });
        });
}

fn draw_failover(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Failover Test Results");
                ui.label(RichText::new("Disaster recovery readiness validation").weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::inert_button(ui, "▶ Run Failover Test", "run_failover_test");
            });
        });
        ui.add_space(8.0);

        for test in FAILOVER_TESTS {
            draw_failover_test(ui, test);
            ui.add_space(4.0);
        }
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.set_width(ui.available_width());
            widgets::section_heading(ui, "Automatic Failover", "Configured health checks and triggers");
            widgets::detail_rows(ui, "automatic_failover", AUTOMATIC_FAILOVER);
        });
        columns[1].group(|ui| {
            ui.set_width(ui.available_width());
            widgets::section_heading(ui, "Recovery Objectives", "Target metrics for disaster recovery");
            widgets::detail_rows(ui, "recovery_objectives", RECOVERY_OBJECTIVES);
        });
    });
}

fn draw_failover_test(ui: &mut egui::Ui, test: &FailoverTest) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    widgets::badge(ui, test.date, egui::Color32::GRAY);
                    ui.label(RichText::new(test.scenario).strong());
                });
                ui.label(RichText::new(test.notes).weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let verdict = if test.passed { "passed" } else { "failed" };
                widgets::badge(ui, verdict, if test.passed { SUCCESS_COLOR } else { widgets::DANGER_COLOR });
                for (label, value) in [("RPO", test.rpo), ("RTO", test.rto)] {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(label).small().weak());
                        ui.label(RichText::new(value).monospace());
                    });
                }
            });
        });
    });
}

fn draw_retention(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Retention Policies");
                ui.label(RichText::new("Automated backup lifecycle management").weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::inert_button(ui, "⚙ Edit Policies", "edit_retention_policies");
            });
        });
        ui.add_space(8.0);

        for policy in RETENTION_POLICIES {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(RichText::new(policy.kind).strong());
                        ui.label(RichText::new(policy.frequency).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge(ui, policy.retention, egui::Color32::GRAY);
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Active Backups").weak());
                    ui.label(RichText::new(policy.count.to_string()).monospace());
                });
                ui.add(egui::ProgressBar::new(retention_fill(policy.count) / 100.0));
            });
            ui.add_space(4.0);
        }
    });
    ui.add_space(8.0);
    ui.label(RichText::new(format!("🖴 {}", RETENTION_NOTE)).weak());
}

fn draw_replicas(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Replica Health Status",
            "Real-time replication monitoring and lag tracking",
        );

        for replica in REPLICA_HEALTH {
            ui.group(|ui| {
                ui.set_width(ui.available_width());
                let color = match replica.state {
                    SyncState::Active => SUCCESS_COLOR,
                    SyncState::Syncing => PENDING_COLOR,
                };
                ui.horizontal(|ui| {
                    ui.label(RichText::new("🗄").color(color));
                    ui.vertical(|ui| {
                        ui.label(RichText::new(replica.name).strong());
                        ui.label(RichText::new(replica.role).weak());
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge(ui, replica.state.label(), color);
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Replication Lag").weak());
                    ui.label(RichText::new(replica.lag).monospace());
                });
                widgets::meter(ui, "Health Score", f32::from(replica.health));
            });
            ui.add_space(4.0);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::backup::find_backup;

    #[test]
    fn timestamps_render_human_readable() {
        let backup = find_backup(2).unwrap();
        assert_eq!(display_timestamp(backup), "Oct 17, 2025 08:00");
    }

    #[test]
    fn unparseable_timestamp_falls_back_to_raw_text() {
        let backup = Backup { timestamp: "yesterday", ..*find_backup(1).unwrap() };
        assert_eq!(display_timestamp(&backup), "yesterday");
    }

    #[test]
    fn retention_fill_levels() {
        assert!((retention_fill(30) - 75.0).abs() < 1e-4);
        assert!((retention_fill(288) - 96.644_295).abs() < 1e-3);
    }

    #[test]
    fn restore_dialog_renders_only_when_open() {
        let ctx = egui::Context::default();
        let mut dialog = RestoreDialogState::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| show_restore_dialog(ctx, &mut dialog));
        assert!(!dialog.is_open());

        dialog.open(3);
        dialog.target = Some(RestoreTarget::NewInstance);
        let _ = ctx.run(egui::RawInput::default(), |ctx| show_restore_dialog(ctx, &mut dialog));
        assert!(dialog.is_open());
        assert_eq!(dialog.target, Some(RestoreTarget::NewInstance));
    }
}
