// src/ui/architecture.rs
use eframe::egui::{self, RichText};

use crate::fixtures::architecture::{
    ArchitectureComponent, Impact, Region, DATA_FLOW, DEPLOYMENT_TOPOLOGY, DIAGRAM, HIGH_AVAILABILITY, KEY_METRICS,
    ARCHITECTURE_COMPONENTS, OPTIMIZATION_STRATEGIES, SCALABILITY, SECURITY, TECHNOLOGY_STACK,
};
use crate::state::ArchitectureTab;
use super::charts::{CHART_1, CHART_2};
use super::widgets::{self, SUCCESS_COLOR};

pub fn show_architecture_view(ui: &mut egui::Ui, tab: &mut ArchitectureTab) {
    widgets::section_heading(
        ui,
        "System Architecture",
        "Comprehensive overview of the scalable MySQL deployment infrastructure",
    );
    widgets::tab_bar(ui, tab, &[
        (ArchitectureTab::Overview, "Overview"),
        (ArchitectureTab::Components, "Components"),
        (ArchitectureTab::DataFlow, "Data Flow"),
        (ArchitectureTab::TechStack, "Tech Stack"),
        (ArchitectureTab::Deployment, "Deployment"),
    ]);

    match tab {
        ArchitectureTab::Overview => draw_overview(ui),
        ArchitectureTab::Components => draw_components(ui),
        ArchitectureTab::DataFlow => draw_data_flow(ui),
        ArchitectureTab::TechStack => draw_tech_stack(ui),
        ArchitectureTab::Deployment => draw_deployment(ui),
    }
}

fn draw_overview(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Architecture Diagram",
            "High-level system architecture with replication and failover",
        );

        for (i, tier) in DIAGRAM.iter().enumerate() {
            if i > 0 {
                ui.vertical_centered(|ui| ui.label(RichText::new("⬇").size(18.0).weak()));
            }
            ui.columns(tier.nodes.len(), |columns| {
                for (column, (name, tag)) in columns.iter_mut().zip(tier.nodes) {
                    column.group(|ui| {
                        ui.set_width(ui.available_width());
                        ui.vertical_centered(|ui| {
                            ui.label(RichText::new(*name).strong());
                            let color = match *tag {
                                "Write" => SUCCESS_COLOR,
                                "Read" => CHART_1,
                                _ => egui::Color32::GRAY,
                            };
                            widgets::badge(ui, tag, color);
                        });
                    });
                }
            });
        }
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Key Metrics Summary", "Overall system performance improvements");
        ui.columns(3, |columns| {
            for (i, metric) in KEY_METRICS.iter().enumerate() {
                let column = &mut columns[i % 3];
                column.label(RichText::new(metric.title).small().weak());
                column.label(RichText::new(metric.value).size(20.0).strong());
                column.label(RichText::new(metric.caption).small().weak());
                column.add_space(8.0);
            }
        });
    });
}

fn draw_components(ui: &mut egui::Ui) {
    widgets::section_heading(
        ui,
        "Architecture Components",
        "Detailed specifications for each infrastructure component",
    );
    ui.columns(2, |columns| {
        for (i, component) in ARCHITECTURE_COMPONENTS.iter().enumerate() {
            draw_component_card(&mut columns[i % 2], component);
        }
    });
}

fn draw_component_card(ui: &mut egui::Ui, component: &ArchitectureComponent) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(component.name).strong());
        ui.label(RichText::new(component.description).small().weak());
        ui.add_space(4.0);
        for feature in component.features {
            ui.label(format!("• {}", feature));
        }
        ui.add_space(4.0);
        widgets::detail_rows(ui, &format!("component_{}", component.name), component.details);
    });
    ui.add_space(6.0);
}

fn draw_data_flow(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Data Flow", "How queries are routed and processed through the system");
        for (i, step) in DATA_FLOW.iter().enumerate() {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("{}", i + 1)).strong().color(CHART_2));
                ui.vertical(|ui| {
                    ui.label(RichText::new(step.title).strong());
                    ui.label(RichText::new(step.detail).weak());
                });
            });
            ui.add_space(6.0);
        }
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Optimization Strategies", "Key techniques for performance improvements");
        for strategy in OPTIMIZATION_STRATEGIES {
            ui.horizontal(|ui| {
                ui.label(RichText::new(strategy.strategy).strong());
                let color = match strategy.impact {
                    Impact::High => SUCCESS_COLOR,
                    Impact::Medium => CHART_1,
                };
                widgets::badge(ui, &format!("{} Impact", strategy.impact.label()), color);
            });
            ui.label(RichText::new(strategy.description).weak());
            ui.label(RichText::new(strategy.implementation).small().monospace());
            ui.add_space(6.0);
        }
    });
}

fn draw_tech_stack(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Technology Stack",
            "Complete list of technologies powering the infrastructure",
        );
        for category in TECHNOLOGY_STACK {
            ui.label(RichText::new(category.category).strong());
            egui::Grid::new(category.category)
                .num_columns(3)
                .spacing([24.0, 4.0])
                .striped(true)
                .show(ui, |ui| {
                    for tech in category.technologies {
                        ui.label(tech.name);
                        widgets::badge(ui, tech.version, egui::Color32::GRAY);
                        ui.label(RichText::new(tech.purpose).weak());
                        ui.end_row();
                    }
                });
            ui.add_space(8.0);
        }
    });
}

fn draw_deployment(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Deployment Topology", "Geographic distribution and regional infrastructure");
        ui.columns(DEPLOYMENT_TOPOLOGY.len(), |columns| {
            for (column, region) in columns.iter_mut().zip(DEPLOYMENT_TOPOLOGY) {
                draw_region(column, region);
            }
        });
    });
    ui.add_space(8.0);

    let cards: [(&str, &[(&str, &str)]); 3] = [
        ("High Availability", HIGH_AVAILABILITY),
        ("Scalability", SCALABILITY),
        ("Security", SECURITY),
    ];
    ui.columns(cards.len(), |columns| {
        for (column, (title, rows)) in columns.iter_mut().zip(cards) {
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).strong());
                widgets::detail_rows(ui, title, rows);
            });
        }
    });
}

fn draw_region(ui: &mut egui::Ui, region: &Region) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new(region.region).strong());
        ui.label(RichText::new(region.role).small().weak());
        ui.add_space(4.0);
        for component in region.components {
            ui.label(format!("• {}", component));
        }
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Latency").weak());
            ui.label(RichText::new(region.latency).monospace());
        });
    });
}
