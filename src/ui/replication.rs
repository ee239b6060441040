// src/ui/replication.rs
use eframe::egui::{self, RichText};

use crate::fixtures::replication::{
    ReplicaNode, ThroughputSample, REPLICATION_STATS, REPLICATION_THROUGHPUT, REPLICA_NODES,
};
use super::charts::{self, ChartRow, SeriesStyle, CHART_1, CHART_2, CHART_3};
use super::widgets::{self, SUCCESS_COLOR};

const THROUGHPUT_SERIES: [SeriesStyle; 3] = [
    SeriesStyle { key: "primary", label: "Primary", color: CHART_1 },
    SeriesStyle { key: "replica1", label: "Replica 1", color: CHART_2 },
    SeriesStyle { key: "replica2", label: "Replica 2", color: CHART_3 },
];

impl ChartRow for ThroughputSample {
    fn category(&self) -> &str {
        self.time
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "primary" => Some(self.primary),
            "replica1" => Some(self.replica1),
            "replica2" => Some(self.replica2),
            _ => None,
        }
    }
}

pub fn show_replication_view(ui: &mut egui::Ui) {
    widgets::section_heading(
        ui,
        "Replication & High Availability",
        "Read/write split strategy with MySQL replicas - 2× read throughput increase",
    );
    widgets::stat_cards(ui, &REPLICATION_STATS);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Query Distribution", "Queries per second across primary and replica nodes");
        charts::stacked_area_chart(ui, "replication_throughput", REPLICATION_THROUGHPUT, &THROUGHPUT_SERIES);
    });
    ui.add_space(12.0);

    ui.columns(REPLICA_NODES.len(), |columns| {
        for (column, node) in columns.iter_mut().zip(REPLICA_NODES) {
            draw_node_card(column, node);
        }
    });
}

fn draw_node_card(ui: &mut egui::Ui, node: &ReplicaNode) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.colored_label(SUCCESS_COLOR, "●");
            ui.label(RichText::new(node.name).strong());
        });
        ui.label(RichText::new(node.role.label()).small().weak());
        ui.add_space(6.0);

        let id = format!("node_{}", node.name);
        widgets::detail_rows(ui, &id, &[
            ("Queries/sec", node.queries),
            ("Replication Lag", node.lag),
            ("CPU Usage", node.cpu),
            ("Memory", node.memory),
        ]);
    });
}
