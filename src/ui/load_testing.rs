// src/ui/load_testing.rs
use eframe::egui::{self, RichText};

use crate::fixtures::load_test::{
    peak, sla_share, ErrorBucket, LatencySample, LoadSample, LoadTestScenario, ResourceSample, ScenarioOutcome,
    BASELINE_RPS, CONNECTION_METRICS, ERROR_DISTRIBUTION, ERROR_NOTE, KEY_FINDINGS, LATENCY_SERIES,
    LOAD_SERIES, LOAD_TEST_SCENARIOS, LOAD_TEST_STATS, PEAK_THROUGHPUT, PERCENTILE_SNAPSHOTS, RESOURCE_SERIES,
    SLA_TARGET_MS, TEST_PROFILE,
};
use crate::state::load_test_state::{DURATION_RANGE, DURATION_STEP, TRAFFIC_RANGE, TRAFFIC_STEP};
use crate::state::{LoadTestState, LoadTestTab};
use crate::utils::format_thousands;
use super::charts::{self, ChartRow, SeriesStyle, CHART_1, CHART_2, CHART_3, CHART_4};
use super::widgets::{self, SUCCESS_COLOR};

const LATENCY_STYLES: [SeriesStyle; 3] = [
    SeriesStyle { key: "p50", label: "P50", color: CHART_2 },
    SeriesStyle { key: "p95", label: "P95", color: CHART_1 },
    SeriesStyle { key: "p99", label: "P99", color: CHART_4 },
];

const LOAD_STYLES: [SeriesStyle; 2] = [
    SeriesStyle { key: "requests", label: "Requests/sec", color: CHART_1 },
    SeriesStyle { key: "connections", label: "Connections", color: CHART_3 },
];

const RESOURCE_STYLES: [SeriesStyle; 4] = [
    SeriesStyle { key: "cpu", label: "CPU", color: CHART_1 },
    SeriesStyle { key: "memory", label: "Memory", color: CHART_2 },
    SeriesStyle { key: "disk", label: "Disk I/O", color: CHART_3 },
    SeriesStyle { key: "network", label: "Network", color: CHART_4 },
];

const ERROR_STYLE: SeriesStyle = SeriesStyle { key: "count", label: "Count", color: CHART_4 };

impl ChartRow for LatencySample {
    fn category(&self) -> &str {
        self.time
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "p50" => Some(self.p50),
            "p95" => Some(self.p95),
            "p99" => Some(self.p99),
            _ => None,
        }
    }
}

impl ChartRow for LoadSample {
    fn category(&self) -> &str {
        self.time
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "requests" => Some(self.requests),
            "connections" => Some(self.connections),
            _ => None,
        }
    }
}

impl ChartRow for ResourceSample {
    fn category(&self) -> &str {
        self.time
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "cpu" => Some(self.cpu),
            "memory" => Some(self.memory),
            "disk" => Some(self.disk),
            "network" => Some(self.network),
            _ => None,
        }
    }
}

impl ChartRow for ErrorBucket {
    fn category(&self) -> &str {
        self.kind
    }

    fn value(&self, key: &str) -> Option<f64> {
        (key == "count").then_some(f64::from(self.count))
    }
}

fn outcome_color(outcome: ScenarioOutcome) -> egui::Color32 {
    match outcome {
        ScenarioOutcome::Passed => SUCCESS_COLOR,
        ScenarioOutcome::Warning => CHART_4,
    }
}

pub fn show_load_testing_view(ui: &mut egui::Ui, state: &mut LoadTestState) {
    widgets::section_heading(
        ui,
        "Load Testing & Capacity Planning",
        "Comprehensive performance validation and capacity analysis under simulated traffic",
    );
    widgets::stat_cards(ui, &LOAD_TEST_STATS);
    draw_configuration(ui, state);
    ui.add_space(12.0);

    widgets::tab_bar(ui, &mut state.tab, &[
        (LoadTestTab::Latency, "Latency"),
        (LoadTestTab::Throughput, "Throughput"),
        (LoadTestTab::Resources, "Resources"),
        (LoadTestTab::Errors, "Errors"),
        (LoadTestTab::Results, "Test Results"),
    ]);

    match state.tab {
        LoadTestTab::Latency => draw_latency(ui),
        LoadTestTab::Throughput => draw_throughput(ui),
        LoadTestTab::Resources => draw_resources(ui),
        LoadTestTab::Errors => draw_errors(ui),
        LoadTestTab::Results => draw_results(ui),
    }
}

fn draw_configuration(ui: &mut egui::Ui, state: &mut LoadTestState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.heading("Load Test Configuration");
                ui.label(RichText::new("Configure and run custom load tests").weak());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("▶ Run Test").clicked() {
                    state.request_run();
                }
            });
        });
        ui.add_space(8.0);

        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.label(RichText::new("Traffic Multiplier").strong());
            ui.add(egui::Slider::new(&mut state.traffic_multiplier, TRAFFIC_RANGE)
                .step_by(TRAFFIC_STEP)
                .suffix("×"));
            ui.label(RichText::new(format!(
                "Baseline: {} requests/sec • Test load: {} requests/sec",
                format_thousands(BASELINE_RPS),
                format_thousands(state.test_load_rps()),
            )).small().weak());

            let ui = &mut columns[1];
            ui.label(RichText::new("Test Duration").strong());
            ui.add(egui::Slider::new(&mut state.duration_secs, DURATION_RANGE)
                .step_by(DURATION_STEP)
                .suffix("s"));
            ui.label(RichText::new("Recommended: 180-300 seconds for accurate performance profiling").small().weak());
        });
        ui.add_space(8.0);

        ui.columns(TEST_PROFILE.len(), |columns| {
            for (column, (label, value)) in columns.iter_mut().zip(TEST_PROFILE) {
                column.label(RichText::new(*label).small().weak());
                column.label(*value);
            }
        });
    });
}

fn draw_latency(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Latency Distribution Under Load",
            "P50, P95, and P99 latency during 2× traffic surge test",
        );
        charts::line_chart(ui, "load_latency", LATENCY_SERIES, &LATENCY_STYLES);
    });
    ui.add_space(8.0);

    ui.columns(PERCENTILE_SNAPSHOTS.len(), |columns| {
        for (column, snapshot) in columns.iter_mut().zip(PERCENTILE_SNAPSHOTS) {
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(snapshot.title).strong());
                ui.label(RichText::new(snapshot.description).small().weak());
                ui.label(RichText::new(format!("{}ms", snapshot.latency_ms)).size(22.0).strong());
                let share = sla_share(snapshot.latency_ms);
                ui.add(egui::ProgressBar::new((share / 100.0) as f32));
                ui.label(RichText::new(format!("{:.1}% of SLA target ({}ms)", share, SLA_TARGET_MS)).small().weak());
            });
        }
    });
}

fn draw_throughput(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Throughput & Connections",
            "Requests per second and active connections during load test",
        );
        charts::area_chart(ui, "load_throughput", LOAD_SERIES, &LOAD_STYLES);
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        columns[0].group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Peak Throughput").strong());
            widgets::detail_rows(ui, "peak_throughput", PEAK_THROUGHPUT);
        });
        columns[1].group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("Connection Metrics").strong());
            widgets::detail_rows(ui, "connection_metrics", CONNECTION_METRICS);
        });
    });
}

fn draw_resources(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Resource Utilization",
            "CPU, memory, disk I/O, and network usage during load test",
        );
        charts::line_chart(ui, "load_resources", RESOURCE_SERIES, &RESOURCE_STYLES);
    });
    ui.add_space(8.0);

    let peaks = [
        ("Peak CPU", peak(RESOURCE_SERIES, |s| s.cpu)),
        ("Peak Memory", peak(RESOURCE_SERIES, |s| s.memory)),
        ("Peak Disk I/O", peak(RESOURCE_SERIES, |s| s.disk)),
        ("Peak Network", peak(RESOURCE_SERIES, |s| s.network)),
    ];
    ui.columns(peaks.len(), |columns| {
        for (column, (title, value)) in columns.iter_mut().zip(peaks) {
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(title).small().weak());
                ui.label(RichText::new(format!("{}%", value)).size(22.0).strong());
                ui.add(egui::ProgressBar::new((value / 100.0) as f32));
            });
        }
    });
}

fn draw_errors(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Error Distribution",
            "Breakdown of errors encountered during stress testing (3× load)",
        );
        charts::horizontal_bar_chart(ui, "load_errors", ERROR_DISTRIBUTION, &ERROR_STYLE);
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        for (i, bucket) in ERROR_DISTRIBUTION.iter().enumerate() {
            let column = &mut columns[i % 2];
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.horizontal(|ui| {
                    ui.label(RichText::new(bucket.kind).strong());
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        widgets::badge(ui, &format!("{}%", bucket.percentage), egui::Color32::GRAY);
                    });
                });
                ui.horizontal(|ui| {
                    ui.label(RichText::new("Error Count").weak());
                    ui.label(RichText::new(bucket.count.to_string()).monospace());
                });
                ui.add(egui::ProgressBar::new(bucket.percentage / 100.0));
            });
            column.add_space(6.0);
        }
    });
    ui.add_space(8.0);
    ui.label(RichText::new(format!("⚠ {}", ERROR_NOTE)).weak());
}

fn draw_results(ui: &mut egui::Ui) {
    ui.columns(LOAD_TEST_SCENARIOS.len(), |columns| {
        for (column, scenario) in columns.iter_mut().zip(LOAD_TEST_SCENARIOS) {
            draw_scenario_card(column, scenario);
        }
    });
    ui.add_space(8.0);

    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Key Findings", "Load testing insights and recommendations");
        for finding in KEY_FINDINGS {
            ui.horizontal(|ui| {
                let icon = match finding.outcome {
                    ScenarioOutcome::Passed => "✔",
                    ScenarioOutcome::Warning => "⚠",
                };
                ui.label(RichText::new(icon).color(outcome_color(finding.outcome)));
                ui.vertical(|ui| {
                    ui.label(RichText::new(finding.title).strong());
                    ui.label(RichText::new(finding.detail).weak());
                });
            });
            ui.add_space(6.0);
        }
    });
}

fn draw_scenario_card(ui: &mut egui::Ui, scenario: &LoadTestScenario) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(scenario.name).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::badge(ui, scenario.outcome.label(), outcome_color(scenario.outcome));
            });
        });
        ui.label(RichText::new(format!("Traffic: {} baseline", scenario.traffic)).small().weak());
        ui.add_space(4.0);
        widgets::detail_rows(ui, &format!("scenario_{}", scenario.name), &[
            ("P95 Latency", scenario.p95),
            ("P99 Latency", scenario.p99),
            ("Throughput", scenario.throughput),
            ("Error Rate", scenario.errors),
        ]);
    });
}
