// src/ui/queries.rs
use eframe::egui::{self, RichText};

use crate::analysis::{AnalysisReport, Severity};
use crate::fixtures::queries::{
    AppliedOptimization, ExecutionPlanStep, PerformanceComparison, QueryHistorySample, APPLIED_OPTIMIZATIONS,
    EXECUTION_PLAN, HISTORY_NOTE, PERFORMANCE_COMPARISON, QUERY_HISTORY, QUERY_STATS,
};
use crate::state::{QueryState, QueryTab};
use crate::utils::format_thousands;
use super::charts::{self, ChartRow, SeriesStyle, CHART_1, CHART_2, CHART_3, CHART_4};
use super::widgets::{self, DANGER_COLOR, SUCCESS_COLOR, WARNING_COLOR};

const QUERY_PLACEHOLDER: &str = "SELECT * FROM users WHERE email = 'user@example.com'...";

const COMPARISON_SERIES: [SeriesStyle; 2] = [
    SeriesStyle { key: "before", label: "Before", color: CHART_4 },
    SeriesStyle { key: "after", label: "After", color: CHART_2 },
];

const COST_SERIES: SeriesStyle = SeriesStyle { key: "cost", label: "Cost", color: CHART_1 };

const HISTORY_SERIES: [SeriesStyle; 3] = [
    SeriesStyle { key: "avg", label: "Average", color: CHART_1 },
    SeriesStyle { key: "p95", label: "P95", color: CHART_3 },
    SeriesStyle { key: "p99", label: "P99", color: CHART_4 },
];

impl ChartRow for PerformanceComparison {
    fn category(&self) -> &str {
        self.query
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "before" => Some(self.before_ms),
            "after" => Some(self.after_ms),
            _ => None,
        }
    }
}

impl ChartRow for ExecutionPlanStep {
    fn category(&self) -> &str {
        self.step
    }

    fn value(&self, key: &str) -> Option<f64> {
        (key == "cost").then_some(self.cost)
    }
}

impl ChartRow for QueryHistorySample {
    fn category(&self) -> &str {
        self.time
    }

    fn value(&self, key: &str) -> Option<f64> {
        match key {
            "avg" => Some(self.avg_ms),
            "p95" => Some(self.p95_ms),
            "p99" => Some(self.p99_ms),
            _ => None,
        }
    }
}

fn severity_color(severity: Severity) -> egui::Color32 {
    match severity {
        Severity::High => DANGER_COLOR,
        Severity::Medium => WARNING_COLOR,
        Severity::Low => egui::Color32::GRAY,
    }
}

pub fn show_queries_view(ui: &mut egui::Ui, state: &mut QueryState) {
    // Pick up a finished analysis before drawing anything that depends on it
    state.simulator.poll();

    widgets::section_heading(
        ui,
        "Query Optimization",
        "Analyze queries, identify bottlenecks, and apply AI-powered optimizations",
    );
    widgets::stat_cards(ui, &QUERY_STATS);
    draw_analyzer(ui, state);
    ui.add_space(12.0);

    widgets::tab_bar(ui, &mut state.tab, &[
        (QueryTab::Performance, "Performance"),
        (QueryTab::ExecutionPlans, "Execution Plans"),
        (QueryTab::History, "Query History"),
        (QueryTab::Optimizations, "Applied Optimizations"),
    ]);

    match state.tab {
        QueryTab::Performance => draw_performance(ui),
        QueryTab::ExecutionPlans => draw_execution_plans(ui),
        QueryTab::History => draw_history(ui),
        QueryTab::Optimizations => draw_optimizations(ui),
    }
}

fn draw_analyzer(ui: &mut egui::Ui, state: &mut QueryState) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "AI-Powered Query Analyzer",
            "Paste your SQL query to get instant optimization recommendations",
        );

        ui.add(egui::TextEdit::multiline(&mut state.input)
            .hint_text(QUERY_PLACEHOLDER)
            .code_editor()
            .desired_rows(6)
            .desired_width(f32::INFINITY));
        ui.add_space(4.0);

        let analyzing = state.simulator.is_analyzing();
        ui.horizontal(|ui| {
            let label = if analyzing { "Analyzing..." } else { "▶ Analyze Query" };
            if ui.add_enabled(state.can_analyze(), egui::Button::new(label)).clicked() {
                state.analyze();
            }
            if analyzing {
                ui.spinner();
            }
        });

        if let Some(report) = state.simulator.report() {
            ui.add_space(8.0);
            ui.separator();
            draw_report(ui, report);
        }
    });
}

fn draw_report(ui: &mut egui::Ui, report: &AnalysisReport) {
    ui.label(RichText::new("⚠ Issues Detected").strong());
    for issue in &report.issues {
        ui.horizontal_wrapped(|ui| {
            widgets::badge(ui, issue.severity.label(), severity_color(issue.severity));
            ui.label(issue.message.as_str());
        });
    }
    ui.add_space(8.0);

    ui.label(RichText::new("✔ Recommendations").strong().color(SUCCESS_COLOR));
    for (index, recommendation) in report.recommendations.iter().enumerate() {
        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new(format!("{}.", index + 1)).color(SUCCESS_COLOR));
            ui.label(RichText::new(recommendation).weak());
        });
    }
    ui.add_space(8.0);

    ui.horizontal(|ui| {
        ui.label(RichText::new("Estimated Performance Improvement").weak());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(RichText::new(format!("{}%", report.estimated_improvement)).strong().color(SUCCESS_COLOR));
        });
    });
    ui.add(egui::ProgressBar::new(f32::from(report.estimated_improvement) / 100.0));
}

fn draw_performance(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Query Performance Improvements",
            "Execution time before and after optimization (ms)",
        );
        charts::grouped_bar_chart(ui, "query_performance", PERFORMANCE_COMPARISON, &COMPARISON_SERIES);
    });
}

fn draw_execution_plans(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(
            ui,
            "Query Execution Plan Analysis",
            "Cost breakdown and row estimates for each operation",
        );
        charts::horizontal_bar_chart(ui, "execution_plan_cost", EXECUTION_PLAN, &COST_SERIES);
    });
    ui.add_space(8.0);

    ui.columns(2, |columns| {
        for (i, step) in EXECUTION_PLAN.iter().enumerate() {
            let column = &mut columns[i % 2];
            column.group(|ui| {
                ui.set_width(ui.available_width());
                ui.label(RichText::new(step.step).strong());
                let cost = format!("{}", step.cost);
                let rows = format_thousands(step.rows as f64);
                widgets::detail_rows(ui, &format!("plan_step_{}", i), &[
                    ("Estimated Cost", cost.as_str()),
                    ("Rows Processed", rows.as_str()),
                    ("Execution Time", step.time),
                ]);
            });
            column.add_space(6.0);
        }
    });
}

fn draw_history(ui: &mut egui::Ui) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        widgets::section_heading(ui, "Query Performance Over Time", "Average, P95, and P99 response times (ms)");
        charts::line_chart(ui, "query_history", QUERY_HISTORY, &HISTORY_SERIES);
    });
    ui.add_space(8.0);
    ui.label(RichText::new(HISTORY_NOTE).weak());
}

fn draw_optimizations(ui: &mut egui::Ui) {
    for optimization in APPLIED_OPTIMIZATIONS {
        draw_optimization_card(ui, optimization);
        ui.add_space(6.0);
    }
}

fn draw_optimization_card(ui: &mut egui::Ui, optimization: &AppliedOptimization) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(RichText::new(optimization.query).monospace());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                widgets::badge(ui, optimization.improvement, SUCCESS_COLOR);
            });
        });
        ui.label(RichText::new(optimization.issue).weak());
        ui.add_space(4.0);
        ui.label(RichText::new("Solution").strong());
        ui.label(RichText::new(optimization.solution).weak());
        ui.horizontal(|ui| {
            ui.label(RichText::new("Before:").weak());
            ui.label(RichText::new(optimization.before).monospace().color(DANGER_COLOR));
            ui.add_space(12.0);
            ui.label(RichText::new("After:").weak());
            ui.label(RichText::new(optimization.after).monospace().color(SUCCESS_COLOR));
        });
    });
}
