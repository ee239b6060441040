// src/ui/charts.rs
use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints};

pub const CHART_1: Color32 = Color32::from_rgb(231, 110, 80);
pub const CHART_2: Color32 = Color32::from_rgb(42, 157, 144);
pub const CHART_3: Color32 = Color32::from_rgb(39, 71, 84);
pub const CHART_4: Color32 = Color32::from_rgb(232, 196, 104);

const CHART_HEIGHT: f32 = 260.0;
const GROUP_WIDTH: f64 = 0.8;

/// How one series is drawn. `key` names the column it reads from each row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesStyle {
    pub key: &'static str,
    pub label: &'static str,
    pub color: Color32,
}

/// A fixture record that can be plotted against a category axis.
pub trait ChartRow {
    fn category(&self) -> &str;
    fn value(&self, key: &str) -> Option<f64>;
}

fn columns<R: ChartRow>(rows: &[R], series: &[SeriesStyle]) -> Vec<Vec<f64>> {
    series.iter()
        .map(|style| rows.iter().map(|row| row.value(style.key).unwrap_or(0.0)).collect())
        .collect()
}

fn categories<R: ChartRow>(rows: &[R]) -> Vec<String> {
    rows.iter().map(|row| row.category().to_string()).collect()
}

/// Running sum of each series on top of the ones before it.
pub fn stack_series(series: &[Vec<f64>]) -> Vec<Vec<f64>> {
    let mut stacked: Vec<Vec<f64>> = Vec::with_capacity(series.len());
    for values in series {
        let next = match stacked.last() {
            Some(below) => values.iter()
                .enumerate()
                .map(|(i, v)| v + below.get(i).copied().unwrap_or(0.0))
                .collect(),
            None => values.clone(),
        };
        stacked.push(next);
    }
    stacked
}

/// Centre offsets of `count` bars sharing one category slot.
pub fn group_offsets(count: usize, group_width: f64) -> Vec<f64> {
    if count == 0 {
        return Vec::new();
    }
    let bar_width = group_width / count as f64;
    (0..count)
        .map(|i| (i as f64 - (count as f64 - 1.0) / 2.0) * bar_width)
        .collect()
}

/// Tick label for a category axis. Ticks that fall between categories stay blank.
pub fn category_label(categories: &[String], value: f64) -> String {
    let index = value.round();
    if (value - index).abs() > 1e-6 || index < 0.0 {
        return String::new();
    }
    categories.get(index as usize).cloned().unwrap_or_default()
}

fn to_points(values: &[f64]) -> PlotPoints {
    values.iter()
        .enumerate()
        .map(|(i, v)| [i as f64, *v])
        .collect::<Vec<_>>()
        .into()
}

fn category_plot(id: &str, categories: Vec<String>) -> Plot {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .legend(Legend::default())
        .include_y(0.0)
        .x_axis_formatter(move |mark: GridMark, _, _| category_label(&categories, mark.value))
}

pub fn line_chart<R: ChartRow>(ui: &mut egui::Ui, id: &str, rows: &[R], series: &[SeriesStyle]) {
    let values = columns(rows, series);
    category_plot(id, categories(rows)).show(ui, |plot_ui| {
        for (style, column) in series.iter().zip(&values) {
            plot_ui.line(Line::new(to_points(column))
                .color(style.color)
                .name(style.label)
                .width(2.0));
        }
    });
}

/// Overlapping filled areas, each reaching down to zero.
pub fn area_chart<R: ChartRow>(ui: &mut egui::Ui, id: &str, rows: &[R], series: &[SeriesStyle]) {
    let values = columns(rows, series);
    category_plot(id, categories(rows)).show(ui, |plot_ui| {
        for (style, column) in series.iter().zip(&values) {
            plot_ui.line(Line::new(to_points(column))
                .color(style.color)
                .name(style.label)
                .fill(0.0));
        }
    });
}

pub fn stacked_area_chart<R: ChartRow>(ui: &mut egui::Ui, id: &str, rows: &[R], series: &[SeriesStyle]) {
    let stacked = stack_series(&columns(rows, series));
    category_plot(id, categories(rows)).show(ui, |plot_ui| {
        // Tallest band first so the lower bands paint over its fill.
        for (style, column) in series.iter().zip(&stacked).rev() {
            plot_ui.line(Line::new(to_points(column))
                .color(style.color)
                .name(style.label)
                .fill(0.0));
        }
    });
}

/// One bar per series, side by side within each category.
pub fn grouped_bar_chart<R: ChartRow>(ui: &mut egui::Ui, id: &str, rows: &[R], series: &[SeriesStyle]) {
    let values = columns(rows, series);
    let offsets = group_offsets(series.len(), GROUP_WIDTH);
    let bar_width = GROUP_WIDTH / series.len().max(1) as f64;

    category_plot(id, categories(rows)).show(ui, |plot_ui| {
        for ((style, column), offset) in series.iter().zip(&values).zip(&offsets) {
            let bars = column.iter()
                .enumerate()
                .map(|(i, v)| Bar::new(i as f64 + offset, *v).width(bar_width))
                .collect();
            plot_ui.bar_chart(BarChart::new(bars)
                .color(style.color)
                .name(style.label));
        }
    });
}

/// Single series with categories listed top to bottom on the Y axis.
pub fn horizontal_bar_chart<R: ChartRow>(ui: &mut egui::Ui, id: &str, rows: &[R], style: &SeriesStyle) {
    let count = rows.len();
    // Reverse so the first row sits at the top.
    let labels: Vec<String> = categories(rows).into_iter().rev().collect();
    let bars = rows.iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new((count - 1 - i) as f64, row.value(style.key).unwrap_or(0.0))
                .width(0.6)
                .name(row.category())
        })
        .collect();

    Plot::new(id)
        .height(CHART_HEIGHT)
        .allow_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .show_background(false)
        .include_x(0.0)
        .y_axis_width(12)
        .y_axis_formatter(move |mark: GridMark, _, _| category_label(&labels, mark.value))
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars)
                .horizontal()
                .color(style.color)
                .name(style.label));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, f64, f64);

    impl ChartRow for Row {
        fn category(&self) -> &str {
            self.0
        }

        fn value(&self, key: &str) -> Option<f64> {
            match key {
                "a" => Some(self.1),
                "b" => Some(self.2),
                _ => None,
            }
        }
    }

    #[test]
    fn stacked_series_are_cumulative() {
        let stacked = stack_series(&[
            vec![2400.0, 2210.0],
            vec![2380.0, 2200.0],
            vec![2390.0, 2195.0],
        ]);
        assert_eq!(stacked[0], vec![2400.0, 2210.0]);
        assert_eq!(stacked[1], vec![4780.0, 4410.0]);
        assert_eq!(stacked[2], vec![7170.0, 6605.0]);
    }

    #[test]
    fn stacking_nothing_is_empty() {
        assert!(stack_series(&[]).is_empty());
    }

    #[test]
    fn group_offsets_are_centred() {
        assert_eq!(group_offsets(1, 0.8), vec![0.0]);
        let pair = group_offsets(2, 0.8);
        assert!((pair[0] + 0.2).abs() < 1e-9);
        assert!((pair[1] - 0.2).abs() < 1e-9);
        assert!(group_offsets(0, 0.8).is_empty());
    }

    #[test]
    fn category_labels_only_on_whole_ticks() {
        let cats = vec!["00:00".to_string(), "04:00".to_string()];
        assert_eq!(category_label(&cats, 0.0), "00:00");
        assert_eq!(category_label(&cats, 1.0), "04:00");
        assert_eq!(category_label(&cats, 0.5), "");
        assert_eq!(category_label(&cats, 2.0), "");
        assert_eq!(category_label(&cats, -1.0), "");
    }

    #[test]
    fn columns_follow_series_keys() {
        let rows = [Row("x", 1.0, 10.0), Row("y", 2.0, 20.0)];
        let series = [
            SeriesStyle { key: "b", label: "B", color: CHART_1 },
            SeriesStyle { key: "missing", label: "M", color: CHART_2 },
        ];
        assert_eq!(columns(&rows, &series), vec![vec![10.0, 20.0], vec![0.0, 0.0]]);
    }
}
