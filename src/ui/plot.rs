use std::f64::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, RichText, Stroke, Ui};
use egui_plot::{Bar, BarChart as PlotBars, Legend, Plot, PlotPoint, PlotPoints, Polygon, Text};

use crate::color::{heat_color, series_color};
use crate::view::{self, Provenance};

const CHART_HEIGHT: f32 = 240.0;

fn chart_title(ui: &mut Ui, title: &str, provenance: Provenance) {
    ui.strong(title);
    if provenance == Provenance::Illustrative {
        ui.label(
            RichText::new("Illustrative figures, not computed from the loaded dataset")
                .italics()
                .weak(),
        );
    }
}

// ---------------------------------------------------------------------------
// Bar chart
// ---------------------------------------------------------------------------

pub fn bar_chart(ui: &mut Ui, chart: &view::BarChart) {
    chart_title(ui, &chart.title, chart.provenance);
    if chart.bars.is_empty() {
        ui.label(RichText::new("No data").weak());
        return;
    }

    let n = chart.bars.len();
    let bars: Vec<Bar> = chart
        .bars
        .iter()
        .enumerate()
        .map(|(i, (label, value))| {
            Bar::new(i as f64, *value)
                .name(label)
                .fill(series_color(i, n))
                .width(0.6)
        })
        .collect();

    Plot::new("bar_chart")
        .height(CHART_HEIGHT)
        .y_axis_label(chart.y_label.as_str())
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(PlotBars::new(bars));
            for (i, (label, _)) in chart.bars.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(i as f64, 0.0), label.as_str())
                        .anchor(Align2::CENTER_TOP),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Stacked bars
// ---------------------------------------------------------------------------

pub fn stacked_bars(ui: &mut Ui, chart: &view::StackedBars) {
    chart_title(ui, &chart.title, chart.provenance);

    let n = chart.series.len();
    let mut layers: Vec<PlotBars> = Vec::with_capacity(n);
    for (si, series) in chart.series.iter().enumerate() {
        let bars: Vec<Bar> = series
            .values
            .iter()
            .enumerate()
            .map(|(ci, v)| {
                let category = chart.categories.get(ci).map(String::as_str).unwrap_or("");
                Bar::new(ci as f64, *v).name(category).width(0.6)
            })
            .collect();
        let below: Vec<&PlotBars> = layers.iter().collect();
        let layer = PlotBars::new(bars)
            .name(&series.name)
            .color(series_color(si, n))
            .stack_on(&below);
        layers.push(layer);
    }

    Plot::new("stacked_bars")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.as_str())
        .y_axis_label(chart.y_label.as_str())
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for layer in layers {
                plot_ui.bar_chart(layer);
            }
            for (ci, category) in chart.categories.iter().enumerate() {
                plot_ui.text(
                    Text::new(PlotPoint::new(ci as f64, 0.0), category.as_str())
                        .anchor(Align2::CENTER_TOP),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Largest angle drawn as one polygon, so every piece stays convex.
const MAX_PIECE: f64 = FRAC_PI_2;

pub fn pie_chart(ui: &mut Ui, chart: &view::PieChart) {
    chart_title(ui, &chart.title, chart.provenance);

    let total: f64 = chart.slices.iter().map(|(_, v)| v.max(0.0)).sum();
    if total <= 0.0 {
        ui.label(RichText::new("No data").weak());
        return;
    }

    let n = chart.slices.len();
    Plot::new("pie_chart")
        .height(CHART_HEIGHT)
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            // Counter-clockwise from twelve o'clock.
            let mut start = FRAC_PI_2;
            for (i, (label, value)) in chart.slices.iter().enumerate() {
                let sweep = value.max(0.0) / total * TAU;
                let name = format!("{label} ({:.1}%)", value / total * 100.0);
                let color = series_color(i, n);

                let pieces = (sweep / MAX_PIECE).ceil().max(1.0) as usize;
                for p in 0..pieces {
                    let a0 = start + sweep * p as f64 / pieces as f64;
                    let a1 = start + sweep * (p + 1) as f64 / pieces as f64;
                    plot_ui.polygon(
                        Polygon::new(PlotPoints::new(wedge(a0, a1)))
                            .name(&name)
                            .fill_color(color)
                            .stroke(Stroke::new(1.0, Color32::WHITE)),
                    );
                }
                start += sweep;
            }
        });
}

fn wedge(a0: f64, a1: f64) -> Vec<[f64; 2]> {
    const STEPS: usize = 16;
    let mut points = vec![[0.0, 0.0]];
    points.extend((0..=STEPS).map(|k| {
        let a = a0 + (a1 - a0) * k as f64 / STEPS as f64;
        [a.cos(), a.sin()]
    }));
    points
}

// ---------------------------------------------------------------------------
// Heatmap
// ---------------------------------------------------------------------------

pub fn heatmap(ui: &mut Ui, chart: &view::Heatmap) {
    chart_title(ui, &chart.title, chart.provenance);

    let finite = chart.cells.iter().flatten().copied().filter(|v| v.is_finite());
    let (min, max) = finite.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    egui::Grid::new("heatmap")
        .spacing([6.0, 4.0])
        .show(ui, |ui: &mut Ui| {
            ui.label("");
            for column in &chart.columns {
                ui.strong(column.as_str());
            }
            ui.end_row();

            for (ri, row) in chart.rows.iter().enumerate() {
                ui.strong(row.as_str());
                for ci in 0..chart.columns.len() {
                    let v = chart
                        .cells
                        .get(ri)
                        .and_then(|r| r.get(ci))
                        .copied()
                        .unwrap_or(f64::NAN);
                    let text = if v.is_nan() {
                        "-".to_string()
                    } else {
                        format!("{v:.2}")
                    };
                    ui.label(
                        RichText::new(text)
                            .monospace()
                            .color(Color32::WHITE)
                            .background_color(heat_color(v, min, max)),
                    );
                }
                ui.end_row();
            }
        });
}
