use eframe::egui::{Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column, TableBuilder};

use super::plot;
use super::UiAction;
use crate::view::{Block, MetricCard, RenderPlan, Table};

// ---------------------------------------------------------------------------
// Render plan (central panel)
// ---------------------------------------------------------------------------

/// Draw a render plan. Returns the action a widget requested, if any.
pub fn show_plan(ui: &mut Ui, plan: &RenderPlan) -> Option<UiAction> {
    ui.heading(plan.title.as_str());
    ui.separator();

    let mut action = None;
    show_blocks(ui, &plan.blocks, &mut action);
    action
}

fn show_blocks(ui: &mut Ui, blocks: &[Block], action: &mut Option<UiAction>) {
    for (i, block) in blocks.iter().enumerate() {
        ui.push_id(i, |ui: &mut Ui| show_block(ui, block, action));
    }
}

fn show_block(ui: &mut Ui, block: &Block, action: &mut Option<UiAction>) {
    match block {
        Block::Heading { level: 1, text } => {
            ui.add_space(8.0);
            ui.heading(text.as_str());
        }
        Block::Heading { text, .. } => {
            ui.add_space(6.0);
            ui.label(RichText::new(text).strong().size(16.0));
        }
        Block::Paragraph { text } => {
            ui.label(text.as_str());
        }
        Block::Bullets { items } => {
            for item in items {
                ui.horizontal_wrapped(|ui: &mut Ui| {
                    ui.label("•");
                    ui.strong(item.label.as_str());
                    ui.label(format!(": {}", item.text));
                });
            }
        }
        Block::Metrics { cards } => metric_cards(ui, cards),
        Block::Table(table) => data_table(ui, table),
        Block::BarChart(chart) => plot::bar_chart(ui, chart),
        Block::Heatmap(chart) => plot::heatmap(ui, chart),
        Block::StackedBars(chart) => plot::stacked_bars(ui, chart),
        Block::Pie(chart) => plot::pie_chart(ui, chart),
        Block::Columns { columns } => {
            if columns.is_empty() {
                return;
            }
            ui.columns(columns.len(), |cols: &mut [Ui]| {
                for (i, (col_ui, blocks)) in cols.iter_mut().zip(columns).enumerate() {
                    col_ui.push_id(i, |ui: &mut Ui| show_blocks(ui, blocks, action));
                }
            });
        }
        Block::ExportAction { rows, path } => {
            ui.add_space(6.0);
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Save Filtered Data").clicked() {
                    *action = Some(UiAction::Export);
                }
                ui.label(RichText::new(format!("{rows} rows → {path}")).weak());
            });
        }
        Block::Notice { text } => {
            ui.label(RichText::new(text).color(Color32::YELLOW));
        }
    }
}

fn metric_cards(ui: &mut Ui, cards: &[MetricCard]) {
    if cards.is_empty() {
        return;
    }
    ui.columns(cards.len(), |cols: &mut [Ui]| {
        for (col_ui, card) in cols.iter_mut().zip(cards) {
            col_ui.group(|ui: &mut Ui| {
                ui.label(RichText::new(&card.label).weak());
                ui.label(RichText::new(&card.value).size(22.0).strong());
            });
        }
    });
}

// ---------------------------------------------------------------------------
// Tables
// ---------------------------------------------------------------------------

const ROW_HEIGHT: f32 = 18.0;

fn data_table(ui: &mut Ui, table: &Table) {
    if let Some(title) = &table.title {
        ui.strong(title.as_str());
    }
    let n_cols = table.header.len().max(1);

    ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .max_scroll_height(320.0)
            .columns(Column::auto().at_least(48.0), n_cols)
            .header(20.0, |mut header| {
                for h in &table.header {
                    header.col(|ui: &mut Ui| {
                        ui.strong(h.as_str());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, table.rows.len(), |mut row| {
                    let cells = &table.rows[row.index()];
                    for c in 0..n_cols {
                        row.col(|ui: &mut Ui| {
                            ui.label(cells.get(c).map(String::as_str).unwrap_or(""));
                        });
                    }
                });
            });
    });
    ui.add_space(4.0);
}
