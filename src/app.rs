use eframe::egui::{self, ScrollArea};

use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{pages, panels, UiAction};
use crate::view::ViewContext;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TradeDashboardApp {
    pub state: AppState,
}

impl TradeDashboardApp {
    pub fn new(dataset: Dataset, context: ViewContext) -> Self {
        Self {
            state: AppState::new(dataset, context),
        }
    }
}

impl eframe::App for TradeDashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = None;

        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            action = panels::top_bar(ui, &self.state);
        });

        // ---- Left side panel: navigation + filters ----
        let next = egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &self.state.options, &self.state.session)
            })
            .inner;
        self.state.apply(next);

        // ---- Central panel: current page ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    if let Some(a) = pages::show_plan(ui, &self.state.plan) {
                        action = Some(a);
                    }
                });
        });

        if let Some(UiAction::Export) = action {
            self.state.export_selection();
        }
    }
}
