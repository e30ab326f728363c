use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use super::UiAction;
use crate::data::filter::Choice;
use crate::data::model::ImportExport;
use crate::state::{AppState, FilterOptions, SessionState, Status};
use crate::view::Page;

// ---------------------------------------------------------------------------
// Left side panel – navigation and filter widgets
// ---------------------------------------------------------------------------

/// Render the left panel and return the session the widgets ask for. Every
/// edit goes through a `SessionState` transition; the caller compares the
/// result against the current session.
pub fn side_panel(ui: &mut Ui, options: &FilterOptions, session: &SessionState) -> SessionState {
    let mut next = session.clone();

    ui.heading("Navigation");
    let mut page = session.page;
    egui::ComboBox::from_id_salt("page_select")
        .selected_text(page.label())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            for p in Page::ALL {
                ui.selectable_value(&mut page, p, p.label());
            }
        });
    if page != session.page {
        next = next.with_page(page);
    }
    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| match session.page {
            Page::Preview => next = preview_filters(ui, options, next.clone()),
            Page::Analysis => next = analysis_filters(ui, options, next.clone()),
            Page::Welcome | Page::Insights => {
                ui.label(RichText::new("No filters on this page.").weak());
            }
        });
    next
}

fn preview_filters(ui: &mut Ui, options: &FilterOptions, session: SessionState) -> SessionState {
    let mut next = session;
    ui.heading("Filters");

    // ---- Country multi-select (collapsible) ----
    let header_text = format!(
        "Countries  ({}/{})",
        next.preview.countries.len(),
        options.countries.len()
    );
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt("countries")
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            if ui.small_button("Clear").clicked() {
                next = next.with_countries_cleared();
            }
            for country in &options.countries {
                let mut checked = next.preview.countries.contains(country);
                if ui.checkbox(&mut checked, country.as_str()).changed() {
                    next = next.with_country_toggled(country);
                }
            }
        });
    ui.add_space(4.0);

    ui.strong("Product");
    let mut product = next.preview.product.clone();
    string_choice(ui, "product_select", &options.products, &mut product);
    if product != next.preview.product {
        next = next.with_product(product);
    }
    ui.add_space(4.0);

    ui.strong("Import/Export");
    let mut direction = next.preview.import_export.clone();
    direction_choice(ui, &mut direction);
    if direction != next.preview.import_export {
        next = next.with_preview_direction(direction);
    }
    next
}

fn analysis_filters(ui: &mut Ui, options: &FilterOptions, session: SessionState) -> SessionState {
    let mut filter = session.analysis.clone();
    ui.heading("Filters");
    ui.strong("Country");
    string_choice(ui, "analysis_country", &options.countries, &mut filter.country);
    ui.add_space(4.0);

    ui.strong("Import/Export");
    direction_choice(ui, &mut filter.import_export);

    if filter == session.analysis {
        session
    } else {
        session.with_analysis(filter)
    }
}

fn string_choice(ui: &mut Ui, id: &str, values: &[String], choice: &mut Choice<String>) {
    let selected = match choice {
        Choice::All => "All".to_string(),
        Choice::Only(v) => v.clone(),
    };
    egui::ComboBox::from_id_salt(id)
        .selected_text(selected)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(choice, Choice::All, "All");
            for v in values {
                ui.selectable_value(choice, Choice::Only(v.clone()), v.as_str());
            }
        });
}

fn direction_choice(ui: &mut Ui, choice: &mut Choice<ImportExport>) {
    ui.horizontal(|ui: &mut Ui| {
        ui.radio_value(choice, Choice::All, "All");
        for dir in ImportExport::ALL {
            ui.radio_value(choice, Choice::Only(dir), dir.label());
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &AppState) -> Option<UiAction> {
    let mut action = None;
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Save Filtered Data").clicked() {
                action = Some(UiAction::Export);
                ui.close_menu();
            }
        });

        ui.separator();
        ui.label(format!("{} records in sample", state.dataset.len()));
        ui.separator();

        match &state.status {
            Some(Status::Info(msg)) => {
                ui.label(RichText::new(msg).color(Color32::LIGHT_GREEN));
            }
            Some(Status::Error(msg)) => {
                ui.label(RichText::new(msg).color(Color32::RED));
            }
            None => {}
        }
    });
    action
}
