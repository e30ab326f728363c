use crate::data::export::{export_csv, resolve_export_path};
use crate::data::filter::{preview_selection, AnalysisFilter, Choice, Predicate};
use crate::data::model::{Column, Dataset, ImportExport};
use crate::view::{render, Page, RenderPlan, ViewContext};

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// What the user has selected. A plain value: every interaction produces a
/// new one, and the render plan is rebuilt from it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    pub page: Page,
    /// Filters of the preview page.
    pub preview: Predicate,
    /// Filters of the analysis page.
    pub analysis: AnalysisFilter,
}

impl SessionState {
    pub fn with_page(&self, page: Page) -> Self {
        SessionState {
            page,
            ..self.clone()
        }
    }

    /// Add the country to the preview filter, or remove it if present.
    pub fn with_country_toggled(&self, country: &str) -> Self {
        let mut next = self.clone();
        if !next.preview.countries.remove(country) {
            next.preview.countries.insert(country.to_string());
        }
        next
    }

    pub fn with_countries_cleared(&self) -> Self {
        let mut next = self.clone();
        next.preview.countries.clear();
        next
    }

    pub fn with_product(&self, product: Choice<String>) -> Self {
        let mut next = self.clone();
        next.preview.product = product;
        next
    }

    pub fn with_preview_direction(&self, direction: Choice<ImportExport>) -> Self {
        let mut next = self.clone();
        next.preview.import_export = direction;
        next
    }

    pub fn with_analysis(&self, analysis: AnalysisFilter) -> Self {
        SessionState {
            analysis,
            ..self.clone()
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Values offered by the filter widgets, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub products: Vec<String>,
}

impl FilterOptions {
    pub fn from_dataset(dataset: &Dataset) -> Self {
        FilterOptions {
            countries: dataset.distinct(Column::Country),
            products: dataset.distinct(Column::Product),
        }
    }
}

/// Outcome of the last user action, shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// The session sample. Never modified after startup.
    pub dataset: Dataset,

    pub options: FilterOptions,

    pub session: SessionState,

    /// Plan for `session`, rebuilt whenever it changes.
    pub plan: RenderPlan,

    pub context: ViewContext,

    pub status: Option<Status>,
}

impl AppState {
    pub fn new(dataset: Dataset, context: ViewContext) -> Self {
        let session = SessionState::default();
        let plan = render(&session, &dataset, &context);
        AppState {
            options: FilterOptions::from_dataset(&dataset),
            dataset,
            session,
            plan,
            context,
            status: None,
        }
    }

    /// Replace the session and rebuild the plan if anything changed.
    pub fn apply(&mut self, next: SessionState) {
        if next == self.session {
            return;
        }
        self.session = next;
        self.plan = render(&self.session, &self.dataset, &self.context);
        log::debug!(
            "Rebuilt {:?} plan with {} blocks",
            self.plan.page,
            self.plan.blocks.len()
        );
    }

    /// Write the preview selection to the configured export path.
    ///
    /// Failure is reported through `status`; the plan is left as it was.
    pub fn export_selection(&mut self) {
        let selection = preview_selection(&self.dataset, &self.session.preview);
        let path = resolve_export_path(&self.context.export_path);
        self.status = Some(match export_csv(&self.dataset, &selection.indices, &path) {
            Ok(rows) => Status::Info(format!(
                "Filtered data saved as '{}' ({rows} rows)",
                path.display()
            )),
            Err(e) => {
                log::warn!("Export failed: {e}");
                Status::Error(format!("Error: {e}"))
            }
        });
    }
}
