/// egui drawing of render plans and filter widgets.
pub mod pages;
pub mod panels;
pub mod plot;

/// Commands raised by widgets and handled by the app after drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiAction {
    Export,
}
