//! Render plans: what each page shows, independent of egui.
//!
//! [`plan::render`] maps a session value and the dataset to a [`RenderPlan`].
//! The desktop UI draws plans; the `plan` subcommand prints them as JSON.

pub mod content;
pub mod figures;
pub mod plan;

use serde::Serialize;

pub use figures::FigureSource;
pub use plan::{render, ViewContext};

// ---------------------------------------------------------------------------
// Page selection
// ---------------------------------------------------------------------------

/// The flat page menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Welcome,
    Preview,
    Analysis,
    Insights,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Welcome, Page::Preview, Page::Analysis, Page::Insights];

    /// Label shown in the page selector.
    pub fn label(self) -> &'static str {
        match self {
            Page::Welcome => "Welcome Page",
            Page::Preview => "Data Preview",
            Page::Analysis => "Analysis Dashboard",
            Page::Insights => "Key Observations and Insights",
        }
    }
}

// ---------------------------------------------------------------------------
// Plan building blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub page: Page,
    pub title: String,
    pub blocks: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    /// `level` 1 is a section heading, 2 a subsection.
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Bullets { items: Vec<Bullet> },
    Metrics { cards: Vec<MetricCard> },
    Table(Table),
    BarChart(BarChart),
    Heatmap(Heatmap),
    StackedBars(StackedBars),
    Pie(PieChart),
    /// Side-by-side groups of blocks.
    Columns { columns: Vec<Vec<Block>> },
    /// Button writing the current selection to `path`.
    ExportAction { rows: usize, path: String },
    /// Non-fatal problem met while building the plan.
    Notice { text: String },
}

impl Block {
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level,
            text: text.into(),
        }
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph { text: text.into() }
    }
}

/// A bullet with a bold lead-in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bullet {
    pub label: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    pub title: Option<String>,
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Where a chart's numbers come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// Aggregated from the session dataset.
    Live,
    /// Fixed demonstration figures, not derived from the dataset.
    Illustrative,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub y_label: String,
    pub bars: Vec<(String, f64)>,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub title: String,
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// `cells[row][column]`, NaN where no value exists.
    pub cells: Vec<Vec<f64>>,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedBars {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    /// One series per stack layer; each has one value per category.
    pub series: Vec<Series>,
    pub provenance: Provenance,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<(String, f64)>,
    pub provenance: Provenance,
}
