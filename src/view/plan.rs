use std::path::PathBuf;

use super::{content, BarChart, Block, FigureSource, MetricCard, Page, Provenance, RenderPlan, Table};
use crate::data::export::DEFAULT_EXPORT_PATH;
use crate::data::filter::{filtered_indices, preview_selection, AnalysisFilter, Choice, Predicate, SelectionKind};
use crate::data::model::{Column, Dataset};
use crate::data::stats::{self, Describe};
use crate::error::Result;
use crate::state::SessionState;

/// Number of bars in the country frequency chart.
const TOP_COUNTRIES: usize = 5;

/// Everything a plan needs besides the session and the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewContext {
    pub figures: FigureSource,
    pub export_path: PathBuf,
}

impl Default for ViewContext {
    fn default() -> Self {
        ViewContext {
            figures: FigureSource::default(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

// ---------------------------------------------------------------------------
// Page dispatch
// ---------------------------------------------------------------------------

/// Build the plan for the session's current page.
pub fn render(session: &SessionState, dataset: &Dataset, ctx: &ViewContext) -> RenderPlan {
    let page = session.page;
    let (title, blocks) = match page {
        Page::Welcome => ("Welcome to the Imports/Exports Dashboard", content::welcome()),
        Page::Preview => ("Data Preview Dashboard", preview(dataset, &session.preview, ctx)),
        Page::Analysis => (
            "Comprehensive Analysis Dashboard",
            analysis(dataset, &session.analysis, ctx),
        ),
        Page::Insights => ("Key Observations and Insights", content::insights()),
    };
    RenderPlan {
        page,
        title: title.to_string(),
        blocks,
    }
}

// ---------------------------------------------------------------------------
// Preview page
// ---------------------------------------------------------------------------

fn preview(dataset: &Dataset, predicate: &Predicate, ctx: &ViewContext) -> Vec<Block> {
    let selection = preview_selection(dataset, predicate);
    let n = selection.indices.len();
    let mut blocks = Vec::new();

    let heading = match selection.kind {
        SelectionKind::FirstRows => format!("First {n} Rows of Data"),
        SelectionKind::Filtered => format!("Filtered Data ({n} rows)"),
    };
    blocks.push(Block::heading(2, heading));
    if n == 0 {
        blocks.push(Block::Notice {
            text: "No rows match the current filters.".into(),
        });
    }

    blocks.push(Block::Table(Table {
        title: None,
        header: dataset.headers.clone(),
        rows: selection
            .indices
            .iter()
            .filter_map(|&i| dataset.rows.get(i))
            .map(|row| row.fields.clone())
            .collect(),
    }));

    blocks.push(Block::heading(2, "Summary Statistics"));
    let records = dataset.select(&selection.indices);
    blocks.push(Block::Table(describe_table(&stats::describe(&records, &Column::NUMERIC))));

    blocks.push(Block::ExportAction {
        rows: n,
        path: ctx.export_path.display().to_string(),
    });
    blocks
}

fn describe_table(describe: &Describe) -> Table {
    let header = ["", "count", "mean", "std", "min", "25%", "50%", "75%", "max"]
        .iter()
        .map(|h| h.to_string())
        .collect();
    let rows = describe
        .columns
        .iter()
        .map(|s| {
            let mut row = vec![s.column.header().to_string(), s.count.to_string()];
            row.extend([s.mean, s.std, s.min, s.q25, s.q50, s.q75, s.max].map(format_stat));
            row
        })
        .collect();
    Table {
        title: None,
        header,
        rows,
    }
}

fn format_stat(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else {
        format!("{v:.2}")
    }
}

// ---------------------------------------------------------------------------
// Analysis page
// ---------------------------------------------------------------------------

fn analysis(dataset: &Dataset, filter: &AnalysisFilter, ctx: &ViewContext) -> Vec<Block> {
    let all = dataset.records();
    let mut notices: Vec<String> = Vec::new();
    let mut or_na = |value: Result<String>| {
        value.unwrap_or_else(|e| {
            notices.push(e.to_string());
            "n/a".to_string()
        })
    };

    let cards = vec![
        card("Total Records", all.len().to_string()),
        card("Unique Products", stats::unique_count(&all, Column::Product).to_string()),
        card("Unique Countries", stats::unique_count(&all, Column::Country).to_string()),
        card(
            "Most Used Shipping Method",
            or_na(stats::mode(&all, Column::ShippingMethod)),
        ),
        card("Top Product", or_na(stats::mode(&all, Column::Product))),
    ];

    let mut minima = Vec::new();
    let mut maxima = Vec::new();
    let mut extremes_missing = None;
    for column in Column::CATEGORICAL {
        let field = column.header().to_string();
        let (lo, hi) = match (stats::min(&all, column), stats::max(&all, column)) {
            (Ok(lo), Ok(hi)) => (lo, hi),
            (Err(e), _) | (_, Err(e)) => {
                extremes_missing.get_or_insert_with(|| e.to_string());
                ("n/a".to_string(), "n/a".to_string())
            }
        };
        minima.push(vec![field.clone(), lo]);
        maxima.push(vec![field, hi]);
    }
    if let Some(reason) = extremes_missing {
        notices.push(format!("Minimum and maximum values are unavailable: {reason}"));
    }

    let subset_idx = filtered_indices(dataset, &filter.to_predicate());
    let subset = dataset.select(&subset_idx);
    if subset.is_empty() {
        notices.push("No rows match the analysis filters.".into());
    }

    let volume = match &filter.import_export {
        Choice::All => "Total",
        Choice::Only(dir) => dir.label(),
    };
    let top_countries = BarChart {
        title: format!("Top {TOP_COUNTRIES} Countries by {volume} Volume"),
        y_label: "Volume".into(),
        bars: stats::value_counts(&subset, Column::Country)
            .into_iter()
            .take(TOP_COUNTRIES)
            .map(|(country, count)| (country, count as f64))
            .collect(),
        provenance: Provenance::Live,
    };

    let mut blocks: Vec<Block> = notices.into_iter().map(|text| Block::Notice { text }).collect();
    blocks.push(Block::Metrics { cards });
    blocks.push(Block::heading(2, "Data Visualizations"));
    blocks.push(Block::Columns {
        columns: vec![
            vec![Block::BarChart(top_countries)],
            vec![Block::Heatmap(ctx.figures.weight_heatmap(&all))],
        ],
    });
    blocks.push(Block::Columns {
        columns: vec![
            vec![Block::StackedBars(ctx.figures.payment_terms(&all))],
            vec![Block::Pie(ctx.figures.economic_impact(&all))],
        ],
    });
    blocks.push(Block::heading(2, "Minimum and Maximum Values"));
    blocks.push(Block::Columns {
        columns: vec![
            vec![Block::Table(Table {
                title: Some("Minimum Values".into()),
                header: vec!["Field".into(), "Minimum Value".into()],
                rows: minima,
            })],
            vec![Block::Table(Table {
                title: Some("Maximum Values".into()),
                header: vec!["Field".into(), "Maximum Value".into()],
                rows: maxima,
            })],
        ],
    });
    blocks
}

fn card(label: &str, value: String) -> MetricCard {
    MetricCard {
        label: label.to_string(),
        value,
    }
}
