use std::collections::BTreeSet;

use serde::Serialize;

use super::model::{Dataset, ImportExport, TradeRecord};

/// Rows shown on the preview page when no filter is active.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Single-value choice with an "All" sentinel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Choice<T> {
    All,
    Only(T),
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Choice::All
    }
}

impl<T: PartialEq> Choice<T> {
    /// `All` accepts everything; `Only(v)` accepts `v` alone.
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Choice::All => true,
            Choice::Only(v) => v == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Choice::All)
    }
}

// ---------------------------------------------------------------------------
// Filter predicate
// ---------------------------------------------------------------------------

/// Conjunction of the three filter dimensions.
///
/// An empty `countries` set places no constraint on the country.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Predicate {
    pub countries: BTreeSet<String>,
    pub product: Choice<String>,
    pub import_export: Choice<ImportExport>,
}

impl Predicate {
    /// True when no dimension constrains anything.
    pub fn is_empty(&self) -> bool {
        self.countries.is_empty() && self.product.is_all() && self.import_export.is_all()
    }

    pub fn matches(&self, record: &TradeRecord) -> bool {
        (self.countries.is_empty() || self.countries.contains(&record.country))
            && self.product.accepts(&record.product)
            && self.import_export.accepts(&record.import_export)
    }
}

/// Return indices of rows that pass the predicate, in dataset order.
pub fn filtered_indices(dataset: &Dataset, predicate: &Predicate) -> Vec<usize> {
    dataset
        .rows
        .iter()
        .enumerate()
        .filter(|(_, row)| predicate.matches(&row.record))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Preview selection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionKind {
    /// No filter active: the leading rows of the dataset.
    FirstRows,
    /// At least one filter active.
    Filtered,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub kind: SelectionKind,
    pub indices: Vec<usize>,
}

/// The rows the preview page displays and exports.
///
/// With an empty predicate this is the first [`DEFAULT_PREVIEW_ROWS`] rows,
/// not the whole dataset.
pub fn preview_selection(dataset: &Dataset, predicate: &Predicate) -> Selection {
    if predicate.is_empty() {
        Selection {
            kind: SelectionKind::FirstRows,
            indices: (0..dataset.len().min(DEFAULT_PREVIEW_ROWS)).collect(),
        }
    } else {
        Selection {
            kind: SelectionKind::Filtered,
            indices: filtered_indices(dataset, predicate),
        }
    }
}

// ---------------------------------------------------------------------------
// Analysis page filter
// ---------------------------------------------------------------------------

/// Single-country and direction filter of the analysis page. Unlike the
/// preview, an inactive filter here means every row.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct AnalysisFilter {
    pub country: Choice<String>,
    pub import_export: Choice<ImportExport>,
}

impl AnalysisFilter {
    pub fn to_predicate(&self) -> Predicate {
        let countries = match &self.country {
            Choice::All => BTreeSet::new(),
            Choice::Only(c) => BTreeSet::from([c.clone()]),
        };
        Predicate {
            countries,
            product: Choice::All,
            import_export: self.import_export.clone(),
        }
    }
}
