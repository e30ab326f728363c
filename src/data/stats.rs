//! Descriptive statistics over a subset of trade records.
//!
//! Conventions, pinned by the tests below:
//! * missing numeric cells are dropped, never counted as zero;
//! * standard deviation is the sample estimator (N-1 denominator);
//! * percentiles interpolate linearly between order statistics at
//!   `h = (n - 1) * p`;
//! * categorical helpers read the column label, so enum columns compare by
//!   their CSV spelling.

use std::collections::{BTreeSet, HashMap};

use serde::Serialize;

use super::model::{Column, TradeRecord};
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Numeric summary
// ---------------------------------------------------------------------------

/// One row of a `describe` table. Statistics are NaN when undefined.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnSummary {
    pub column: Column,
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub q50: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Describe {
    pub columns: Vec<ColumnSummary>,
}

/// Per-column count, mean, std, min, quartiles and max.
///
/// Never fails: an empty input produces `count == 0` and NaN statistics.
pub fn describe(records: &[&TradeRecord], columns: &[Column]) -> Describe {
    let columns = columns
        .iter()
        .map(|&column| {
            let values: Vec<f64> = records
                .iter()
                .filter_map(|r| r.number(column))
                .filter(|v| !v.is_nan())
                .collect();
            summarize(column, values)
        })
        .collect();
    Describe { columns }
}

fn summarize(column: Column, mut values: Vec<f64>) -> ColumnSummary {
    let count = values.len();
    if count == 0 {
        return ColumnSummary {
            column,
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            q50: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    values.sort_by(f64::total_cmp);
    let mean = values.iter().sum::<f64>() / count as f64;

    ColumnSummary {
        column,
        count,
        mean,
        std: sample_std(&values, mean),
        min: values[0],
        q25: quantile(&values, 0.25),
        q50: quantile(&values, 0.50),
        q75: quantile(&values, 0.75),
        max: values[count - 1],
    }
}

/// Sample standard deviation; NaN for fewer than two values.
pub fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let ss: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    (ss / (values.len() - 1) as f64).sqrt()
}

/// Linear-interpolation quantile of an ascending slice; NaN when empty.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let h = (sorted.len() - 1) as f64 * p.clamp(0.0, 1.0);
    let lo = h.floor() as usize;
    let hi = h.ceil() as usize;
    sorted[lo] + (h - lo as f64) * (sorted[hi] - sorted[lo])
}

// ---------------------------------------------------------------------------
// Categorical helpers
// ---------------------------------------------------------------------------

/// Frequency and first row position of each label.
fn tally<'a>(records: &[&'a TradeRecord], column: Column) -> HashMap<&'a str, (usize, usize)> {
    let mut freq: HashMap<&'a str, (usize, usize)> = HashMap::new();
    for (pos, label) in records
        .iter()
        .copied()
        .enumerate()
        .filter_map(|(i, r)| r.text(column).map(|t| (i, t)))
    {
        freq.entry(label).or_insert((0, pos)).0 += 1;
    }
    freq
}

/// Most frequent label. Among equally frequent labels, the one seen first in
/// row order wins.
pub fn mode(records: &[&TradeRecord], column: Column) -> Result<String> {
    tally(records, column)
        .into_iter()
        .max_by(|(_, (ca, fa)), (_, (cb, fb))| ca.cmp(cb).then(fb.cmp(fa)))
        .map(|(label, _)| label.to_string())
        .ok_or(DashboardError::EmptySet {
            operation: "mode",
            column,
        })
}

/// Labels with their counts, most frequent first, ties in row order.
pub fn value_counts(records: &[&TradeRecord], column: Column) -> Vec<(String, usize)> {
    let mut counts: Vec<(&str, (usize, usize))> = tally(records, column).into_iter().collect();
    counts.sort_by(|(_, (ca, fa)), (_, (cb, fb))| cb.cmp(ca).then(fa.cmp(fb)));
    counts
        .into_iter()
        .map(|(label, (count, _))| (label.to_string(), count))
        .collect()
}

pub fn unique_count(records: &[&TradeRecord], column: Column) -> usize {
    records
        .iter()
        .filter_map(|r| r.text(column))
        .collect::<BTreeSet<_>>()
        .len()
}

/// Lexicographically smallest label.
pub fn min(records: &[&TradeRecord], column: Column) -> Result<String> {
    records
        .iter()
        .filter_map(|r| r.text(column))
        .min()
        .map(str::to_string)
        .ok_or(DashboardError::EmptySet {
            operation: "min",
            column,
        })
}

/// Lexicographically largest label.
pub fn max(records: &[&TradeRecord], column: Column) -> Result<String> {
    records
        .iter()
        .filter_map(|r| r.text(column))
        .max()
        .map(str::to_string)
        .ok_or(DashboardError::EmptySet {
            operation: "max",
            column,
        })
}

// ---------------------------------------------------------------------------
// Group-by aggregates
// ---------------------------------------------------------------------------

/// How each cell of a [`Pivot`] is reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregate {
    /// Number of rows in the cell.
    Count,
    /// Largest present value of a numeric column; NaN for an empty cell.
    Max(Column),
}

/// A two-way table keyed by sorted labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pivot {
    pub rows: Vec<String>,
    pub columns: Vec<String>,
    /// `cells[row][column]`
    pub cells: Vec<Vec<f64>>,
}

pub fn pivot(records: &[&TradeRecord], row: Column, column: Column, agg: Aggregate) -> Pivot {
    let rows: Vec<String> = labels(records, row);
    let columns: Vec<String> = labels(records, column);

    let init = match agg {
        Aggregate::Count => 0.0,
        Aggregate::Max(_) => f64::NAN,
    };
    let mut cells = vec![vec![init; columns.len()]; rows.len()];

    for r in records {
        let (Some(rl), Some(cl)) = (r.text(row), r.text(column)) else {
            continue;
        };
        let (Ok(ri), Ok(ci)) = (
            rows.binary_search_by(|x| x.as_str().cmp(rl)),
            columns.binary_search_by(|x| x.as_str().cmp(cl)),
        ) else {
            continue;
        };
        let cell = &mut cells[ri][ci];
        match agg {
            Aggregate::Count => *cell += 1.0,
            Aggregate::Max(value_col) => {
                if let Some(v) = r.number(value_col).filter(|v| !v.is_nan()) {
                    *cell = if cell.is_nan() { v } else { cell.max(v) };
                }
            }
        }
    }

    Pivot {
        rows,
        columns,
        cells,
    }
}

/// Sum of a numeric column per label, largest total first.
pub fn sum_by(records: &[&TradeRecord], group: Column, value: Column) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for r in records {
        if let Some(label) = r.text(group) {
            *totals.entry(label).or_insert(0.0) += r.number(value).filter(|v| !v.is_nan()).unwrap_or(0.0);
        }
    }
    let mut totals: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(label, total)| (label.to_string(), total))
        .collect();
    totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    totals
}

fn labels(records: &[&TradeRecord], column: Column) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.text(column))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ImportExport, PaymentTerms, ShippingMethod};

    fn rec(product: &str, category: &str, quantity: Option<f64>) -> TradeRecord {
        TradeRecord {
            country: "Peru".into(),
            product: product.into(),
            import_export: ImportExport::Import,
            category: category.into(),
            port: "P".into(),
            shipping_method: ShippingMethod::Land,
            supplier: "S".into(),
            customer: "C".into(),
            payment_terms: PaymentTerms::Net60,
            quantity,
            value: quantity.map(|q| q * 10.0),
            weight: Some(2.0),
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn describe_uses_sample_std_and_linear_quantiles() {
        let data: Vec<TradeRecord> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&q| rec("p", "c", Some(q)))
            .collect();
        let refs: Vec<&TradeRecord> = data.iter().collect();
        let d = describe(&refs, &[Column::Quantity]);
        let s = &d.columns[0];
        assert_eq!(s.count, 4);
        assert!(approx(s.mean, 2.5));
        assert!(approx(s.std, 1.290_994_448_735_805_6));
        assert!(approx(s.q25, 1.75));
        assert!(approx(s.q50, 2.5));
        assert!(approx(s.q75, 3.25));
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 4.0);
    }

    #[test]
    fn describe_drops_missing_values() {
        let data = vec![rec("p", "c", Some(5.0)), rec("p", "c", None), rec("p", "c", Some(7.0))];
        let refs: Vec<&TradeRecord> = data.iter().collect();
        let s = &describe(&refs, &[Column::Quantity]).columns[0];
        assert_eq!(s.count, 2);
        assert!(approx(s.mean, 6.0));
    }

    #[test]
    fn describe_of_empty_set_is_zero_count_nan() {
        let d = describe(&[], &Column::NUMERIC);
        assert_eq!(d.columns.len(), 3);
        for s in &d.columns {
            assert_eq!(s.count, 0);
            assert!(s.mean.is_nan() && s.std.is_nan() && s.q50.is_nan() && s.max.is_nan());
        }
    }

    #[test]
    fn single_value_has_undefined_std() {
        let data = [rec("p", "c", Some(9.0))];
        let refs: Vec<&TradeRecord> = data.iter().collect();
        let s = &describe(&refs, &[Column::Quantity]).columns[0];
        assert_eq!(s.count, 1);
        assert!(s.std.is_nan());
        assert_eq!(s.q25, 9.0);
    }

    #[test]
    fn mode_breaks_ties_by_first_occurrence() {
        let data: Vec<TradeRecord> = ["rope", "bag", "bag", "rope", "lamp"]
            .iter()
            .map(|p| rec(p, "c", Some(1.0)))
            .collect();
        let refs: Vec<&TradeRecord> = data.iter().collect();
        for _ in 0..20 {
            assert_eq!(mode(&refs, Column::Product).unwrap(), "rope");
        }
        let reordered: Vec<&TradeRecord> = vec![&data[1], &data[0], &data[2], &data[3]];
        assert_eq!(mode(&reordered, Column::Product).unwrap(), "bag");
    }

    #[test]
    fn mode_prefers_higher_frequency_over_position() {
        let data: Vec<TradeRecord> = ["rope", "bag", "bag"]
            .iter()
            .map(|p| rec(p, "c", Some(1.0)))
            .collect();
        let refs: Vec<&TradeRecord> = data.iter().collect();
        assert_eq!(mode(&refs, Column::Product).unwrap(), "bag");
    }

    #[test]
    fn empty_set_aggregates_fail() {
        assert!(matches!(
            mode(&[], Column::Product),
            Err(DashboardError::EmptySet { operation: "mode", .. })
        ));
        assert!(matches!(min(&[], Column::Port), Err(DashboardError::EmptySet { .. })));
        assert!(matches!(max(&[], Column::Port), Err(DashboardError::EmptySet { .. })));
    }

    #[test]
    fn min_max_are_lexicographic() {
        let data: Vec<TradeRecord> = ["pear", "Zebra", "apple"]
            .iter()
            .map(|p| rec(p, "c", Some(1.0)))
            .collect();
        let refs: Vec<&TradeRecord> = data.iter().collect();
        assert_eq!(min(&refs, Column::Product).unwrap(), "Zebra");
        assert_eq!(max(&refs, Column::Product).unwrap(), "pear");
        assert_eq!(min(&refs, Column::PaymentTerms).unwrap(), "Net 60");
    }

    #[test]
    fn blank_labels_are_missing() {
        let mut data: Vec<TradeRecord> = (0..3).map(|_| rec("p", "c", Some(1.0))).collect();
        data[0].port = String::new();
        data[1].port = String::new();
        data[2].port = "Lima".into();
        let refs: Vec<&TradeRecord> = data.iter().collect();

        assert_eq!(min(&refs, Column::Port).unwrap(), "Lima");
        assert_eq!(max(&refs, Column::Port).unwrap(), "Lima");
        assert_eq!(unique_count(&refs, Column::Port), 1);
        assert_eq!(mode(&refs, Column::Port).unwrap(), "Lima");
        assert_eq!(value_counts(&refs, Column::Port), vec![("Lima".to_string(), 1)]);

        let blanks = &refs[..2];
        assert!(matches!(min(blanks, Column::Port), Err(DashboardError::EmptySet { .. })));
        assert_eq!(unique_count(blanks, Column::Port), 0);
    }

    #[test]
    fn unique_count_and_value_counts() {
        let data: Vec<TradeRecord> = ["b", "a", "b", "c", "a", "b"]
            .iter()
            .map(|p| rec(p, "c", Some(1.0)))
            .collect();
        let refs: Vec<&TradeRecord> = data.iter().collect();
        assert_eq!(unique_count(&refs, Column::Product), 3);
        assert_eq!(
            value_counts(&refs, Column::Product),
            vec![("b".to_string(), 3), ("a".to_string(), 2), ("c".to_string(), 1)]
        );
    }

    #[test]
    fn pivot_counts_and_maxima() {
        let data = vec![
            rec("p", "Toys", Some(1.0)),
            rec("q", "Toys", Some(4.0)),
            rec("p", "Clothing", None),
        ];
        let refs: Vec<&TradeRecord> = data.iter().collect();

        let counts = pivot(&refs, Column::Category, Column::Product, Aggregate::Count);
        assert_eq!(counts.rows, vec!["Clothing", "Toys"]);
        assert_eq!(counts.columns, vec!["p", "q"]);
        assert_eq!(counts.cells, vec![vec![1.0, 0.0], vec![1.0, 1.0]]);

        let maxima = pivot(&refs, Column::Category, Column::Product, Aggregate::Max(Column::Quantity));
        assert!(maxima.cells[0][0].is_nan());
        assert_eq!(maxima.cells[1][1], 4.0);
    }

    #[test]
    fn sum_by_orders_largest_first() {
        let data = vec![
            rec("p", "Toys", Some(1.0)),
            rec("p", "Furniture", Some(5.0)),
            rec("p", "Toys", Some(2.0)),
        ];
        let refs: Vec<&TradeRecord> = data.iter().collect();
        let totals = sum_by(&refs, Column::Category, Column::Value);
        assert_eq!(totals[0], ("Furniture".to_string(), 50.0));
        assert_eq!(totals[1], ("Toys".to_string(), 30.0));
    }
}
