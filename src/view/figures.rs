use serde::Serialize;

use super::{Heatmap, PieChart, Provenance, Series, StackedBars};
use crate::data::model::{Column, TradeRecord};
use crate::data::stats::{self, Aggregate};

/// Provider of the three auxiliary analysis charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FigureSource {
    /// Fixed demonstration figures. Always labeled as illustrative.
    #[default]
    Demo,
    /// The same charts aggregated from the session dataset.
    Live,
}

impl FigureSource {
    fn provenance(self) -> Provenance {
        match self {
            FigureSource::Demo => Provenance::Illustrative,
            FigureSource::Live => Provenance::Live,
        }
    }

    fn title(self, base: &str) -> String {
        match self {
            FigureSource::Demo => format!("{base} (illustrative)"),
            FigureSource::Live => base.to_string(),
        }
    }

    /// Maximum weight per shipping method and category.
    pub fn weight_heatmap(self, records: &[&TradeRecord]) -> Heatmap {
        let (rows, columns, cells): (Vec<String>, Vec<String>, Vec<Vec<f64>>) = match self {
            FigureSource::Demo => (
                strings(&demo::SHIPPING_METHODS),
                strings(&demo::CATEGORIES),
                demo::MAX_WEIGHT.iter().map(|r| r.to_vec()).collect(),
            ),
            FigureSource::Live => {
                let p = stats::pivot(
                    records,
                    Column::ShippingMethod,
                    Column::Category,
                    Aggregate::Max(Column::Weight),
                );
                (p.rows, p.columns, p.cells)
            }
        };
        Heatmap {
            title: self.title("Maximum Weight in KGs per Shipping Method and Category"),
            rows,
            columns,
            cells,
            provenance: self.provenance(),
        }
    }

    /// Row count per category, stacked by payment terms.
    pub fn payment_terms(self, records: &[&TradeRecord]) -> StackedBars {
        let (categories, series): (Vec<String>, Vec<Series>) = match self {
            FigureSource::Demo => (
                strings(&demo::CATEGORIES),
                demo::PAYMENT_TERMS
                    .iter()
                    .zip(demo::PAYMENT_COUNTS.iter())
                    .map(|(name, values)| Series {
                        name: name.to_string(),
                        values: values.to_vec(),
                    })
                    .collect(),
            ),
            FigureSource::Live => {
                let p = stats::pivot(records, Column::Category, Column::PaymentTerms, Aggregate::Count);
                let series = p
                    .columns
                    .iter()
                    .enumerate()
                    .map(|(ci, name)| Series {
                        name: name.clone(),
                        values: p.cells.iter().map(|row| row[ci]).collect(),
                    })
                    .collect();
                (p.rows, series)
            }
        };
        StackedBars {
            title: self.title("Count of Products by Payment Terms per Category"),
            x_label: "Category".into(),
            y_label: "Count of Products".into(),
            categories,
            series,
            provenance: self.provenance(),
        }
    }

    /// Share of total transaction value per category.
    pub fn economic_impact(self, records: &[&TradeRecord]) -> PieChart {
        let slices: Vec<(String, f64)> = match self {
            FigureSource::Demo => demo::ECONOMIC_IMPACT
                .iter()
                .map(|(label, v)| (label.to_string(), *v))
                .collect(),
            FigureSource::Live => stats::sum_by(records, Column::Category, Column::Value),
        };
        PieChart {
            title: self.title("Category Ranking by Total Economic Impact"),
            slices,
            provenance: self.provenance(),
        }
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Demonstration figures. These are fixed constants and do not change with
/// the loaded dataset.
mod demo {
    pub const SHIPPING_METHODS: [&str; 3] = ["Air", "Land", "Sea"];
    pub const CATEGORIES: [&str; 5] = ["Clothing", "Electronics", "Furniture", "Machinery", "Toys"];
    pub const PAYMENT_TERMS: [&str; 4] = ["Cash on Delivery", "Net 30", "Net 60", "Prepaid"];

    /// Rows follow `SHIPPING_METHODS`, columns follow `CATEGORIES`.
    pub const MAX_WEIGHT: [[f64; 5]; 3] = [
        [4988.04, 4996.43, 4979.17, 4987.92, 4999.93],
        [4994.90, 4990.74, 4932.57, 4985.67, 4989.29],
        [4982.45, 4990.24, 4970.20, 4996.15, 4995.70],
    ];

    /// One row per payment term, one value per category.
    pub const PAYMENT_COUNTS: [[f64; 5]; 4] = [
        [168.0, 149.0, 171.0, 168.0, 130.0],
        [134.0, 146.0, 144.0, 123.0, 144.0],
        [158.0, 145.0, 141.0, 165.0, 145.0],
        [167.0, 144.0, 159.0, 149.0, 151.0],
    ];

    pub const ECONOMIC_IMPACT: [(&str, f64); 5] = [
        ("Clothing", 3_158_986.65),
        ("Furniture", 3_072_763.57),
        ("Machinery", 3_014_336.55),
        ("Electronics", 2_956_832.00),
        ("Toys", 2_780_069.80),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{ImportExport, PaymentTerms, ShippingMethod};

    fn rec(category: &str, shipping: ShippingMethod, terms: PaymentTerms, weight: f64) -> TradeRecord {
        TradeRecord {
            country: "Peru".into(),
            product: "p".into(),
            import_export: ImportExport::Import,
            category: category.into(),
            port: "P".into(),
            shipping_method: shipping,
            supplier: "S".into(),
            customer: "C".into(),
            payment_terms: terms,
            quantity: Some(1.0),
            value: Some(weight * 2.0),
            weight: Some(weight),
        }
    }

    #[test]
    fn demo_figures_ignore_the_dataset_and_are_labeled() {
        let heat = FigureSource::Demo.weight_heatmap(&[]);
        assert_eq!(heat.provenance, Provenance::Illustrative);
        assert!(heat.title.contains("illustrative"));
        assert_eq!(heat.rows, vec!["Air", "Land", "Sea"]);
        assert_eq!(heat.cells[1][2], 4932.57);

        let stacked = FigureSource::Demo.payment_terms(&[]);
        assert_eq!(stacked.series.len(), 4);
        assert_eq!(stacked.series[0].values[0], 168.0);
    }

    #[test]
    fn live_figures_aggregate_the_records() {
        let data = vec![
            rec("Toys", ShippingMethod::Air, PaymentTerms::Prepaid, 10.0),
            rec("Toys", ShippingMethod::Air, PaymentTerms::Net30, 30.0),
            rec("Clothing", ShippingMethod::Sea, PaymentTerms::Prepaid, 5.0),
        ];
        let refs: Vec<&TradeRecord> = data.iter().collect();

        let heat = FigureSource::Live.weight_heatmap(&refs);
        assert_eq!(heat.provenance, Provenance::Live);
        assert_eq!(heat.rows, vec!["Air", "Sea"]);
        assert_eq!(heat.columns, vec!["Clothing", "Toys"]);
        assert_eq!(heat.cells[0][1], 30.0);
        assert!(heat.cells[0][0].is_nan());

        let stacked = FigureSource::Live.payment_terms(&refs);
        assert_eq!(stacked.categories, vec!["Clothing", "Toys"]);
        let prepaid = stacked.series.iter().find(|s| s.name == "Prepaid").unwrap();
        assert_eq!(prepaid.values, vec![1.0, 1.0]);

        let pie = FigureSource::Live.economic_impact(&refs);
        assert_eq!(pie.slices[0], ("Toys".to_string(), 80.0));
    }
}
