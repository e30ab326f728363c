use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Enumerated columns
// ---------------------------------------------------------------------------

/// Direction of a trade transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ImportExport {
    Import,
    Export,
}

impl ImportExport {
    pub const ALL: [ImportExport; 2] = [ImportExport::Import, ImportExport::Export];

    pub fn label(self) -> &'static str {
        match self {
            ImportExport::Import => "Import",
            ImportExport::Export => "Export",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShippingMethod {
    Air,
    Land,
    Sea,
}

impl ShippingMethod {
    pub const ALL: [ShippingMethod; 3] = [ShippingMethod::Air, ShippingMethod::Land, ShippingMethod::Sea];

    pub fn label(self) -> &'static str {
        match self {
            ShippingMethod::Air => "Air",
            ShippingMethod::Land => "Land",
            ShippingMethod::Sea => "Sea",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PaymentTerms {
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
    #[serde(rename = "Net 30")]
    Net30,
    #[serde(rename = "Net 60")]
    Net60,
    Prepaid,
}

impl PaymentTerms {
    pub const ALL: [PaymentTerms; 4] = [
        PaymentTerms::CashOnDelivery,
        PaymentTerms::Net30,
        PaymentTerms::Net60,
        PaymentTerms::Prepaid,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PaymentTerms::CashOnDelivery => "Cash on Delivery",
            PaymentTerms::Net30 => "Net 30",
            PaymentTerms::Net60 => "Net 60",
            PaymentTerms::Prepaid => "Prepaid",
        }
    }
}

// ---------------------------------------------------------------------------
// Column – a named, typed column of the trade table
// ---------------------------------------------------------------------------

/// The twelve columns the dashboard understands. Any other column in the
/// source file is carried through untouched but never interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Column {
    Country,
    Product,
    ImportExport,
    Category,
    Port,
    ShippingMethod,
    Supplier,
    Customer,
    PaymentTerms,
    Quantity,
    Value,
    Weight,
}

impl Column {
    pub const CATEGORICAL: [Column; 9] = [
        Column::Country,
        Column::Product,
        Column::ImportExport,
        Column::Category,
        Column::Port,
        Column::ShippingMethod,
        Column::Supplier,
        Column::Customer,
        Column::PaymentTerms,
    ];

    pub const NUMERIC: [Column; 3] = [Column::Quantity, Column::Value, Column::Weight];

    /// Header name in the CSV file.
    pub fn header(self) -> &'static str {
        match self {
            Column::Country => "Country",
            Column::Product => "Product",
            Column::ImportExport => "Import_Export",
            Column::Category => "Category",
            Column::Port => "Port",
            Column::ShippingMethod => "Shipping_Method",
            Column::Supplier => "Supplier",
            Column::Customer => "Customer",
            Column::PaymentTerms => "Payment_Terms",
            Column::Quantity => "Quantity",
            Column::Value => "Value",
            Column::Weight => "Weight",
        }
    }

    pub fn all() -> impl Iterator<Item = Column> {
        Self::CATEGORICAL.into_iter().chain(Self::NUMERIC)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header())
    }
}

// ---------------------------------------------------------------------------
// TradeRecord – one typed row
// ---------------------------------------------------------------------------

/// One trade transaction. Numeric cells may be empty in the source and are
/// then `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Import_Export")]
    pub import_export: ImportExport,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Port")]
    pub port: String,
    #[serde(rename = "Shipping_Method")]
    pub shipping_method: ShippingMethod,
    #[serde(rename = "Supplier")]
    pub supplier: String,
    #[serde(rename = "Customer")]
    pub customer: String,
    #[serde(rename = "Payment_Terms")]
    pub payment_terms: PaymentTerms,
    #[serde(rename = "Quantity")]
    pub quantity: Option<f64>,
    #[serde(rename = "Value")]
    pub value: Option<f64>,
    #[serde(rename = "Weight")]
    pub weight: Option<f64>,
}

impl TradeRecord {
    /// Label of a categorical column. `None` for numeric columns and for
    /// blank cells.
    pub fn text(&self, column: Column) -> Option<&str> {
        let s = match column {
            Column::Country => self.country.as_str(),
            Column::Product => self.product.as_str(),
            Column::ImportExport => self.import_export.label(),
            Column::Category => self.category.as_str(),
            Column::Port => self.port.as_str(),
            Column::ShippingMethod => self.shipping_method.label(),
            Column::Supplier => self.supplier.as_str(),
            Column::Customer => self.customer.as_str(),
            Column::PaymentTerms => self.payment_terms.label(),
            Column::Quantity | Column::Value | Column::Weight => return None,
        };
        Some(s).filter(|s| !s.is_empty())
    }

    /// Value of a numeric column; `None` if missing or not numeric.
    pub fn number(&self, column: Column) -> Option<f64> {
        match column {
            Column::Quantity => self.quantity,
            Column::Value => self.value,
            Column::Weight => self.weight,
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Row / Dataset
// ---------------------------------------------------------------------------

/// A typed record plus the raw cells it was parsed from, in header order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub record: TradeRecord,
    pub fields: Vec<String>,
}

/// The session's sampled dataset. Built once by the loader and only read
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    /// Header row of the source file, including uninterpreted columns.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Dataset { headers, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All records in dataset order.
    pub fn records(&self) -> Vec<&TradeRecord> {
        self.rows.iter().map(|r| &r.record).collect()
    }

    /// Records at `indices`, in the order given. Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Vec<&TradeRecord> {
        indices
            .iter()
            .filter_map(|&i| self.rows.get(i))
            .map(|r| &r.record)
            .collect()
    }

    /// Distinct labels of a categorical column in order of first appearance.
    pub fn distinct(&self, column: Column) -> Vec<String> {
        let mut seen = HashSet::new();
        self.rows
            .iter()
            .filter_map(|r| r.record.text(column))
            .filter(|v| seen.insert(*v))
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, product: &str) -> TradeRecord {
        TradeRecord {
            country: country.into(),
            product: product.into(),
            import_export: ImportExport::Export,
            category: "Toys".into(),
            port: "Port A".into(),
            shipping_method: ShippingMethod::Sea,
            supplier: "Acme".into(),
            customer: "Zed".into(),
            payment_terms: PaymentTerms::Net30,
            quantity: Some(3.0),
            value: None,
            weight: Some(1.5),
        }
    }

    #[test]
    fn enum_columns_expose_csv_labels() {
        let r = record("India", "item");
        assert_eq!(r.text(Column::ImportExport), Some("Export"));
        assert_eq!(r.text(Column::ShippingMethod), Some("Sea"));
        assert_eq!(r.text(Column::PaymentTerms), Some("Net 30"));
        assert_eq!(r.text(Column::Quantity), None);
    }

    #[test]
    fn blank_label_reads_as_missing() {
        let mut r = record("India", "item");
        r.port = String::new();
        assert_eq!(r.text(Column::Port), None);
        assert_eq!(r.text(Column::Country), Some("India"));
    }

    #[test]
    fn numeric_accessor_reports_missing_values() {
        let r = record("India", "item");
        assert_eq!(r.number(Column::Quantity), Some(3.0));
        assert_eq!(r.number(Column::Value), None);
        assert_eq!(r.number(Column::Country), None);
    }

    #[test]
    fn distinct_keeps_first_appearance_order() {
        let rows = ["Peru", "Chad", "Peru", "Oman", "Chad"]
            .iter()
            .map(|c| Row {
                record: record(c, "p"),
                fields: Vec::new(),
            })
            .collect();
        let ds = Dataset::new(Vec::new(), rows);
        assert_eq!(ds.distinct(Column::Country), vec!["Peru", "Chad", "Oman"]);
    }

    #[test]
    fn select_skips_out_of_range_indices() {
        let rows = vec![Row {
            record: record("Peru", "p"),
            fields: Vec::new(),
        }];
        let ds = Dataset::new(Vec::new(), rows);
        assert_eq!(ds.select(&[0, 5]).len(), 1);
    }
}
