//! End-to-end checks over a generated source file: load and sample, filter,
//! aggregate, export and reload.

use std::collections::{BTreeSet, HashSet};
use std::io::Write;
use std::path::{Path, PathBuf};

use trade_dashboard::data::export::export_csv;
use trade_dashboard::data::filter::{filtered_indices, preview_selection, Choice, Predicate};
use trade_dashboard::data::loader::{load_dataset, read_rows, SampleSpec};
use trade_dashboard::data::model::{Column, ImportExport};
use trade_dashboard::data::stats;
use trade_dashboard::error::DashboardError;
use trade_dashboard::state::SessionState;
use trade_dashboard::view::{render, Block, Page, ViewContext};

const COUNTRIES: [&str; 6] = ["USA", "India", "Chad", "Peru", "Japan", "Oman"];
const TERMS: [&str; 4] = ["Cash on Delivery", "Net 30", "Net 60", "Prepaid"];
const SHIPPING: [&str; 3] = ["Air", "Land", "Sea"];

/// Deterministic source file with `rows` transactions.
fn write_source(dir: &Path, rows: usize) -> PathBuf {
    let path = dir.join("Imports_Exports_Dataset.csv");
    let mut file = std::io::BufWriter::new(std::fs::File::create(&path).unwrap());
    writeln!(
        file,
        "Transaction_ID,Country,Product,Import_Export,Quantity,Value,Date,Category,Port,\
         Customs_Code,Weight,Shipping_Method,Supplier,Customer,Invoice_Number,Payment_Terms"
    )
    .unwrap();
    for i in 0..rows {
        writeln!(
            file,
            "TX-{i},{},item{},{},{},{:.2},01-02-2023,Cat{},\"Port, {}\",{},{:.2},{},Sup{},Cust{},{},{}",
            COUNTRIES[(i * 7) % COUNTRIES.len()],
            (i * 13) % 17,
            if (i / COUNTRIES.len()) % 2 == 0 { "Import" } else { "Export" },
            (i * 31) % 1000,
            (i as f64 * 3.7) % 9000.0,
            i % 5,
            i % 9,
            100_000 + i,
            (i as f64 * 1.3) % 5000.0,
            SHIPPING[(i * 5) % 3],
            i % 11,
            i % 23,
            9_000_000 + i,
            TERMS[(i * 3) % 4],
        )
        .unwrap();
    }
    file.flush().unwrap();
    path
}

#[test]
fn sampling_same_source_twice_is_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 5000);
    let a = load_dataset(&path, &SampleSpec::default()).unwrap();
    let b = load_dataset(&path, &SampleSpec::default()).unwrap();
    assert_eq!(a.len(), 3001);
    assert_eq!(a, b);

    let other = load_dataset(&path, &SampleSpec { seed: 1, ..SampleSpec::default() }).unwrap();
    assert_ne!(a, other);
}

#[test]
fn sampled_rows_come_from_the_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 4000);
    let source = read_rows(&path).unwrap();
    let sample = load_dataset(&path, &SampleSpec::default()).unwrap();

    let source_ids: HashSet<&str> = source.rows.iter().map(|r| r.fields[0].as_str()).collect();
    let sample_ids: HashSet<&str> = sample.rows.iter().map(|r| r.fields[0].as_str()).collect();
    assert_eq!(sample_ids.len(), 3001);
    assert!(sample_ids.is_subset(&source_ids));
}

#[test]
fn sampling_more_rows_than_available_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 2000);
    let err = load_dataset(&path, &SampleSpec::default()).unwrap_err();
    assert!(matches!(
        err,
        DashboardError::InsufficientData {
            requested: 3001,
            available: 2000
        }
    ));
}

#[test]
fn usa_india_export_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 6000);
    let ds = load_dataset(&path, &SampleSpec::default()).unwrap();

    let source = read_rows(&path).unwrap();
    for country in ["USA", "India"] {
        assert!(source
            .records()
            .iter()
            .any(|r| r.country == country && r.import_export == ImportExport::Export));
    }

    let predicate = Predicate {
        countries: BTreeSet::from(["USA".to_string(), "India".to_string()]),
        product: Choice::All,
        import_export: Choice::Only(ImportExport::Export),
    };
    let selection = preview_selection(&ds, &predicate);
    let selected = ds.select(&selection.indices);
    assert!(!selected.is_empty());
    assert!(selected
        .iter()
        .all(|r| (r.country == "USA" || r.country == "India") && r.import_export == ImportExport::Export));

    let expected = ds
        .records()
        .iter()
        .filter(|r| (r.country == "USA" || r.country == "India") && r.import_export == ImportExport::Export)
        .count();
    assert_eq!(selected.len(), expected);
    assert!(selection.indices.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn unique_product_count_matches_distinct_strings() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 5000);
    let ds = load_dataset(&path, &SampleSpec::default()).unwrap();
    let distinct: HashSet<&str> = ds.rows.iter().map(|r| r.record.product.as_str()).collect();
    assert_eq!(stats::unique_count(&ds.records(), Column::Product), distinct.len());
}

#[test]
fn export_and_reload_round_trips_filtered_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 3500);
    let ds = load_dataset(&path, &SampleSpec::default()).unwrap();

    let predicate = Predicate {
        product: Choice::Only("item3".into()),
        ..Predicate::default()
    };
    let indices = filtered_indices(&ds, &predicate);
    assert!(!indices.is_empty());

    let out = dir.path().join("Filtered_Data.csv");
    assert_eq!(export_csv(&ds, &indices, &out).unwrap(), indices.len());

    let reloaded = read_rows(&out).unwrap();
    assert_eq!(reloaded.headers, ds.headers);
    assert_eq!(reloaded.len(), indices.len());
    for (got, &i) in reloaded.rows.iter().zip(&indices) {
        assert_eq!(got, &ds.rows[i]);
    }
}

#[test]
fn every_page_renders_and_serializes() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(dir.path(), 3100);
    let ds = load_dataset(&path, &SampleSpec::default()).unwrap();
    let ctx = ViewContext::default();

    for page in Page::ALL {
        let plan = render(&SessionState::default().with_page(page), &ds, &ctx);
        assert_eq!(plan.page, page);
        assert!(!plan.blocks.is_empty());
        assert!(!plan.blocks.iter().any(|b| matches!(b, Block::Notice { .. })));
        serde_json::to_string(&plan).unwrap();
    }
}
