use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use trade_dashboard::config::DEFAULT_DATA_PATH;
use trade_dashboard::data::model::{ImportExport, PaymentTerms, ShippingMethod};

/// Write a synthetic imports/exports dataset with the full source column set.
#[derive(Debug, Parser)]
#[command(name = "generate_sample")]
struct Args {
    /// Number of transactions to generate.
    #[arg(long, default_value_t = 15_000)]
    rows: usize,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    output: PathBuf,
}

#[derive(Serialize)]
struct SourceRow<'a> {
    #[serde(rename = "Transaction_ID")]
    transaction_id: String,
    #[serde(rename = "Country")]
    country: &'a str,
    #[serde(rename = "Product")]
    product: &'a str,
    #[serde(rename = "Import_Export")]
    import_export: ImportExport,
    #[serde(rename = "Quantity")]
    quantity: u32,
    #[serde(rename = "Value")]
    value: f64,
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Port")]
    port: &'a str,
    #[serde(rename = "Customs_Code")]
    customs_code: u32,
    #[serde(rename = "Weight")]
    weight: f64,
    #[serde(rename = "Shipping_Method")]
    shipping_method: ShippingMethod,
    #[serde(rename = "Supplier")]
    supplier: &'a str,
    #[serde(rename = "Customer")]
    customer: &'a str,
    #[serde(rename = "Invoice_Number")]
    invoice_number: u64,
    #[serde(rename = "Payment_Terms")]
    payment_terms: PaymentTerms,
}

const COUNTRIES: [&str; 12] = [
    "USA", "India", "China", "Germany", "Brazil", "Japan", "Kenya", "France", "Mexico", "Peru",
    "Vietnam", "Canada",
];
const PRODUCTS: [&str; 10] = [
    "lamp", "chair", "engine", "shirt", "robot", "drill", "jacket", "tablet", "sofa", "puzzle",
];
const CATEGORIES: [&str; 5] = ["Clothing", "Electronics", "Furniture", "Machinery", "Toys"];
const PORTS: [&str; 8] = [
    "North Harbor", "East Dock", "Port Royal", "West Bay", "South Pier", "Lake Gate", "New Haven",
    "Cape Point",
];
const SUPPLIERS: [&str; 6] = [
    "Acme Ltd", "Globex", "Initech", "Umbrella Co", "Stark Trading", "Wayne Supply",
];
const CUSTOMERS: [&str; 8] = [
    "Alice Moreau", "Ben Okafor", "Chen Wei", "Dana Ruiz", "Eli Novak", "Fatima Khan", "Gus Berg",
    "Hana Sato",
];

fn pick<'a, R: Rng>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items.choose(rng).copied().unwrap_or("")
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;

    for i in 0..args.rows {
        let row = SourceRow {
            transaction_id: format!("TX-{i:06}"),
            country: pick(&mut rng, &COUNTRIES),
            product: pick(&mut rng, &PRODUCTS),
            import_export: ImportExport::ALL[rng.gen_range(0..ImportExport::ALL.len())],
            quantity: rng.gen_range(1..=10_000),
            value: (rng.gen_range(100.0..10_000.0_f64) * 100.0).round() / 100.0,
            date: format!(
                "{:02}-{:02}-{}",
                rng.gen_range(1..=28),
                rng.gen_range(1..=12),
                rng.gen_range(2019..=2024)
            ),
            category: pick(&mut rng, &CATEGORIES),
            port: pick(&mut rng, &PORTS),
            customs_code: rng.gen_range(100_000..1_000_000),
            weight: (rng.gen_range(1.0..5_000.0_f64) * 100.0).round() / 100.0,
            shipping_method: ShippingMethod::ALL[rng.gen_range(0..ShippingMethod::ALL.len())],
            supplier: pick(&mut rng, &SUPPLIERS),
            customer: pick(&mut rng, &CUSTOMERS),
            invoice_number: rng.gen_range(10_000_000..100_000_000),
            payment_terms: PaymentTerms::ALL[rng.gen_range(0..PaymentTerms::ALL.len())],
        };
        writer.serialize(row).context("writing row")?;
    }
    writer.flush().context("flushing output")?;

    println!("Wrote {} transactions to {}", args.rows, args.output.display());
    Ok(())
}
