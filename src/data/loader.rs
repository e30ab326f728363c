use std::path::Path;

use anyhow::{bail, Context};
use arrow::util::display::{ArrayFormatter, FormatOptions};
use csv::StringRecord;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::model::{Column, Dataset, Row, TradeRecord};
use crate::error::{DashboardError, Result};

/// Rows drawn for a session when nothing else is configured.
pub const DEFAULT_SAMPLE_SIZE: usize = 3001;
pub const DEFAULT_SEED: u64 = 55054;

/// How many rows to draw from the source, and with which seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleSpec {
    pub size: usize,
    pub seed: u64,
}

impl Default for SampleSpec {
    fn default() -> Self {
        SampleSpec {
            size: DEFAULT_SAMPLE_SIZE,
            seed: DEFAULT_SEED,
        }
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the source file and draw the session sample from it.
pub fn load_dataset(path: &Path, spec: &SampleSpec) -> Result<Dataset> {
    let full = read_rows(path)?;
    log::info!("Read {} rows from {}", full.len(), path.display());
    let sampled = sample(full, spec)?;
    log::info!(
        "Sampled {} rows with seed {}",
        sampled.len(),
        spec.seed
    );
    Ok(sampled)
}

/// Read every row of a file without sampling. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row, one transaction per line (default)
/// * `.parquet` – flat columns; every cell is read through its display form
///   and then typed the same way as a CSV cell
pub fn read_rows(path: &Path) -> Result<Dataset> {
    read_file(path).map_err(|e| DashboardError::DataLoad {
        path: path.to_path_buf(),
        reason: format!("{e:#}"),
    })
}

/// Draw `spec.size` rows without replacement. The result keeps draw order.
pub fn sample(dataset: Dataset, spec: &SampleSpec) -> Result<Dataset> {
    let available = dataset.len();
    if spec.size > available {
        return Err(DashboardError::InsufficientData {
            requested: spec.size,
            available,
        });
    }

    let mut rng = StdRng::seed_from_u64(spec.seed);
    let picked = rand::seq::index::sample(&mut rng, available, spec.size);

    let mut slots: Vec<Option<Row>> = dataset.rows.into_iter().map(Some).collect();
    let rows = picked
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect();

    Ok(Dataset::new(dataset.headers, rows))
}

fn read_file(path: &Path) -> anyhow::Result<Dataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "parquet" | "pq" => read_parquet(path),
        "csv" | "" => read_csv(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// Shared row typing
// ---------------------------------------------------------------------------

fn check_schema(headers: &StringRecord) -> anyhow::Result<()> {
    for column in Column::all() {
        if !headers.iter().any(|h| h == column.header()) {
            bail!("missing required column '{}'", column.header());
        }
    }
    Ok(())
}

fn parse_row(record: &StringRecord, headers: &StringRecord, row_no: usize) -> anyhow::Result<Row> {
    let typed: TradeRecord = record
        .deserialize(Some(headers))
        .with_context(|| format!("row {row_no}: does not match the trade schema"))?;
    Ok(Row {
        record: typed,
        fields: record.iter().map(str::to_string).collect(),
    })
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn read_csv(path: &Path) -> anyhow::Result<Dataset> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers = reader.headers().context("reading CSV headers")?.clone();
    check_schema(&headers)?;

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        rows.push(parse_row(&record, &headers, row_no)?);
    }

    Ok(Dataset::new(
        headers.iter().map(str::to_string).collect(),
        rows,
    ))
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

fn read_parquet(path: &Path) -> anyhow::Result<Dataset> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)
        .context("reading parquet metadata")?;
    let headers: StringRecord = builder
        .schema()
        .fields()
        .iter()
        .map(|f| f.name().as_str())
        .collect();
    check_schema(&headers)?;

    let reader = builder.build().context("building parquet reader")?;
    let options = FormatOptions::default();
    let mut rows = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let formatters = batch
            .columns()
            .iter()
            .map(|col| ArrayFormatter::try_new(col.as_ref(), &options))
            .collect::<std::result::Result<Vec<_>, _>>()
            .context("preparing parquet column formatters")?;

        for row in 0..batch.num_rows() {
            let record: StringRecord = formatters
                .iter()
                .map(|f| f.value(row).to_string())
                .collect();
            let row_no = rows.len();
            rows.push(parse_row(&record, &headers, row_no)?);
        }
    }

    Ok(Dataset::new(
        headers.iter().map(str::to_string).collect(),
        rows,
    ))
}
