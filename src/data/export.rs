use std::path::{Path, PathBuf};

use super::model::Dataset;
use crate::error::{DashboardError, Result};

/// Output file name used when no export path is configured.
pub const DEFAULT_EXPORT_PATH: &str = "Filtered_Data.csv";

/// Write the header row and the selected rows to `path`, replacing any
/// existing file. Returns the number of data rows written.
///
/// Rows are written from their raw source cells, so columns the dashboard
/// does not interpret are preserved.
pub fn export_csv(dataset: &Dataset, indices: &[usize], path: &Path) -> Result<usize> {
    let written = write_rows(dataset, indices, path).map_err(|source| DashboardError::Export {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("Exported {written} rows to {}", path.display());
    Ok(written)
}

fn write_rows(dataset: &Dataset, indices: &[usize], path: &Path) -> std::result::Result<usize, csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(&dataset.headers)?;

    let mut written = 0;
    for row in indices.iter().filter_map(|&i| dataset.rows.get(i)) {
        writer.write_record(&row.fields)?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Resolve a configured export path against the working directory.
pub fn resolve_export_path(configured: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(configured))
            .unwrap_or_else(|_| configured.to_path_buf())
    }
}
