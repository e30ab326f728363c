use std::path::PathBuf;

use thiserror::Error;

use crate::data::model::Column;

// ---------------------------------------------------------------------------
// Error taxonomy
// ---------------------------------------------------------------------------

/// Errors surfaced by the dashboard core.
///
/// `DataLoad` and `InsufficientData` are fatal at startup. `EmptySet` and
/// `Export` are in-session errors: they are reported as a notice and leave the
/// current render state untouched.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The source file is missing, unreadable, or does not match the schema.
    #[error("failed to load {}: {reason}", path.display())]
    DataLoad { path: PathBuf, reason: String },

    /// The requested sample is larger than the source file.
    #[error("cannot sample {requested} rows from a source of {available} rows")]
    InsufficientData { requested: usize, available: usize },

    /// An aggregation that needs at least one row was given none.
    #[error("cannot compute {operation} of {column} over an empty set")]
    EmptySet {
        operation: &'static str,
        column: Column,
    },

    /// Writing the filtered subset failed.
    #[error("failed to export to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
