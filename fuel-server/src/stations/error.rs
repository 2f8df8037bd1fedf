//! Station import error types.

use std::path::PathBuf;

/// Errors that can occur when importing station data.
#[derive(Debug, thiserror::Error)]
pub enum StationError {
    /// Failed to open or read the price sheet
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a CSV record
    #[error("failed to parse station CSV: {0}")]
    Csv(#[from] csv::Error),
}
