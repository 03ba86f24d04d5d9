//! # I/O Module
//!
//! Persistence helpers for result records. The kernel itself performs no
//! I/O; these functions only serialize what it returns.
//!
//! - [`audit`] - Pretty-printed JSON audit files named after the computation time
//! - [`table`] - CSV tables of parameter sweeps

pub mod audit;
pub mod table;

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("File I/O error for '{path}': {source}", path = path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV writing error: {0}")]
    Csv(#[from] csv::Error),
}
