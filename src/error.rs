// src/error.rs
use thiserror::Error;

/// Failures from loading configuration or scene files. The geometry itself
/// never errors; it reports `None` or non-finite values instead.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
