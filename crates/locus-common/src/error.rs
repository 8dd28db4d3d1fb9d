//! Error types for Locus

use thiserror::Error;

/// Result type alias for Locus operations
pub type Result<T> = std::result::Result<T, LocusError>;

/// Main error type for Locus
#[derive(Error, Debug)]
pub enum LocusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Input table has no column named '{0}'")]
    MissingColumn(String),

    #[error("Parse error: {0}")]
    Parse(String),
}
