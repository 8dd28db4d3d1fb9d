//! Error types for Locus CLI
//!
//! User-facing errors with clear, actionable messages. Per-identifier lookup
//! failures never surface here: they become rows in the output table.

use locus_common::LocusError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Comprehensive error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Input table does not exist
    #[error("File not found: '{0}'. Verify the file path exists and you have read permissions.")]
    FileNotFound(String),

    /// Input table lacks the identifier column
    #[error("Input table has no column named '{0}'. Add a '{0}' header or pick the identifier column with --column.")]
    MissingColumn(String),

    /// Input table could not be read or output could not be written
    #[error("Table error: {0}")]
    Table(LocusError),

    /// No contact email configured
    #[error("NCBI requires a contact email with every request. Pass --email or set NCBI_EMAIL.")]
    MissingEmail,

    /// Configuration is missing or invalid
    #[error("Configuration error: {0}. Check your environment variables or command-line flags.")]
    Config(String),

    /// HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// File system operation failed
    #[error("File operation failed: {0}. Check file permissions and disk space.")]
    Io(#[from] std::io::Error),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<LocusError> for CliError {
    fn from(err: LocusError) -> Self {
        match err {
            LocusError::MissingColumn(column) => Self::MissingColumn(column),
            LocusError::Io(io) => Self::Io(io),
            other => Self::Table(other),
        }
    }
}

impl CliError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
