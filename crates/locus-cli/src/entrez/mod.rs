//! NCBI Entrez E-utilities access
//!
//! [`GeneDatabase`] is the seam the resolver talks to: link, search and
//! summary lookups against the gene database. [`EntrezClient`] implements it
//! over HTTP; tests substitute in-memory stubs.

pub mod client;
pub mod endpoints;
pub mod types;

pub use client::{EntrezClient, EntrezConfig};
pub use types::GeneSummary;

use async_trait::async_trait;
use thiserror::Error;

/// Result type alias for remote lookups
pub type EntrezResult<T> = std::result::Result<T, EntrezError>;

/// Failure of a single remote lookup.
///
/// The display text is what ends up in the Description column of an
/// `Error` row, so it carries no CLI advice.
#[derive(Error, Debug)]
pub enum EntrezError {
    /// The request could not be sent or its body could not be read
    #[error("{0}")]
    Transport(String),

    /// Non-success HTTP status
    #[error("{operation} returned HTTP {status}: {message}")]
    Status {
        operation: &'static str,
        status: u16,
        message: String,
    },

    /// The service answered with an error payload
    #[error("{operation} failed: {message}")]
    Service {
        operation: &'static str,
        message: String,
    },

    /// The body did not match the expected JSON shape
    #[error("Malformed {operation} response: {message}")]
    Malformed {
        operation: &'static str,
        message: String,
    },

    /// A gene summary lacked a field every record needs
    #[error("Gene summary for {uid} has no '{field}' field")]
    MissingField { uid: String, field: &'static str },
}

impl From<reqwest::Error> for EntrezError {
    fn from(err: reqwest::Error) -> Self {
        // reqwest keeps the useful part ("operation timed out", "connection
        // refused") in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        Self::Transport(message)
    }
}

/// Remote gene database used by the resolver
#[async_trait]
pub trait GeneDatabase: Send + Sync {
    /// Gene IDs linked from a nucleotide accession, in service order
    async fn link_to_gene(&self, accession: &str) -> EntrezResult<Vec<String>>;

    /// Gene IDs whose name matches `symbol`, in service order
    async fn search_gene(&self, symbol: &str) -> EntrezResult<Vec<String>>;

    /// Document summary of one gene
    async fn gene_summary(&self, gene_id: &str) -> EntrezResult<GeneSummary>;
}
