//! Identifier resolution
//!
//! Maps one input identifier to an [`AnnotationRecord`]:
//!
//! 1. classify by prefix (no remote call for invalid identifiers)
//! 2. RefSeq accessions are linked nuccore -> gene, `LOC` symbols are
//!    searched by gene name
//! 3. the first candidate gene is summarized
//!
//! When the service returns several candidates the first one wins, in the
//! order the service listed them.

use crate::entrez::{EntrezError, GeneDatabase, GeneSummary};
use locus_common::types::{classify, AnnotationRecord, IdentifierKind, PLACEHOLDER};
use thiserror::Error;
use tracing::{debug, instrument};

/// Why an identifier did not resolve to a gene
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Prefix is neither a RefSeq accession nor a `LOC` symbol
    #[error("Invalid input ID")]
    InvalidFormat,

    /// The link or search returned no gene
    #[error("Not found")]
    NotFound,

    /// A remote call failed
    #[error(transparent)]
    Remote(#[from] EntrezError),
}

/// Coarse classification of a [`ResolveError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    InvalidFormat,
    NotFound,
    Remote,
}

impl ResolveError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ResolveError::InvalidFormat => FailureKind::InvalidFormat,
            ResolveError::NotFound => FailureKind::NotFound,
            ResolveError::Remote(_) => FailureKind::Remote,
        }
    }

    /// The sentinel row reported for this failure
    pub fn to_record(&self, input_id: &str) -> AnnotationRecord {
        match self {
            ResolveError::InvalidFormat => AnnotationRecord::invalid(input_id),
            ResolveError::NotFound => AnnotationRecord::not_found(input_id),
            ResolveError::Remote(err) => AnnotationRecord::error(input_id, err.to_string()),
        }
    }
}

/// Build the success row from a resolved gene ID and its summary
pub fn record_from_summary(input_id: &str, gene_id: String, summary: GeneSummary) -> AnnotationRecord {
    let or_placeholder = |value: Option<String>| value.unwrap_or_else(|| PLACEHOLDER.to_string());

    AnnotationRecord {
        input_id: input_id.to_string(),
        gene_id,
        gene_name: summary.name,
        gene_symbol: Some(or_placeholder(summary.nomenclature_symbol)),
        description: summary.description,
        gene_type: Some(or_placeholder(summary.gene_type)),
        organism: Some(or_placeholder(summary.organism)),
        chromosome: Some(or_placeholder(summary.chromosome)),
        map_location: Some(or_placeholder(summary.map_location)),
    }
}

/// Resolves identifiers against a [`GeneDatabase`]
pub struct Resolver<D> {
    db: D,
}

impl<D: GeneDatabase> Resolver<D> {
    pub fn new(db: D) -> Self {
        Self { db }
    }

    /// The backing database
    pub fn database(&self) -> &D {
        &self.db
    }

    /// Resolve one identifier, reporting failures as a typed error
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve(&self, input_id: &str) -> Result<AnnotationRecord, ResolveError> {
        let kind = classify(input_id);
        debug!(%kind, "Classified identifier");

        let candidates = match kind {
            IdentifierKind::Invalid => return Err(ResolveError::InvalidFormat),
            IdentifierKind::RefSeq(_) => self.db.link_to_gene(input_id).await?,
            IdentifierKind::GeneSymbol => self.db.search_gene(input_id).await?,
        };

        let gene_id = candidates
            .into_iter()
            .next()
            .ok_or(ResolveError::NotFound)?;
        debug!(gene_id = %gene_id, "Resolved gene");

        let summary = self.db.gene_summary(&gene_id).await?;

        Ok(record_from_summary(input_id, gene_id, summary))
    }

    /// Resolve one identifier, folding any failure into its sentinel row
    pub async fn annotate(&self, input_id: &str) -> AnnotationRecord {
        match self.resolve(input_id).await {
            Ok(record) => record,
            Err(err) => err.to_record(input_id),
        }
    }
}
