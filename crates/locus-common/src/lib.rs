//! Locus Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the Locus annotator.
//!
//! # Overview
//!
//! This crate provides common functionality used across all Locus workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Console/file tracing setup driven by environment variables
//! - **Types**: Identifier classification and the annotation record
//! - **Tables**: Reading identifier columns and writing annotated tables
//!
//! # Example
//!
//! ```
//! use locus_common::types::{classify, IdentifierKind};
//!
//! assert_eq!(classify("LOC101488245"), IdentifierKind::GeneSymbol);
//! assert_eq!(classify("chr1:100-200"), IdentifierKind::Invalid);
//! ```

pub mod error;
pub mod logging;
pub mod table;
pub mod types;

// Re-export commonly used types
pub use error::{LocusError, Result};
pub use table::TableFormat;
pub use types::{classify, AnnotationRecord, IdentifierKind, RefSeqPrefix};
