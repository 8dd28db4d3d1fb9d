//! Locus CLI Library
//!
//! Annotates tables of RefSeq accessions and `LOC` gene symbols with NCBI
//! Gene records.
//!
//! # Overview
//!
//! - **Annotation**: Resolve an identifier column into a nine-column gene table (`locus annotate`)
//! - **Lookup**: Resolve identifiers given on the command line (`locus resolve`)
//! - **Classification**: Show how identifiers would be resolved, offline (`locus classify`)
//!
//! Lookups go through the [`entrez::GeneDatabase`] seam, so the resolver and
//! batch driver run unchanged against in-memory stubs.

pub mod batch;
pub mod commands;
pub mod config;
pub mod entrez;
pub mod error;
pub mod progress;
pub mod resolver;

// Re-export commonly used types
pub use config::Config;
pub use error::{CliError, Result};
pub use resolver::{ResolveError, Resolver};

use clap::{Parser, Subcommand};
use locus_common::table::DEFAULT_ID_COLUMN;
use locus_common::TableFormat;
use std::path::PathBuf;

/// Locus - NCBI gene annotation for RefSeq and LOC identifiers
#[derive(Parser, Debug)]
#[command(name = "locus")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Contact email sent to NCBI with every request
    #[arg(long, env = "NCBI_EMAIL", global = true)]
    pub email: Option<String>,

    /// NCBI API key
    #[arg(long, env = "NCBI_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// E-utilities base URL
    #[arg(long, env = "NCBI_EUTILS_URL", global = true)]
    pub eutils_url: Option<String>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Annotate the identifier column of a CSV/TSV table
    Annotate {
        /// Input table
        input: PathBuf,

        /// Output path ('-' for stdout)
        #[arg(short, long, default_value = commands::annotate::DEFAULT_OUTPUT)]
        output: String,

        /// Column holding the identifiers
        #[arg(short, long, default_value = DEFAULT_ID_COLUMN)]
        column: String,

        /// Output format (csv, tsv, json); inferred from the output path when omitted
        #[arg(short, long)]
        format: Option<TableFormat>,

        /// Pause between identifiers in milliseconds
        #[arg(long, env = "LOCUS_DELAY_MS")]
        delay_ms: Option<u64>,

        /// Skip the result preview
        #[arg(long)]
        no_preview: bool,
    },

    /// Resolve identifiers given on the command line
    Resolve {
        /// RefSeq accessions or LOC symbols
        #[arg(required = true)]
        ids: Vec<String>,

        /// Output format (table, csv, tsv, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Show how identifiers would be resolved, without contacting NCBI
    Classify {
        /// Identifiers to classify
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

impl Cli {
    /// Environment configuration overlaid with command-line flags
    pub fn config(&self) -> Result<Config> {
        let mut config = Config::from_env()?;

        if let Some(email) = &self.email {
            config.set_email(Some(email.clone()));
        }

        if let Some(key) = &self.api_key {
            config.set_api_key(Some(key.clone()));
        }

        if let Some(url) = &self.eutils_url {
            config.set_eutils_url(url.clone());
        }

        Ok(config)
    }
}
