//! `locus resolve` command implementation
//!
//! Resolves identifiers given on the command line and prints the records.

use crate::batch::annotate_all;
use crate::commands::records_table;
use crate::config::Config;
use crate::entrez::EntrezClient;
use crate::error::Result;
use crate::resolver::Resolver;
use locus_common::table::{collect_identifiers, write_records};
use locus_common::TableFormat;
use std::io;
use tracing::info;

/// Format name for the terminal table
const TABLE_FORMAT: &str = "table";

/// Run the resolve command
pub async fn run(config: &Config, ids: &[String], format: &str) -> Result<()> {
    info!(count = ids.len(), format, "Running resolve command");

    // Validate the format before any remote call
    let table_format = match format {
        TABLE_FORMAT => None,
        other => Some(other.parse::<TableFormat>()?),
    };

    let ids = collect_identifiers(ids);
    let resolver = Resolver::new(EntrezClient::new(config.entrez_config()?)?);
    let report = annotate_all(&resolver, &ids, config.request_delay(), &()).await;

    match table_format {
        None => println!("{}", records_table(&report.records)),
        Some(table_format) => write_records(io::stdout().lock(), &report.records, table_format)?,
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::error::CliError;

    #[tokio::test]
    async fn test_unknown_format_fails_before_lookup() {
        // No email configured: the format error must win
        let err = run(&Config::new(), &["NM_1".to_string()], "xml")
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::Table(_)));
        assert!(err.to_string().contains("Unknown table format"));
    }

    #[tokio::test]
    async fn test_missing_email() {
        let err = run(&Config::new(), &["NM_1".to_string()], "csv")
            .await
            .unwrap_err();

        assert!(matches!(err, CliError::MissingEmail));
    }
}
