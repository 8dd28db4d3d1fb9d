//! E-utilities URL and query builders
//!
//! Helper functions to construct the three endpoints Locus calls and their
//! operation-specific parameters. Caller identity (`email`, `tool`,
//! `api_key`) is attached by the client.

/// Nucleotide database RefSeq accessions are linked from
pub const NUCLEOTIDE_DB: &str = "nuccore";

/// Gene database every lookup resolves into
pub const GENE_DB: &str = "gene";

/// Search field used for `LOC` symbols
pub const GENE_NAME_FIELD: &str = "Gene Name";

fn endpoint(base_url: &str, utility: &str) -> String {
    format!("{}/{}.fcgi", base_url.trim_end_matches('/'), utility)
}

/// Build elink endpoint URL
pub fn elink_url(base_url: &str) -> String {
    endpoint(base_url, "elink")
}

/// Build esearch endpoint URL
pub fn esearch_url(base_url: &str) -> String {
    endpoint(base_url, "esearch")
}

/// Build esummary endpoint URL
pub fn esummary_url(base_url: &str) -> String {
    endpoint(base_url, "esummary")
}

/// Parameters linking a nucleotide accession to gene records
pub fn elink_params(accession: &str) -> Vec<(&'static str, String)> {
    vec![
        ("dbfrom", NUCLEOTIDE_DB.to_string()),
        ("db", GENE_DB.to_string()),
        ("id", accession.to_string()),
        ("retmode", "json".to_string()),
    ]
}

/// Search term matching a symbol against the gene name field
pub fn gene_name_term(symbol: &str) -> String {
    format!("{}[{}]", symbol, GENE_NAME_FIELD)
}

/// Parameters searching the gene database by name
pub fn esearch_params(symbol: &str) -> Vec<(&'static str, String)> {
    vec![
        ("db", GENE_DB.to_string()),
        ("term", gene_name_term(symbol)),
        ("retmode", "json".to_string()),
    ]
}

/// Parameters fetching one gene document summary
pub fn esummary_params(gene_id: &str) -> Vec<(&'static str, String)> {
    vec![
        ("db", GENE_DB.to_string()),
        ("id", gene_id.to_string()),
        ("retmode", "json".to_string()),
    ]
}
