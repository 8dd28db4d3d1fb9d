//! `locus classify` command implementation
//!
//! Shows the lookup each identifier would take. Works offline.

use crate::entrez::endpoints::{GENE_DB, GENE_NAME_FIELD, NUCLEOTIDE_DB};
use crate::error::Result;
use colored::Colorize;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Table};
use locus_common::types::{classify, IdentifierKind, INVALID_FORMAT};

/// Remote lookup used for an identifier kind
pub fn lookup_route(kind: IdentifierKind) -> String {
    match kind {
        IdentifierKind::RefSeq(_) => format!("elink {} -> {}", NUCLEOTIDE_DB, GENE_DB),
        IdentifierKind::GeneSymbol => format!("esearch {} [{}]", GENE_DB, GENE_NAME_FIELD),
        IdentifierKind::Invalid => "none".to_string(),
    }
}

/// Run the classify command
pub fn run(ids: &[String]) -> Result<()> {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(vec!["Identifier", "Kind", "Lookup"]);

    let mut invalid = 0;
    for id in ids {
        let id = id.trim();
        let kind = classify(id);
        if !kind.is_valid() {
            invalid += 1;
        }
        table.add_row(vec![id.to_string(), kind.to_string(), lookup_route(kind)]);
    }

    println!("{}", table);

    if invalid > 0 {
        eprintln!(
            "{} {} identifier(s) will be reported as '{}'",
            "Note:".yellow().bold(),
            invalid,
            INVALID_FORMAT
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_common::RefSeqPrefix;

    #[test]
    fn test_lookup_route() {
        assert_eq!(
            lookup_route(IdentifierKind::RefSeq(RefSeqPrefix::Np)),
            "elink nuccore -> gene"
        );
        assert_eq!(
            lookup_route(IdentifierKind::GeneSymbol),
            "esearch gene [Gene Name]"
        );
        assert_eq!(lookup_route(IdentifierKind::Invalid), "none");
    }
}
