//! Common types used across Locus
//!
//! - [`IdentifierKind`] / [`classify`]: offline, prefix-based classification
//!   of an input identifier
//! - [`AnnotationRecord`]: one output row per distinct input identifier

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentinels
// ============================================================================

/// Placeholder for an optional field the gene summary did not report
pub const PLACEHOLDER: &str = "-";

/// GeneID/GeneName/Description value when no gene is linked or matched
pub const NOT_FOUND: &str = "Not found";

/// GeneID/GeneName value when the remote round trip failed
pub const ERROR: &str = "Error";

/// GeneID value for identifiers with an unrecognized prefix
pub const INVALID_FORMAT: &str = "Invalid format";

/// GeneName value for identifiers with an unrecognized prefix
pub const INVALID_NAME: &str = "Invalid";

/// Description value for identifiers with an unrecognized prefix
pub const INVALID_DESCRIPTION: &str = "Invalid input ID";

/// Prefix of NCBI Gene placeholder symbols
pub const GENE_SYMBOL_PREFIX: &str = "LOC";

// ============================================================================
// Identifier classification
// ============================================================================

/// RefSeq accession prefixes accepted as input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RefSeqPrefix {
    /// Curated mRNA
    Nm,
    /// Predicted mRNA
    Xm,
    /// Curated non-coding RNA
    Nr,
    /// Predicted non-coding RNA
    Xr,
    /// Curated protein
    Np,
    /// Predicted protein
    Xp,
}

impl RefSeqPrefix {
    pub const ALL: [RefSeqPrefix; 6] = [
        RefSeqPrefix::Nm,
        RefSeqPrefix::Xm,
        RefSeqPrefix::Nr,
        RefSeqPrefix::Xr,
        RefSeqPrefix::Np,
        RefSeqPrefix::Xp,
    ];

    /// The literal accession prefix, underscore included
    pub fn as_str(self) -> &'static str {
        match self {
            RefSeqPrefix::Nm => "NM_",
            RefSeqPrefix::Xm => "XM_",
            RefSeqPrefix::Nr => "NR_",
            RefSeqPrefix::Xr => "XR_",
            RefSeqPrefix::Np => "NP_",
            RefSeqPrefix::Xp => "XP_",
        }
    }

    /// Whether the accession names a protein rather than a transcript
    pub fn is_protein(self) -> bool {
        matches!(self, RefSeqPrefix::Np | RefSeqPrefix::Xp)
    }

    /// Whether the record comes from the computational (X*) pipeline
    pub fn is_predicted(self) -> bool {
        matches!(self, RefSeqPrefix::Xm | RefSeqPrefix::Xr | RefSeqPrefix::Xp)
    }
}

impl std::fmt::Display for RefSeqPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How an input identifier will be resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    /// RefSeq accession, resolved through a nucleotide-to-gene link
    RefSeq(RefSeqPrefix),
    /// `LOC` gene symbol, resolved through a gene-name search
    GeneSymbol,
    /// Anything else; never sent to the remote service
    Invalid,
}

impl IdentifierKind {
    pub fn is_valid(self) -> bool {
        !matches!(self, IdentifierKind::Invalid)
    }
}

impl std::fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IdentifierKind::RefSeq(prefix) => {
                let status = if prefix.is_predicted() { "predicted " } else { "" };
                let molecule = if prefix.is_protein() { "protein" } else { "nucleotide" };
                write!(f, "RefSeq {}{} ({})", status, molecule, prefix)
            },
            IdentifierKind::GeneSymbol => write!(f, "Gene symbol ({})", GENE_SYMBOL_PREFIX),
            IdentifierKind::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Classify an identifier by its prefix.
///
/// Matching is case-sensitive and the remainder of the identifier is not
/// inspected, so `"NM_"` alone is still a RefSeq accession and `"nm_000014"`
/// is invalid.
pub fn classify(id: &str) -> IdentifierKind {
    if let Some(prefix) = RefSeqPrefix::ALL
        .into_iter()
        .find(|prefix| id.starts_with(prefix.as_str()))
    {
        return IdentifierKind::RefSeq(prefix);
    }

    if id.starts_with(GENE_SYMBOL_PREFIX) {
        IdentifierKind::GeneSymbol
    } else {
        IdentifierKind::Invalid
    }
}

// ============================================================================
// Annotation record
// ============================================================================

/// Column headers of the output table, in order
pub const OUTPUT_COLUMNS: [&str; 9] = [
    "InputID",
    "GeneID",
    "GeneName",
    "GeneSymbol",
    "Description",
    "GeneType",
    "Organism",
    "Chromosome",
    "MapLocation",
];

/// One row of the output table.
///
/// On success every optional field is populated, with [`PLACEHOLDER`] for
/// values the summary omitted. The not-found, invalid and error rows leave
/// them `None`, which serializes as an empty cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    #[serde(rename = "InputID")]
    pub input_id: String,

    #[serde(rename = "GeneID")]
    pub gene_id: String,

    #[serde(rename = "GeneName")]
    pub gene_name: String,

    #[serde(rename = "GeneSymbol")]
    pub gene_symbol: Option<String>,

    #[serde(rename = "Description")]
    pub description: String,

    #[serde(rename = "GeneType")]
    pub gene_type: Option<String>,

    #[serde(rename = "Organism")]
    pub organism: Option<String>,

    #[serde(rename = "Chromosome")]
    pub chromosome: Option<String>,

    #[serde(rename = "MapLocation")]
    pub map_location: Option<String>,
}

impl AnnotationRecord {
    fn sentinel(input_id: &str, gene_id: &str, gene_name: &str, description: String) -> Self {
        Self {
            input_id: input_id.to_string(),
            gene_id: gene_id.to_string(),
            gene_name: gene_name.to_string(),
            gene_symbol: None,
            description,
            gene_type: None,
            organism: None,
            chromosome: None,
            map_location: None,
        }
    }

    /// Row for an identifier whose prefix is not recognized
    pub fn invalid(input_id: &str) -> Self {
        Self::sentinel(
            input_id,
            INVALID_FORMAT,
            INVALID_NAME,
            INVALID_DESCRIPTION.to_string(),
        )
    }

    /// Row for an identifier with no linked or matching gene
    pub fn not_found(input_id: &str) -> Self {
        Self::sentinel(input_id, NOT_FOUND, NOT_FOUND, NOT_FOUND.to_string())
    }

    /// Row for a failed lookup; the message lands in Description
    pub fn error(input_id: &str, message: impl Into<String>) -> Self {
        Self::sentinel(input_id, ERROR, ERROR, message.into())
    }

    /// Whether this row carries a real gene rather than a sentinel
    pub fn is_resolved(&self) -> bool {
        !matches!(self.gene_id.as_str(), NOT_FOUND | ERROR | INVALID_FORMAT)
    }

    /// Cells in [`OUTPUT_COLUMNS`] order, with absent values as empty strings
    pub fn cells(&self) -> [&str; 9] {
        fn opt(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }

        [
            self.input_id.as_str(),
            self.gene_id.as_str(),
            self.gene_name.as_str(),
            opt(&self.gene_symbol),
            self.description.as_str(),
            opt(&self.gene_type),
            opt(&self.organism),
            opt(&self.chromosome),
            opt(&self.map_location),
        ]
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_refseq_prefixes() {
        let cases = [
            ("NM_001301717.1", RefSeqPrefix::Nm),
            ("XM_004485479.3", RefSeqPrefix::Xm),
            ("NR_024540.1", RefSeqPrefix::Nr),
            ("XR_001234.2", RefSeqPrefix::Xr),
            ("NP_000475.1", RefSeqPrefix::Np),
            ("XP_004485536.1", RefSeqPrefix::Xp),
        ];

        for (id, prefix) in cases {
            assert_eq!(classify(id), IdentifierKind::RefSeq(prefix), "{}", id);
        }
    }

    #[test]
    fn test_classify_gene_symbol() {
        assert_eq!(classify("LOC101488245"), IdentifierKind::GeneSymbol);
        // Suffix is not validated
        assert_eq!(classify("LOCUS"), IdentifierKind::GeneSymbol);
    }

    #[test]
    fn test_classify_is_case_sensitive() {
        assert_eq!(classify("nm_001301717.1"), IdentifierKind::Invalid);
        assert_eq!(classify("loc101488245"), IdentifierKind::Invalid);
    }

    #[test]
    fn test_classify_invalid() {
        for id in ["", "ENSG00000142192", "NC_000021.9", "NM", "P05067", " NM_000014"] {
            assert_eq!(classify(id), IdentifierKind::Invalid, "{:?}", id);
        }
    }

    #[test]
    fn test_classify_bare_prefix() {
        assert_eq!(classify("XP_"), IdentifierKind::RefSeq(RefSeqPrefix::Xp));
        assert_eq!(classify("LOC"), IdentifierKind::GeneSymbol);
    }

    #[test]
    fn test_refseq_prefix_properties() {
        assert!(RefSeqPrefix::Np.is_protein());
        assert!(!RefSeqPrefix::Nm.is_protein());
        assert!(RefSeqPrefix::Xr.is_predicted());
        assert!(!RefSeqPrefix::Nr.is_predicted());
    }

    #[test]
    fn test_sentinel_records() {
        let invalid = AnnotationRecord::invalid("ABC");
        assert_eq!(invalid.gene_id, "Invalid format");
        assert_eq!(invalid.gene_name, "Invalid");
        assert_eq!(invalid.description, "Invalid input ID");
        assert!(invalid.gene_symbol.is_none());

        let missing = AnnotationRecord::not_found("LOC1");
        assert_eq!(
            (missing.gene_id.as_str(), missing.gene_name.as_str(), missing.description.as_str()),
            ("Not found", "Not found", "Not found")
        );

        let failed = AnnotationRecord::error("NM_1", "operation timed out");
        assert_eq!(failed.gene_id, "Error");
        assert_eq!(failed.description, "operation timed out");
        assert!(!failed.is_resolved());
    }

    #[test]
    fn test_cells_of_resolved_record() {
        let record = AnnotationRecord {
            input_id: "NM_1".to_string(),
            gene_id: "351".to_string(),
            gene_name: "APP".to_string(),
            gene_symbol: Some("APP".to_string()),
            description: "amyloid beta precursor protein".to_string(),
            gene_type: None,
            organism: Some("Homo sapiens".to_string()),
            chromosome: Some("21".to_string()),
            map_location: Some("21q21.3".to_string()),
        };

        assert_eq!(
            record.cells(),
            [
                "NM_1",
                "351",
                "APP",
                "APP",
                "amyloid beta precursor protein",
                "",
                "Homo sapiens",
                "21",
                "21q21.3"
            ]
        );
        assert!(record.is_resolved());
    }

    #[test]
    fn test_identifier_kind_display() {
        assert_eq!(
            IdentifierKind::RefSeq(RefSeqPrefix::Nm).to_string(),
            "RefSeq nucleotide (NM_)"
        );
        assert_eq!(
            IdentifierKind::RefSeq(RefSeqPrefix::Xp).to_string(),
            "RefSeq predicted protein (XP_)"
        );
        assert_eq!(
            IdentifierKind::RefSeq(RefSeqPrefix::Xr).to_string(),
            "RefSeq predicted nucleotide (XR_)"
        );
        assert_eq!(IdentifierKind::GeneSymbol.to_string(), "Gene symbol (LOC)");
    }

    #[test]
    fn test_cells_follow_column_order() {
        let record = AnnotationRecord::not_found("XM_1");
        let cells = record.cells();
        assert_eq!(cells.len(), OUTPUT_COLUMNS.len());
        assert_eq!(cells[0], "XM_1");
        assert_eq!(cells[3], "");
        assert_eq!(cells[4], "Not found");
    }
}
