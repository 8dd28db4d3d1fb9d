//! E-utilities response types
//!
//! Mirrors the `retmode=json` payloads of `elink`, `esearch` and `esummary`.
//! Only the fields Locus reads are modelled; everything else is ignored.

use serde::{Deserialize, Deserializer};

/// UIDs arrive as strings from most endpoints but as numbers from some
/// `elink` modes, so accept both.
fn uid_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Uid {
        Text(String),
        Number(u64),
    }

    let uids = Option::<Vec<Uid>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(uids
        .into_iter()
        .map(|uid| match uid {
            Uid::Text(text) => text,
            Uid::Number(number) => number.to_string(),
        })
        .collect())
}

// ============================================================================
// elink
// ============================================================================

/// Response from `elink.fcgi`
#[derive(Debug, Clone, Deserialize)]
pub struct ELinkResponse {
    #[serde(default)]
    pub linksets: Vec<LinkSet>,

    #[serde(default, alias = "ERROR")]
    pub error: Option<String>,
}

/// Links for one input ID
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSet {
    #[serde(default)]
    pub linksetdbs: Vec<LinkSetDb>,

    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
}

/// Links into one target database
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSetDb {
    #[serde(default, deserialize_with = "uid_list")]
    pub links: Vec<String>,
}

impl ELinkResponse {
    /// Every linked UID, in the order the service listed them
    pub fn linked_ids(&self) -> Vec<String> {
        self.linksets
            .iter()
            .flat_map(|set| &set.linksetdbs)
            .flat_map(|db| db.links.iter().cloned())
            .collect()
    }

    /// First error reported at the top level or inside a link set
    pub fn error_message(&self) -> Option<&str> {
        self.error
            .as_deref()
            .or_else(|| self.linksets.iter().find_map(|set| set.error.as_deref()))
    }
}

// ============================================================================
// esearch
// ============================================================================

/// Response from `esearch.fcgi`
#[derive(Debug, Clone, Deserialize)]
pub struct ESearchResponse {
    pub esearchresult: Option<ESearchResult>,

    #[serde(default, alias = "ERROR")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ESearchResult {
    #[serde(default, deserialize_with = "uid_list")]
    pub idlist: Vec<String>,

    #[serde(default, rename = "ERROR")]
    pub error: Option<String>,
}

// ============================================================================
// esummary (db=gene)
// ============================================================================

/// Response from `esummary.fcgi`.
///
/// `result` is keyed by UID, plus a `uids` array listing them, so it stays
/// untyped until a specific document is picked out.
#[derive(Debug, Clone, Deserialize)]
pub struct ESummaryResponse {
    #[serde(default)]
    pub result: Option<serde_json::Map<String, serde_json::Value>>,

    #[serde(default, alias = "ERROR")]
    pub error: Option<String>,
}

/// Gene document summary as returned by `esummary`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneDocSum {
    #[serde(default)]
    pub uid: String,

    pub name: Option<String>,
    pub description: Option<String>,
    pub nomenclaturesymbol: Option<String>,
    pub genetype: Option<String>,
    pub organism: Option<GeneOrganism>,
    pub chromosome: Option<String>,
    pub maplocation: Option<String>,

    pub error: Option<String>,
}

/// Only the scientific name is read; sibling fields are ignored
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeneOrganism {
    #[serde(default)]
    pub scientificname: Option<String>,
}

/// Gene metadata used to build an annotation record.
///
/// `name` and `description` are required; the rest are `None` when the
/// summary left them out or empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneSummary {
    pub uid: String,
    pub name: String,
    pub description: String,
    pub nomenclature_symbol: Option<String>,
    pub gene_type: Option<String>,
    pub organism: Option<String>,
    pub chromosome: Option<String>,
    pub map_location: Option<String>,
}

impl GeneSummary {
    /// Summary with only the required fields, as a stub service would report
    pub fn new(uid: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            description: description.into(),
            ..Self::default()
        }
    }
}
