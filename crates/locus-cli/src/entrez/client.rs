//! HTTP client for NCBI E-utilities
//!
//! Every request carries the caller identity from [`EntrezConfig`]; there is
//! no process-wide state, so clients with different identities can coexist.

use crate::entrez::types::{
    ELinkResponse, ESearchResponse, ESummaryResponse, GeneDocSum, GeneSummary,
};
use crate::entrez::{endpoints, EntrezError, EntrezResult, GeneDatabase};
use crate::error::{CliError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, trace};

// ============================================================================
// Client Constants
// ============================================================================

/// Public E-utilities base URL
pub const DEFAULT_EUTILS_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

/// Tool name reported to NCBI alongside the contact email
pub const DEFAULT_TOOL: &str = "locus";

/// Default timeout for a single E-utilities request in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Longest slice of an unparsable error body kept in messages
const MAX_ERROR_BODY: usize = 200;

/// Connection settings and caller identity for [`EntrezClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntrezConfig {
    /// E-utilities base URL (without the `*.fcgi` part)
    pub base_url: String,

    /// Contact email NCBI requires from every caller
    pub email: String,

    /// Tool name sent with every request
    pub tool: String,

    /// Optional API key raising the service's request allowance
    pub api_key: Option<String>,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl EntrezConfig {
    /// Configuration for the public service identified by `email`
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_EUTILS_URL.to_string(),
            email: email.into(),
            tool: DEFAULT_TOOL.to_string(),
            api_key: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    pub fn with_api_key(mut self, api_key: Option<String>) -> Self {
        self.api_key = api_key.filter(|key| !key.trim().is_empty());
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Validate configuration
    pub fn validate(&self) -> std::result::Result<(), String> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err("NCBI contact email cannot be empty".to_string());
        }

        if !email.contains('@') {
            return Err(format!("'{}' is not an email address", email));
        }

        if self.base_url.trim().is_empty() {
            return Err("E-utilities URL cannot be empty".to_string());
        }

        if self.tool.trim().is_empty() {
            return Err("Tool name cannot be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

/// E-utilities client backed by `reqwest`
pub struct EntrezClient {
    client: Client,
    config: EntrezConfig,
}

impl EntrezClient {
    /// Create a new client
    pub fn new(config: EntrezConfig) -> Result<Self> {
        config.validate().map_err(CliError::config)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("locus/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Get the configuration
    pub fn config(&self) -> &EntrezConfig {
        &self.config
    }

    fn identity(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("email", self.config.email.as_str()),
            ("tool", self.config.tool.as_str()),
        ];
        if let Some(key) = &self.config.api_key {
            params.push(("api_key", key.as_str()));
        }
        params
    }

    /// Issue a GET and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        operation: &'static str,
        url: &str,
        params: &[(&'static str, String)],
    ) -> EntrezResult<T> {
        debug!(operation, url, params = ?params, "Calling E-utilities");

        let response = self
            .client
            .get(url)
            .query(&self.identity())
            .query(params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        trace!(operation, status = status.as_u16(), body = %body, "E-utilities response");

        if !status.is_success() {
            return Err(EntrezError::Status {
                operation,
                status: status.as_u16(),
                message: error_body_message(&body)
                    .unwrap_or_else(|| status.canonical_reason().unwrap_or("").to_string()),
            });
        }

        serde_json::from_str(&body).map_err(|e| EntrezError::Malformed {
            operation,
            message: e.to_string(),
        })
    }

    /// Raw `elink` from nuccore to gene
    pub async fn elink(&self, accession: &str) -> EntrezResult<ELinkResponse> {
        let url = endpoints::elink_url(&self.config.base_url);
        self.get_json("elink", &url, &endpoints::elink_params(accession))
            .await
    }

    /// Raw `esearch` of the gene database by name
    pub async fn esearch(&self, symbol: &str) -> EntrezResult<ESearchResponse> {
        let url = endpoints::esearch_url(&self.config.base_url);
        self.get_json("esearch", &url, &endpoints::esearch_params(symbol))
            .await
    }

    /// Raw `esummary` for one gene
    pub async fn esummary(&self, gene_id: &str) -> EntrezResult<ESummaryResponse> {
        let url = endpoints::esummary_url(&self.config.base_url);
        self.get_json("esummary", &url, &endpoints::esummary_params(gene_id))
            .await
    }
}

#[async_trait]
impl GeneDatabase for EntrezClient {
    async fn link_to_gene(&self, accession: &str) -> EntrezResult<Vec<String>> {
        let response = self.elink(accession).await?;

        if let Some(message) = response.error_message() {
            return Err(EntrezError::Service {
                operation: "elink",
                message: message.to_string(),
            });
        }

        Ok(response.linked_ids())
    }

    async fn search_gene(&self, symbol: &str) -> EntrezResult<Vec<String>> {
        let response = self.esearch(symbol).await?;

        if let Some(message) = response.error {
            return Err(EntrezError::Service {
                operation: "esearch",
                message,
            });
        }

        let result = response.esearchresult.ok_or_else(|| EntrezError::Malformed {
            operation: "esearch",
            message: "missing 'esearchresult'".to_string(),
        })?;

        if let Some(message) = result.error {
            return Err(EntrezError::Service {
                operation: "esearch",
                message,
            });
        }

        Ok(result.idlist)
    }

    async fn gene_summary(&self, gene_id: &str) -> EntrezResult<GeneSummary> {
        let response = self.esummary(gene_id).await?;
        parse_gene_summary(response, gene_id)
    }
}

/// Pick the document for `gene_id` out of an esummary response
pub fn parse_gene_summary(response: ESummaryResponse, gene_id: &str) -> EntrezResult<GeneSummary> {
    if let Some(message) = response.error {
        return Err(EntrezError::Service {
            operation: "esummary",
            message,
        });
    }

    let malformed = |message: String| EntrezError::Malformed {
        operation: "esummary",
        message,
    };

    let mut result = response
        .result
        .ok_or_else(|| malformed("missing 'result'".to_string()))?;

    let document = result
        .remove(gene_id)
        .ok_or_else(|| malformed(format!("no document for gene {}", gene_id)))?;

    let doc: GeneDocSum =
        serde_json::from_value(document).map_err(|e| malformed(e.to_string()))?;

    if let Some(message) = doc.error {
        return Err(EntrezError::Service {
            operation: "esummary",
            message,
        });
    }

    let uid = if doc.uid.is_empty() {
        gene_id.to_string()
    } else {
        doc.uid
    };

    let name = doc.name.ok_or_else(|| EntrezError::MissingField {
        uid: uid.clone(),
        field: "Name",
    })?;

    let description = doc.description.ok_or_else(|| EntrezError::MissingField {
        uid: uid.clone(),
        field: "Description",
    })?;

    Ok(GeneSummary {
        uid,
        name,
        description,
        nomenclature_symbol: non_empty(doc.nomenclaturesymbol),
        gene_type: non_empty(doc.genetype),
        organism: non_empty(doc.organism.and_then(|organism| organism.scientificname)),
        chromosome: non_empty(doc.chromosome),
        map_location: non_empty(doc.maplocation),
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Extract a readable message from an error response body
fn error_body_message(body: &str) -> Option<String> {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(message) = json
            .get("error")
            .or_else(|| json.get("ERROR"))
            .and_then(|value| value.as_str())
        {
            return Some(message.to_string());
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    Some(trimmed.chars().take(MAX_ERROR_BODY).collect())
}
