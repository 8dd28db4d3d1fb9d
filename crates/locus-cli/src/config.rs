//! Configuration management for Locus CLI
//!
//! Handles NCBI identity, service URL, timeouts and request pacing.

use crate::batch::DEFAULT_REQUEST_DELAY_MS;
use crate::entrez::client::{DEFAULT_EUTILS_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_TOOL};
use crate::entrez::EntrezConfig;
use crate::error::{CliError, Result};
use std::time::Duration;

/// CLI configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// E-utilities base URL
    pub eutils_url: String,

    /// Contact email sent to NCBI
    pub email: Option<String>,

    /// NCBI API key
    pub api_key: Option<String>,

    /// Tool name sent to NCBI
    pub tool: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,

    /// Pause between consecutive identifiers in milliseconds
    pub request_delay_ms: u64,
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self {
            eutils_url: DEFAULT_EUTILS_URL.to_string(),
            email: None,
            api_key: None,
            tool: DEFAULT_TOOL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            request_delay_ms: DEFAULT_REQUEST_DELAY_MS,
        }
    }

    /// Load config from environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::new();

        if let Ok(url) = std::env::var("NCBI_EUTILS_URL") {
            config.set_eutils_url(url);
        }

        if let Ok(email) = std::env::var("NCBI_EMAIL") {
            config.set_email(Some(email));
        }

        if let Ok(key) = std::env::var("NCBI_API_KEY") {
            config.set_api_key(Some(key));
        }

        if let Ok(timeout) = std::env::var("LOCUS_TIMEOUT_SECS") {
            config.timeout_secs = parse_number("LOCUS_TIMEOUT_SECS", &timeout)?;
        }

        if let Ok(delay) = std::env::var("LOCUS_DELAY_MS") {
            config.request_delay_ms = parse_number("LOCUS_DELAY_MS", &delay)?;
        }

        Ok(config)
    }

    pub fn set_eutils_url(&mut self, url: String) {
        self.eutils_url = url;
    }

    /// Set the contact email; blank values unset it
    pub fn set_email(&mut self, email: Option<String>) {
        self.email = non_blank(email);
    }

    /// Set the API key; blank values unset it
    pub fn set_api_key(&mut self, api_key: Option<String>) {
        self.api_key = non_blank(api_key);
    }

    pub fn set_request_delay_ms(&mut self, delay_ms: u64) {
        self.request_delay_ms = delay_ms;
    }

    /// Pause between consecutive identifiers
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    /// Client settings for this configuration
    ///
    /// Fails when no contact email is configured.
    pub fn entrez_config(&self) -> Result<EntrezConfig> {
        let email = self.email.clone().ok_or(CliError::MissingEmail)?;

        Ok(EntrezConfig::new(email)
            .with_base_url(self.eutils_url.clone())
            .with_tool(self.tool.clone())
            .with_api_key(self.api_key.clone())
            .with_timeout_secs(self.timeout_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_number(name: &str, value: &str) -> Result<u64> {
    value
        .trim()
        .parse()
        .map_err(|_| CliError::config(format!("{} must be a whole number, got '{}'", name, value)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::new();
        assert_eq!(config.eutils_url, DEFAULT_EUTILS_URL);
        assert_eq!(config.request_delay(), Duration::from_millis(340));
        assert_eq!(config.timeout_secs, 30);
        assert!(config.email.is_none());
    }

    #[test]
    fn test_entrez_config_requires_email() {
        let err = Config::new().entrez_config().unwrap_err();
        assert!(matches!(err, CliError::MissingEmail));
    }

    #[test]
    fn test_entrez_config_carries_identity() {
        let mut config = Config::new();
        config.set_email(Some(" curator@example.org ".to_string()));
        config.set_api_key(Some("k3y".to_string()));
        config.set_eutils_url("http://127.0.0.1:9999".to_string());

        let entrez = config.entrez_config().unwrap();
        assert_eq!(entrez.email, "curator@example.org");
        assert_eq!(entrez.api_key.as_deref(), Some("k3y"));
        assert_eq!(entrez.base_url, "http://127.0.0.1:9999");
        assert_eq!(entrez.tool, "locus");
    }

    #[test]
    fn test_blank_values_unset() {
        let mut config = Config::new();
        config.set_email(Some("   ".to_string()));
        config.set_api_key(Some(String::new()));
        assert!(config.email.is_none());
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("LOCUS_DELAY_MS", " 0 ").unwrap(), 0);
        assert!(parse_number("LOCUS_DELAY_MS", "fast").is_err());
    }
}
