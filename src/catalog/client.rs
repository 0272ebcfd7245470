//! Catalog search HTTP client
//!
//! Issues a single `GET /search?q=<term>` per lookup and maps each result
//! item into a domain [`Song`]. Empty terms never hit the network.

use super::{adapter, dto};
use crate::model::Song;

/// Default catalog endpoint (Deezer-compatible search API, no auth needed)
const DEFAULT_BASE_URL: &str = "https://api.deezer.com";

/// Errors from the catalog search
#[derive(Debug, Clone, thiserror::Error)]
pub enum CatalogError {
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),
}

/// Catalog search API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client against the default catalog endpoint
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client with a custom base URL (tests, self-hosted mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Search the catalog for songs matching `term`.
    ///
    /// A term that is empty after trimming short-circuits to an empty
    /// result without issuing a network call.
    pub async fn search(&self, term: &str) -> Result<Vec<Song>, CatalogError> {
        let term = term.trim();
        if term.is_empty() {
            return Ok(Vec::new());
        }

        let url = format!("{}/search?q={}", self.base_url, urlencoding::encode(term));

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Unavailable(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let body = response
            .json::<dto::SearchResponse>()
            .await
            .map_err(|e| CatalogError::Unavailable(e.to_string()))?;

        Ok(body.data.into_iter().map(adapter::to_song).collect())
    }
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CatalogClient::new();
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_with_custom_url() {
        let client = CatalogClient::with_base_url("http://localhost:8080");
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[tokio::test]
    async fn test_blank_term_short_circuits() {
        // Unroutable base URL: any network attempt would error, so an Ok
        // here proves no request was made.
        let client = CatalogClient::with_base_url("http://127.0.0.1:1");
        let results = client.search("   ").await.expect("no network call expected");
        assert!(results.is_empty());
    }
}
