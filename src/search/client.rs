use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::time::Duration;
use thiserror::Error;

use crate::core::types::HymnalId;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("Search request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Search service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Search service API key is not configured")]
    MissingApiKey,
}

/// Fields the search index stores per hymn that matter here
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HitDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hymn_book_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hymn_book_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default)]
    pub document: HitDocument,
}

/// Keyword search result page
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Total number of matching documents
    #[serde(default)]
    pub found: u64,

    #[serde(default)]
    pub hits: Vec<SearchHit>,
}

impl SearchResponse {
    /// Distinct, non-empty hymnal ids referenced by the hits, in first-seen order
    #[must_use]
    pub fn hymnal_ids(&self) -> Vec<HymnalId> {
        let mut seen: HashSet<&str> = HashSet::new();
        self.hits
            .iter()
            .filter_map(|hit| hit.document.hymn_book_id.as_deref())
            .filter(|id| !id.is_empty() && seen.insert(*id))
            .map(HymnalId::new)
            .collect()
    }
}

/// Typo-tolerant keyword search over indexed hymns
pub trait KeywordSearch {
    /// Run one query, returning at most `per_page` hits.
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, times out, or answers
    /// with an unexpected status or body.
    fn search(&self, query: &str, per_page: usize) -> Result<SearchResponse, SearchError>;
}

/// Connection settings for the Typesense search service
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub host: String,
    pub port: u16,
    /// "http" or "https"
    pub protocol: String,
    pub api_key: String,
    /// Collection holding one document per hymn
    pub collection: String,
    pub connection_timeout: Duration,
    /// Upper bound for the whole request
    pub request_timeout: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 8108,
            protocol: "http".to_string(),
            api_key: String::new(),
            collection: "hymns".to_string(),
            connection_timeout: Duration::from_secs(2),
            request_timeout: Duration::from_secs(5),
        }
    }
}

impl SearchConfig {
    pub fn search_url(&self) -> String {
        format!(
            "{}://{}:{}/collections/{}/documents/search",
            self.protocol, self.host, self.port, self.collection
        )
    }
}

/// Fields a query is matched against
const QUERY_BY: &str = "title,text,hymn_book_name,owner_name";

/// Blocking client for the Typesense documents search endpoint
pub struct TypesenseClient {
    http: reqwest::blocking::Client,
    config: SearchConfig,
}

impl TypesenseClient {
    /// # Errors
    ///
    /// Returns an error if no API key is configured or the HTTP client
    /// cannot be built.
    pub fn new(config: SearchConfig) -> Result<Self, SearchError> {
        if config.api_key.is_empty() {
            return Err(SearchError::MissingApiKey);
        }

        let http = reqwest::blocking::Client::builder()
            .connect_timeout(config.connection_timeout)
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self { http, config })
    }
}

impl KeywordSearch for TypesenseClient {
    fn search(&self, query: &str, per_page: usize) -> Result<SearchResponse, SearchError> {
        let per_page = per_page.to_string();
        let response = self
            .http
            .get(self.config.search_url())
            .header("X-TYPESENSE-API-KEY", &self.config.api_key)
            .query(&[
                ("q", query),
                ("query_by", QUERY_BY),
                ("per_page", per_page.as_str()),
                ("page", "1"),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: SearchResponse = response.json()?;
        tracing::debug!(
            "Keyword search '{}' found {} documents ({} hits returned)",
            query,
            parsed.found,
            parsed.hits.len()
        );
        Ok(parsed)
    }
}
