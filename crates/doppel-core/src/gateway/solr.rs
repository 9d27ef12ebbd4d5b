//! Solr search gateway
//!
//! Executes compiled queries against a Solr core's select handler and
//! maps the JSON envelope to the domain result set. Scoping the query
//! to exclude the originating record happens here, not in the query
//! compiler.

use super::SearchGateway;
use crate::error::SearchError;
use doppel_domain::{Item, ResultSet, SearchHit};
use serde::Deserialize;
use std::time::Duration;
use url::Url;

/// Solr select response wrapper
#[derive(Debug, Deserialize)]
struct SolrResponse {
    response: SolrResponseBody,
}

#[derive(Debug, Deserialize)]
struct SolrResponseBody {
    #[serde(rename = "numFound")]
    num_found: u64,
    docs: Vec<SolrDocument>,
}

/// Single document from Solr search results
#[derive(Debug, Deserialize)]
struct SolrDocument {
    id: String,
    score: Option<f32>,
}

pub struct SolrGateway {
    client: reqwest::blocking::Client,
    base_url: String,
    rows: u32,
}

impl SolrGateway {
    /// Create a gateway for a Solr core URL,
    /// e.g. `http://localhost:8983/solr/dedup`
    pub fn new(base_url: impl Into<String>, rows: u32) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("doppel/0.1")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.into(),
            rows,
        }
    }

    /// Build the select URL for a query, excluding the item itself
    fn select_url(&self, item: &Item, query: &str) -> Result<Url, SearchError> {
        let url = format!("{}/select", self.base_url.trim_end_matches('/'));
        let rows = self.rows.to_string();
        let exclude_self = format!("-id:\"{}\"", item.id);
        Url::parse_with_params(
            &url,
            &[
                ("q", query),
                ("fq", exclude_self.as_str()),
                ("fl", "id,score"),
                ("rows", rows.as_str()),
                ("wt", "json"),
            ],
        )
        .map_err(|_| SearchError::Http {
            message: format!("Invalid Solr URL: {}", url),
        })
    }

    /// Parse a Solr select JSON body into a result set
    pub fn parse_response(json: &str) -> Result<ResultSet, SearchError> {
        let response: SolrResponse =
            serde_json::from_str(json).map_err(|e| SearchError::InvalidResponse {
                message: format!("Invalid Solr JSON: {}", e),
            })?;

        Ok(ResultSet {
            num_found: response.response.num_found,
            hits: response
                .response
                .docs
                .into_iter()
                .map(|doc| SearchHit {
                    id: doc.id,
                    score: doc.score,
                })
                .collect(),
        })
    }
}

impl SearchGateway for SolrGateway {
    fn search(&self, item: &Item, query: &str) -> Result<ResultSet, SearchError> {
        let url = self.select_url(item, query)?;
        let response = self
            .client
            .get(url)
            .send()
            .map_err(|e| SearchError::Http {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().map_err(|e| SearchError::Http {
            message: e.to_string(),
        })?;

        if !status.is_success() {
            tracing::warn!("Solr returned {} for duplicate query: {}", status, query);
            return Err(SearchError::Backend {
                message: format!("Solr returned status {}", status),
            });
        }

        Self::parse_response(&body)
    }
}
