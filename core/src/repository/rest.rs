//! REST Table Client
//!
//! Talks to a PostgREST-style table API (`/rest/v1/{table}`) over HTTP.
//! Every request carries the API key and an explicit timeout; any transport
//! failure or non-2xx response surfaces as `BackendUnavailable`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};

use super::traits::{Filter, Row, TableClient};
use crate::domain::{DomainError, DomainResult};

/// Connection settings for the hosted table API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RestConfig {
    /// Project URL, e.g. `https://abc.supabase.co`
    pub url: String,
    /// Anonymous or service API key
    pub api_key: String,
    /// Upper bound for each request, connect included
    pub timeout: Duration,
}

impl RestConfig {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            timeout: Duration::from_secs(10),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// HTTP implementation of [`TableClient`]
pub struct RestTableClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl RestTableClient {
    /// Build a client for the configured project.
    pub fn new(config: &RestConfig) -> DomainResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| DomainError::BackendUnavailable(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            api_key: config.api_key.clone(),
        })
    }

    fn request(&self, method: Method, table: &str, filter: &Filter) -> RequestBuilder {
        let query: Vec<(String, String)> = filter
            .predicates()
            .iter()
            .map(|(column, value)| (column.clone(), format!("eq.{value}")))
            .collect();

        self.http
            .request(method, format!("{}/{}", self.base_url, table))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .query(&query)
    }

    /// Send a request and decode the JSON array it answers with.
    async fn send(&self, table: &str, request: RequestBuilder) -> DomainResult<Vec<Row>> {
        let response = request
            .send()
            .await
            .map_err(|e| DomainError::BackendUnavailable(format!("{table}: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DomainError::BackendUnavailable(format!("{table}: {e}")))?;

        if !status.is_success() {
            log::warn!("{} request failed with HTTP {}: {}", table, status, body);
            return Err(DomainError::BackendUnavailable(format!(
                "{table}: HTTP {status}: {body}"
            )));
        }

        if body.trim().is_empty() {
            return Ok(Vec::new());
        }

        serde_json::from_str(&body)
            .map_err(|e| DomainError::InvalidRow(format!("{table}: unexpected response body: {e}")))
    }
}

#[async_trait]
impl TableClient for RestTableClient {
    async fn select(&self, table: &str, columns: &str, filter: &Filter) -> DomainResult<Vec<Row>> {
        log::debug!("select {} from {} where {:?}", columns, table, filter.predicates());
        let request = self
            .request(Method::GET, table, filter)
            .query(&[("select", columns)]);
        self.send(table, request).await
    }

    async fn insert(&self, table: &str, row: Row) -> DomainResult<Vec<Row>> {
        log::debug!("insert into {}", table);
        let request = self
            .request(Method::POST, table, &Filter::all())
            .header("Prefer", "return=representation")
            .json(&[row]);
        self.send(table, request).await
    }

    async fn update(&self, table: &str, filter: &Filter, patch: Row) -> DomainResult<u64> {
        log::debug!("update {} where {:?}", table, filter.predicates());
        let request = self
            .request(Method::PATCH, table, filter)
            .header("Prefer", "return=representation")
            .json(&patch);
        Ok(self.send(table, request).await?.len() as u64)
    }

    async fn delete(&self, table: &str, filter: &Filter) -> DomainResult<u64> {
        log::debug!("delete from {} where {:?}", table, filter.predicates());
        let request = self
            .request(Method::DELETE, table, filter)
            .header("Prefer", "return=representation");
        Ok(self.send(table, request).await?.len() as u64)
    }
}
