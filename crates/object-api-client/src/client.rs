// crates/object-api-client/src/client.rs
// ============================================================================
// Module: Objects HTTP Client
// Description: Async CRUD operations against the objects REST API.
// Purpose: Issue list/create/fetch/update/delete calls with a status guard.
// Dependencies: reqwest, serde_json, url
// ============================================================================

//! ## Overview
//! [`ObjectsClient`] drives the five CRUD operations of the objects API. Each
//! operation is a linear send → await → status guard → decode sequence with
//! no retries; callers own the ordering between operations.
//! Invariants:
//! - Any non-2xx status fails closed before decoding is attempted.
//! - Decode failures name the expected target shape in their message.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::time::Duration;

use reqwest::Client;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::ApiClientError;
use crate::record::DeleteReceipt;
use crate::record::Record;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base endpoint of the public objects API.
pub const DEFAULT_BASE_URL: &str = "https://api.restful-api.dev/";

/// Collection path under the base URL.
const OBJECTS_PATH: &str = "objects";

/// User agent string for outbound requests.
const USER_AGENT: &str = "object-api-conformance/0.1";

// ============================================================================
// SECTION: Client
// ============================================================================

/// Async client for the objects REST API.
///
/// # Invariants
/// - One client per scenario; clients hold no mutable state.
/// - The base URL is validated at construction time.
#[derive(Debug, Clone)]
pub struct ObjectsClient {
    /// Validated base URL all request paths are joined against.
    base_url: Url,
    /// HTTP client used for outbound requests.
    client: Client,
}

impl ObjectsClient {
    /// Creates a client against the public API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn new(timeout: Duration) -> Result<Self, ApiClientError> {
        Self::with_base_url(DEFAULT_BASE_URL, timeout)
    }

    /// Creates a client against an arbitrary base URL.
    ///
    /// Used by the system-tests to point at a local stub transport or at an
    /// environment-supplied endpoint override.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::InvalidBaseUrl`] for unparseable base URLs
    /// and [`ApiClientError::ClientBuild`] when the HTTP client cannot be
    /// constructed.
    pub fn with_base_url(base_url: &str, timeout: Duration) -> Result<Self, ApiClientError> {
        let base_url = parse_base_url(base_url)?;
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|err| ApiClientError::ClientBuild(err.to_string()))?;
        Ok(Self {
            base_url,
            client,
        })
    }

    /// Returns the base URL this client targets.
    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Lists the full record collection.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure, non-success status,
    /// or a body that cannot be decoded as a list of records.
    pub async fn list(&self) -> Result<Vec<Record>, ApiClientError> {
        let url = self.collection_url()?;
        let body = self.send(self.client.get(url.clone()), &url).await?;
        decode(&body, "a list of records")
    }

    /// Creates a record; the server assigns the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure, non-success status,
    /// or a body that cannot be decoded as a record.
    pub async fn create(&self, record: &Record) -> Result<Record, ApiClientError> {
        let url = self.collection_url()?;
        let body = self.send(self.client.post(url.clone()).json(record), &url).await?;
        decode(&body, "a record")
    }

    /// Fetches a record by its server-assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError::UnexpectedStatus`] with status 404 when the
    /// identifier is unknown, and the usual transport/decode failures
    /// otherwise.
    pub async fn fetch(&self, id: &str) -> Result<Record, ApiClientError> {
        let url = self.record_url(id)?;
        let body = self.send(self.client.get(url.clone()), &url).await?;
        decode(&body, "a record")
    }

    /// Replaces a record's name and data, preserving its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure, non-success status,
    /// or a body that cannot be decoded as a record.
    pub async fn update(&self, id: &str, record: &Record) -> Result<Record, ApiClientError> {
        let url = self.record_url(id)?;
        let body = self.send(self.client.put(url.clone()).json(record), &url).await?;
        decode(&body, "a record")
    }

    /// Deletes a record by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ApiClientError`] on transport failure, non-success status,
    /// or a body that cannot be decoded as a delete receipt.
    pub async fn delete(&self, id: &str) -> Result<DeleteReceipt, ApiClientError> {
        let url = self.record_url(id)?;
        let body = self.send(self.client.delete(url.clone()), &url).await?;
        decode(&body, "a delete receipt")
    }

    /// Sends a request and applies the status guard.
    ///
    /// The body is read before the guard fires so status failures carry the
    /// server's diagnostic text.
    async fn send(&self, request: RequestBuilder, url: &Url) -> Result<String, ApiClientError> {
        let response = request.send().await.map_err(|err| ApiClientError::Transport {
            url: url.to_string(),
            source: err,
        })?;
        let status = response.status();
        let body = response.text().await.map_err(|err| ApiClientError::Transport {
            url: url.to_string(),
            source: err,
        })?;
        if !status.is_success() {
            return Err(ApiClientError::UnexpectedStatus {
                url: url.to_string(),
                status,
                body,
            });
        }
        Ok(body)
    }

    /// Returns the collection URL.
    fn collection_url(&self) -> Result<Url, ApiClientError> {
        join_url(&self.base_url, OBJECTS_PATH)
    }

    /// Returns the URL addressing a single record.
    fn record_url(&self, id: &str) -> Result<Url, ApiClientError> {
        join_url(&self.base_url, &format!("{OBJECTS_PATH}/{id}"))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Validates a base URL string.
fn parse_base_url(raw: &str) -> Result<Url, ApiClientError> {
    let url = Url::parse(raw).map_err(|err| ApiClientError::InvalidBaseUrl {
        url: raw.to_string(),
        detail: err.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(ApiClientError::InvalidBaseUrl {
            url: raw.to_string(),
            detail: "URL cannot serve as a base".to_string(),
        });
    }
    Ok(url)
}

/// Joins a path onto the base URL.
fn join_url(base: &Url, path: &str) -> Result<Url, ApiClientError> {
    base.join(path).map_err(|err| ApiClientError::InvalidBaseUrl {
        url: base.to_string(),
        detail: err.to_string(),
    })
}

/// Decodes a response body, naming the expected shape on failure.
fn decode<T: DeserializeOwned>(body: &str, expected: &'static str) -> Result<T, ApiClientError> {
    serde_json::from_str(body).map_err(|err| ApiClientError::Decode {
        expected,
        detail: err.to_string(),
    })
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
