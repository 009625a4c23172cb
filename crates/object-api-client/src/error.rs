// crates/object-api-client/src/error.rs
// ============================================================================
// Module: Object API Client Errors
// Description: Error taxonomy for object API calls.
// Purpose: Distinguish transport, status, and decode failures for tests.
// Dependencies: reqwest, thiserror
// ============================================================================

//! ## Overview
//! Every client operation fails with one of these variants. The taxonomy is
//! deliberately small: transport failures, status-guard failures, and decode
//! failures, plus two construction-time variants.
//! Invariants:
//! - Variants are stable for programmatic handling by the test suites.
//! - [`ApiClientError::Decode`] messages always name the expected shape.

// ============================================================================
// SECTION: Imports
// ============================================================================

use reqwest::StatusCode;
use thiserror::Error;

// ============================================================================
// SECTION: Error Types
// ============================================================================

/// Errors emitted by [`crate::ObjectsClient`] operations.
///
/// # Invariants
/// - `UnexpectedStatus` preserves the offending status and body verbatim.
/// - `Decode` display text contains "could not be converted to {expected}".
#[derive(Debug, Error)]
pub enum ApiClientError {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build http client: {0}")]
    ClientBuild(String),
    /// The configured base URL is not a valid absolute URL.
    #[error("invalid base url `{url}`: {detail}")]
    InvalidBaseUrl {
        /// Offending URL text.
        url: String,
        /// Parse failure detail.
        detail: String,
    },
    /// The request failed before a response was received.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// Request URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// A real call returned a non-success status.
    #[error("unexpected status {status} from {url}: {body}")]
    UnexpectedStatus {
        /// Request URL.
        url: String,
        /// HTTP status returned by the server.
        status: StatusCode,
        /// Response body, preserved for diagnostics.
        body: String,
    },
    /// The response body could not be converted into the expected shape.
    #[error("response body could not be converted to {expected}: {detail}")]
    Decode {
        /// Human-readable name of the expected target shape.
        expected: &'static str,
        /// Underlying deserialization failure detail.
        detail: String,
    },
}

impl ApiClientError {
    /// Returns the HTTP status for status-guard failures.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::UnexpectedStatus {
                status, ..
            } => Some(*status),
            _ => None,
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
