// crates/object-api-client/src/lib.rs
// ============================================================================
// Module: Object API Client Library
// Description: Typed async client for the public objects REST API.
// Purpose: Provide the record model, error taxonomy, and HTTP operations
//          used by the conformance system-tests.
// Dependencies: reqwest, serde, serde_json, thiserror, url
// ============================================================================

//! ## Overview
//! This crate wraps the public objects REST API (`https://api.restful-api.dev/`)
//! behind a typed async client. Responses are decoded into [`Record`] values
//! and every failure mode is surfaced as a typed [`ApiClientError`].
//! Invariants:
//! - Non-2xx statuses on real calls fail closed as [`ApiClientError::UnexpectedStatus`].
//! - Body-to-shape conversion failures name the expected target shape.
//!
//! Security posture: response bodies are untrusted input; decoding is strict
//! and bounded by the configured request timeout.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod client;
pub mod error;
pub mod record;

// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use client::DEFAULT_BASE_URL;
pub use client::ObjectsClient;
pub use error::ApiClientError;
pub use record::DeleteReceipt;
pub use record::Record;
