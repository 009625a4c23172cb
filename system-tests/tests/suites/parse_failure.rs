// system-tests/tests/suites/parse_failure.rs
// ============================================================================
// Module: Parse Failure Tests
// Description: Negative scenarios driven through a loopback stub transport.
// Purpose: Verify decode and status failures surface as typed errors.
// Dependencies: system-tests helpers, object-api-client
// ============================================================================

//! ## Overview
//! The stub transport answers the list endpoint with crafted bodies: invalid
//! JSON (the single-quoted literal the public suite historically used), valid
//! JSON of the wrong shape, and a non-success status. In every case the call
//! succeeds at the transport level and the client must fail closed with a
//! typed error naming what went wrong.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use object_api_client::ApiClientError;
use object_api_client::ObjectsClient;
use reqwest::StatusCode;

use crate::helpers;
use helpers::api_stub::spawn_list_stub;
use helpers::artifacts::TestReporter;
use helpers::timeouts::DEFAULT_CALL_TIMEOUT;
use helpers::timeouts::resolve_timeout;

/// Substring every list decode failure must carry.
const LIST_DECODE_PHRASE: &str = "could not be converted to a list of records";

/// Single-quoted body: not valid JSON at all.
const SINGLE_QUOTED_BODY: &str = "{ 'invalid': 'json' }";

/// Valid JSON, but a single object where a list is expected.
const WRONG_SHAPE_BODY: &str = r#"{"invalid": "json"}"#;

fn stub_client(base_url: &str) -> Result<ObjectsClient, Box<dyn std::error::Error>> {
    Ok(ObjectsClient::with_base_url(base_url, resolve_timeout(DEFAULT_CALL_TIMEOUT))?)
}

#[tokio::test(flavor = "multi_thread")]
async fn list_with_invalid_json_body_fails_decode() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("list_with_invalid_json_body_fails_decode")?;
    let stub = spawn_list_stub(200, SINGLE_QUOTED_BODY).await?;
    let client = stub_client(stub.base_url())?;

    let outcome = client.list().await;
    let Err(error) = outcome else {
        return Err("list unexpectedly decoded an invalid JSON body".into());
    };
    if !matches!(error, ApiClientError::Decode { .. }) {
        return Err(format!("expected a decode failure, got: {error}").into());
    }
    if !error.to_string().contains(LIST_DECODE_PHRASE) {
        return Err(format!("decode message missing expected phrase: {error}").into());
    }
    if stub.hits() != 1 {
        return Err(format!("stub served {} requests, expected 1", stub.hits()).into());
    }

    reporter.finish(
        "pass",
        vec!["single-quoted body rejected with typed decode error".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_with_wrong_shape_body_fails_decode() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("list_with_wrong_shape_body_fails_decode")?;
    let stub = spawn_list_stub(200, WRONG_SHAPE_BODY).await?;
    let client = stub_client(stub.base_url())?;

    let outcome = client.list().await;
    let Err(error) = outcome else {
        return Err("list unexpectedly decoded an object as a list".into());
    };
    if !matches!(error, ApiClientError::Decode { .. }) {
        return Err(format!("expected a decode failure, got: {error}").into());
    }
    if !error.to_string().contains(LIST_DECODE_PHRASE) {
        return Err(format!("decode message missing expected phrase: {error}").into());
    }

    reporter.finish(
        "pass",
        vec!["wrong-shape body rejected with typed decode error".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}

#[tokio::test(flavor = "multi_thread")]
async fn list_with_error_status_fails_status_guard() -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = TestReporter::new("list_with_error_status_fails_status_guard")?;
    let stub = spawn_list_stub(500, r#"{"error": "boom"}"#).await?;
    let client = stub_client(stub.base_url())?;

    let outcome = client.list().await;
    let Err(error) = outcome else {
        return Err("list unexpectedly succeeded against a failing stub".into());
    };
    if error.status() != Some(StatusCode::INTERNAL_SERVER_ERROR) {
        return Err(format!("expected status 500 failure, got: {error}").into());
    }
    if !error.to_string().contains("boom") {
        return Err(format!("status failure lost the response body: {error}").into());
    }

    reporter.finish(
        "pass",
        vec!["non-success status failed closed before decoding".to_string()],
        vec!["summary.json".to_string(), "summary.md".to_string()],
    )?;
    Ok(())
}
