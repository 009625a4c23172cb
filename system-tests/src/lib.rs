// system-tests/src/lib.rs
// ============================================================================
// Module: Object API System Tests Library
// Description: Shared configuration for conformance test scenarios.
// Purpose: Provide common utilities for the system-test binaries.
// Dependencies: std
// ============================================================================

//! ## Overview
//! This crate hosts the shared configuration layer used by the conformance
//! test binaries in `system-tests/tests`. The suites themselves live in the
//! `tests` directory and drive the objects API through `object-api-client`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;
