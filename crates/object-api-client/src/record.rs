// crates/object-api-client/src/record.rs
// ============================================================================
// Module: Object API Record Model
// Description: The generic entity exchanged with the objects API.
// Purpose: Serialize requests and decode responses with a loose data payload.
// Dependencies: serde, serde_jcs, serde_json
// ============================================================================

//! ## Overview
//! The objects API exchanges records with three fields: a server-assigned
//! `id`, a `name`, and an arbitrary JSON `data` payload (string, object,
//! null, anything). The payload stays a [`serde_json::Value`]; comparison in
//! tests goes through [`Record::canonical_data`] so nested objects compare as
//! stable strings regardless of key order.
//! Invariants:
//! - `id` is omitted from request bodies when absent.
//! - Missing or null `data` decodes to [`serde_json::Value::Null`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

// ============================================================================
// SECTION: Record Type
// ============================================================================

/// The generic entity exchanged with the objects API.
///
/// # Invariants
/// - `id` is server-assigned; client-constructed records leave it `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Server-assigned identifier, absent until the record is created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Record name.
    pub name: String,
    /// Arbitrary JSON payload; the live API returns records without one.
    #[serde(default)]
    pub data: Value,
}

impl Record {
    /// Creates a record with no identifier, ready to send as a create request.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self {
            id: None,
            name: name.into(),
            data,
        }
    }

    /// Returns the `data` payload rendered as canonical JSON text (JCS).
    ///
    /// Canonicalization makes object payloads key-order independent; if the
    /// payload cannot be canonicalized the plain serde rendering is used.
    #[must_use]
    pub fn canonical_data(&self) -> String {
        serde_jcs::to_string(&self.data).map_or_else(|_| self.data.to_string(), |text| text)
    }
}

// ============================================================================
// SECTION: Delete Receipt
// ============================================================================

/// Confirmation body returned by the API for a successful delete.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeleteReceipt {
    /// Informational confirmation message.
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
#[path = "record_tests.rs"]
mod record_tests;
