//! Summary encoding for transport layers.
//!
//! JSON is what error-report backends accept; `MessagePack` is offered for
//! compact local spooling. Both use named fields.

use breadcrumbs_foundation::{Error, Result};

use crate::summary::Summary;

/// Encodes a summary as compact JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(summary: &Summary) -> Result<String> {
    serde_json::to_string(summary).map_err(|e| Error::serialization(e.to_string()))
}

/// Encodes a summary as indented JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(summary: &Summary) -> Result<String> {
    serde_json::to_string_pretty(summary).map_err(|e| Error::serialization(e.to_string()))
}

/// Decodes a summary from JSON.
///
/// # Errors
///
/// Returns an error if the input is not a valid summary.
pub fn from_json(json: &str) -> Result<Summary> {
    serde_json::from_str(json).map_err(|e| Error::deserialization(e.to_string()))
}

/// Encodes a summary as `MessagePack`.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_msgpack(summary: &Summary) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(summary).map_err(|e| Error::serialization(e.to_string()))
}

/// Decodes a summary from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid summary.
pub fn from_msgpack(bytes: &[u8]) -> Result<Summary> {
    rmp_serde::from_slice(bytes).map_err(|e| Error::deserialization(e.to_string()))
}
