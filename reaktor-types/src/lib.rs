//! Core record types for Reaktor.
//!
//! This crate defines the backend-agnostic building blocks that every
//! entity validator depends on:
//! - [`Record`], the raw field map received from the backend
//! - Identifier normalization for document-store records (`_id`, `_key`,
//!   entity-specific id fields)
//! - Timestamp normalization (ISO-8601 strings or epoch milliseconds)
//!
//! Entity-specific shapes live in `reaktor-model`, not here.

mod ids;
mod timestamp;

pub use ids::{BOOKKEEPING_FIELDS, DocumentId, Identifiers, is_bookkeeping, normalize_identifiers};
pub use timestamp::{TimestampError, normalize_timestamp, parse_iso8601};

/// A raw, unvalidated record: field name to JSON value.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Returns a short name for the JSON type of `value`, for error messages.
pub fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
