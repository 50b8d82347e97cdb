//! Identifier normalization for document-store records.
//!
//! Backend records carry ArangoDB bookkeeping: a collection-qualified `_id`
//! (`"users/123"`), a bare `_key` (`"123"`), and often an entity-specific
//! field such as `userId`. [`normalize_identifiers`] collapses whichever of
//! these are present into one canonical `id` and one entity-specific id.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Document-store bookkeeping fields. Never surfaced in a normalized entity.
pub const BOOKKEEPING_FIELDS: [&str; 6] = ["_id", "_key", "_rev", "_oldRev", "_from", "_to"];

/// Returns true if `field` is one of [`BOOKKEEPING_FIELDS`].
#[must_use]
pub fn is_bookkeeping(field: &str) -> bool {
    BOOKKEEPING_FIELDS.contains(&field)
}

/// A collection-qualified document identifier: `"<collection>/<key>"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocumentId(String);

impl DocumentId {
    /// Builds `"<collection>/<key>"`.
    #[must_use]
    pub fn new(collection: &str, key: &str) -> Self {
        Self(format!("{collection}/{key}"))
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The canonical identifiers derived from a raw record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Identifiers {
    /// Canonical id, usually collection-qualified.
    pub id: Option<String>,
    /// Entity-specific id (the value stored under e.g. `userId`).
    pub entity_id: Option<String>,
}

/// Derives the canonical `id` and entity-specific id of `record`.
///
/// First match wins per field:
/// - `id`: `_id`, then `id`, then `"<collection>/<_key>"`, then
///   `"<collection>/<record[id_field]>"`.
/// - entity id: `_key`, then `record[id_field]`.
///
/// Strings and numbers are accepted; `null` and empty strings count as
/// absent. When neither `_key` nor `id_field` is present the entity id is
/// left absent.
#[must_use]
pub fn normalize_identifiers(
    record: &Map<String, Value>,
    collection: &str,
    id_field: &str,
) -> Identifiers {
    let entity_id = identifier(record, "_key").or_else(|| identifier(record, id_field));
    let id = identifier(record, "_id")
        .or_else(|| identifier(record, "id"))
        .or_else(|| {
            entity_id
                .as_deref()
                .map(|key| DocumentId::new(collection, key).into_string())
        });

    Identifiers { id, entity_id }
}

fn identifier(record: &Map<String, Value>, field: &str) -> Option<String> {
    match record.get(field)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
