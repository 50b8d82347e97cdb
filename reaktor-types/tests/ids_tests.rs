use proptest::prelude::*;
use reaktor_types::{DocumentId, Identifiers, Record, is_bookkeeping, normalize_identifiers};
use serde_json::json;

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(map) => map,
        _ => panic!("test record must be an object"),
    }
}

// ── Precedence ───────────────────────────────────────────────────

#[test]
fn underscore_id_wins_over_everything() {
    let r = record(json!({"_id": "users/a", "id": "users/b", "_key": "c", "userId": "d"}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(ids.id.as_deref(), Some("users/a"));
    assert_eq!(ids.entity_id.as_deref(), Some("c"));
}

#[test]
fn plain_id_used_when_underscore_id_missing() {
    let r = record(json!({"id": "users/b", "_key": "c"}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(ids.id.as_deref(), Some("users/b"));
    assert_eq!(ids.entity_id.as_deref(), Some("c"));
}

#[test]
fn key_qualifies_id_with_collection() {
    let r = record(json!({"_key": "123"}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(
        ids,
        Identifiers {
            id: Some("users/123".into()),
            entity_id: Some("123".into()),
        }
    );
}

#[test]
fn key_wins_over_entity_id_field() {
    let r = record(json!({"_key": "k", "userId": "u"}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(ids.id.as_deref(), Some("users/k"));
    assert_eq!(ids.entity_id.as_deref(), Some("k"));
}

#[test]
fn entity_id_field_used_without_key() {
    let r = record(json!({"postId": "42"}));
    let ids = normalize_identifiers(&r, "posts", "postId");
    assert_eq!(ids.id.as_deref(), Some("posts/42"));
    assert_eq!(ids.entity_id.as_deref(), Some("42"));
}

#[test]
fn only_underscore_id_leaves_entity_id_absent() {
    let r = record(json!({"_id": "users/9"}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(ids.id.as_deref(), Some("users/9"));
    assert_eq!(ids.entity_id, None);
}

#[test]
fn numeric_identifiers_are_rendered() {
    let r = record(json!({"userId": 77}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(ids.id.as_deref(), Some("users/77"));
    assert_eq!(ids.entity_id.as_deref(), Some("77"));
}

#[test]
fn empty_and_null_identifiers_are_absent() {
    let r = record(json!({"_id": "", "id": null, "_key": "", "userId": null}));
    let ids = normalize_identifiers(&r, "users", "userId");
    assert_eq!(ids, Identifiers::default());
}

// ── Bookkeeping ──────────────────────────────────────────────────

#[test]
fn bookkeeping_detection() {
    assert!(is_bookkeeping("_rev"));
    assert!(!is_bookkeeping("id"));
    assert!(!is_bookkeeping("_custom"));
}

// ── DocumentId ───────────────────────────────────────────────────

#[test]
fn document_id_joins_collection_and_key() {
    let id = DocumentId::new("users", "123");
    assert_eq!(id.to_string(), "users/123");
    assert_eq!(id.into_string(), "users/123");
}

// ── Properties ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn key_only_records_qualify_with_collection(key in "[a-zA-Z0-9_-]{1,32}") {
        let r = record(json!({"_key": key.clone()}));
        let ids = normalize_identifiers(&r, "events", "eventId");
        prop_assert_eq!(ids.id, Some(format!("events/{key}")));
        prop_assert_eq!(ids.entity_id, Some(key));
    }

    #[test]
    fn underscore_id_only_records_keep_it(key in "[a-z0-9]{1,16}") {
        let qualified = format!("users/{key}");
        let r = record(json!({"_id": qualified.clone()}));
        let ids = normalize_identifiers(&r, "users", "userId");
        prop_assert_eq!(ids.id, Some(qualified));
        prop_assert_eq!(ids.entity_id, None);
    }
}
