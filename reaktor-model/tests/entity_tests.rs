use pretty_assertions::assert_eq;
use reaktor_model::{Entity, EntityKind, Record};
use serde_json::json;

fn make_entity(kind: EntityKind, data: serde_json::Value) -> Entity {
    let data: Record = data.as_object().cloned().unwrap();
    Entity::new(kind, data)
}

// ── Accessors ────────────────────────────────────────────────────

#[test]
fn identity_accessors() {
    let e = make_entity(
        EntityKind::User,
        json!({"id": "users/1", "userId": "1", "added": 1000, "modified": 2000}),
    );
    assert_eq!(e.id(), Some("users/1"));
    assert_eq!(e.entity_id(), Some("1"));
    assert_eq!(e.added(), Some(1000));
    assert_eq!(e.modified(), Some(2000));
}

#[test]
fn entity_id_uses_kind_specific_field() {
    let e = make_entity(EntityKind::Post, json!({"postId": "p1", "userId": "u1"}));
    assert_eq!(e.entity_id(), Some("p1"));
}

#[test]
fn typed_getters() {
    let e = make_entity(
        EntityKind::Post,
        json!({"content": "hi", "latitude": 1.5, "reactionCount": 3, "flag": true}),
    );
    assert_eq!(e.get_str("content"), Some("hi"));
    assert_eq!(e.get_number("latitude"), Some(1.5));
    assert_eq!(e.get_i64("reactionCount"), Some(3));
    assert_eq!(e.get_bool("flag"), Some(true));
    assert_eq!(e.get_str("latitude"), None);
    assert_eq!(e.get("missing"), None);
}

#[test]
fn insert_and_remove() {
    let mut e = make_entity(EntityKind::Tag, json!({"name": "rust"}));
    assert_eq!(e.insert("count", 3), None);
    assert_eq!(e.get_i64("count"), Some(3));
    assert_eq!(e.remove("name"), Some(json!("rust")));
    assert_eq!(e.data().len(), 1);
}

// ── Serialization ────────────────────────────────────────────────

#[test]
fn serializes_as_plain_object() {
    let e = make_entity(EntityKind::Tag, json!({"id": "tags/rust", "name": "rust"}));
    let value = serde_json::to_value(&e).unwrap();
    assert_eq!(value, json!({"id": "tags/rust", "name": "rust"}));
}

#[test]
fn converts_into_json_value() {
    let e = make_entity(EntityKind::Tag, json!({"name": "rust"}));
    let value: serde_json::Value = e.into();
    assert_eq!(value, json!({"name": "rust"}));
}

// ── EntityKind ───────────────────────────────────────────────────

#[test]
fn kind_names_round_trip() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.name().parse::<EntityKind>(), Ok(kind));
        assert_eq!(kind.to_string(), kind.name());
    }
}

#[test]
fn kind_parse_is_case_insensitive() {
    assert_eq!("Content".parse::<EntityKind>(), Ok(EntityKind::Content));
    assert!("widget".parse::<EntityKind>().is_err());
}

#[test]
fn every_schema_belongs_to_its_kind() {
    for kind in EntityKind::ALL {
        assert_eq!(kind.schema().kind, kind);
    }
}

#[test]
fn kind_serde_is_lowercase() {
    assert_eq!(serde_json::to_value(EntityKind::Translation).unwrap(), json!("translation"));
}
