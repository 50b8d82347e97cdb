//! Posts: user-authored feed items.

use super::{MAX_BODY_LENGTH, MAX_REF_LENGTH};
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const POST_TYPES: &[&str] = &["text", "image", "video", "link", "event", "location"];
pub const PRIVACY_LEVELS: &[&str] = &["public", "friends", "private"];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Post,
    collection: "posts",
    id_field: "postId",
    fields: &[
        FieldSpec::text("content", MAX_BODY_LENGTH).required(),
        FieldSpec::text("name", 160),
        FieldSpec::enumeration("type", POST_TYPES),
        FieldSpec::enumeration("privacy", PRIVACY_LEVELS),
        FieldSpec::text("userId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::text("parentId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::float("latitude", -90.0, 90.0),
        FieldSpec::float("longitude", -180.0, 180.0),
        FieldSpec::text_list("tags", 30, 64).charset(Charset::Slug),
        FieldSpec::integer("reactionCount", 0, i64::MAX),
        FieldSpec::timestamp("publishedAt"),
    ],
};

pub fn validate_post(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_post(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn oversized_body_rejected_on_write_truncated_on_read() {
        let raw = record(json!({"content": "x".repeat(MAX_BODY_LENGTH + 1)}));

        let err = validate_post(&raw, &AdapterOptions::default()).unwrap_err();
        assert_eq!(err.field_name(), Some("content"));

        let parsed = parse_post(&raw).unwrap();
        assert_eq!(
            parsed.get_str("content").map(|s| s.chars().count()),
            Some(MAX_BODY_LENGTH)
        );
    }

    #[test]
    fn tags_are_slugged_on_read() {
        let parsed = parse_post(&record(json!({"tags": ["Rust Lang", "", "ok"]}))).unwrap();
        assert_eq!(parsed.get("tags"), Some(&json!(["rustlang", "ok"])));
    }

    #[test]
    fn numeric_strings_are_coerced() {
        let post = validate_post(
            &record(json!({"content": "hi", "latitude": "45.5", "reactionCount": "3"})),
            &AdapterOptions::default(),
        )
        .unwrap();
        assert_eq!(post.get_number("latitude"), Some(45.5));
        assert_eq!(post.get_i64("reactionCount"), Some(3));
    }
}
