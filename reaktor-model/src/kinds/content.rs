//! Localized content strings (`key` + `locale` -> `content`).

use super::MAX_BODY_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const MAX_KEY_LENGTH: usize = 200;
pub const MAX_CONTENT_LENGTH: usize = MAX_BODY_LENGTH;

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Content,
    collection: "content",
    id_field: "contentId",
    fields: &[
        FieldSpec::text("key", MAX_KEY_LENGTH)
            .charset(Charset::Key)
            .required(),
        FieldSpec::locale_tag("locale").required(),
        FieldSpec::text("content", MAX_CONTENT_LENGTH).required(),
        FieldSpec::text("description", 1_000),
    ],
};

/// Validates content submitted for storage. Overlong values are rejected.
pub fn validate_content(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

/// Parses content read back from the database. Overlong values are
/// truncated to [`MAX_KEY_LENGTH`] / [`MAX_CONTENT_LENGTH`].
pub fn parse_content(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
