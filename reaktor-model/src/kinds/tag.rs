//! Tags.

use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Tag,
    collection: "tags",
    id_field: "tagId",
    fields: &[
        FieldSpec::text("name", 64).charset(Charset::Slug).required(),
        FieldSpec::text("description", 500),
        FieldSpec::text("category", 64).charset(Charset::Slug),
        FieldSpec::integer("count", 0, i64::MAX),
    ],
};

pub fn validate_tag(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_tag(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
