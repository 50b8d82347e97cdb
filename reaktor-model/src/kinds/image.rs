//! Uploaded images.

use super::MAX_REF_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const MAX_DIMENSION: i64 = 100_000;

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Image,
    collection: "images",
    id_field: "imageId",
    fields: &[
        FieldSpec::url("url").required(),
        FieldSpec::text("name", 255),
        FieldSpec::text("description", 1_000),
        FieldSpec::integer("width", 0, MAX_DIMENSION),
        FieldSpec::integer("height", 0, MAX_DIMENSION),
        FieldSpec::text("fileType", 127).charset(Charset::MimeType),
        FieldSpec::integer("fileSize", 0, i64::MAX),
        FieldSpec::text("color", 7),
        FieldSpec::text("userId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::boolean("isPrivate"),
    ],
};

pub fn validate_image(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_image(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
