//! File attachments.

use super::MAX_REF_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::File,
    collection: "files",
    id_field: "fileId",
    fields: &[
        FieldSpec::text("name", 255).required(),
        FieldSpec::url("url").required(),
        FieldSpec::text("fileType", 127)
            .charset(Charset::MimeType)
            .required(),
        FieldSpec::integer("fileSize", 0, i64::MAX),
        FieldSpec::text("checksum", 128).charset(Charset::Hex),
        FieldSpec::text("description", 1_000),
        FieldSpec::text("userId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::text("itemId", MAX_REF_LENGTH).charset(Charset::Key),
    ],
};

pub fn validate_file(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_file(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
