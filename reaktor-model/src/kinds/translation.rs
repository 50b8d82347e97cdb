//! Translations of content keys.

use super::MAX_BODY_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Translation,
    collection: "translations",
    id_field: "translationId",
    fields: &[
        FieldSpec::text("key", 200).charset(Charset::Key).required(),
        FieldSpec::locale_tag("locale").required(),
        FieldSpec::text("value", MAX_BODY_LENGTH).required(),
        FieldSpec::text("namespace", 64).charset(Charset::Key),
    ],
};

pub fn validate_translation(
    record: &Record,
    options: &AdapterOptions,
) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_translation(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
