//! Public user profiles.

use super::MAX_REF_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const MAX_BIO_LENGTH: usize = 1_000;

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Profile,
    collection: "profiles",
    id_field: "profileId",
    fields: &[
        FieldSpec::text("userId", MAX_REF_LENGTH)
            .charset(Charset::Key)
            .required(),
        FieldSpec::text("displayName", 128),
        FieldSpec::text("bio", MAX_BIO_LENGTH),
        FieldSpec::locale("locale"),
        FieldSpec::text("gender", 1).charset(Charset::Alphabetic),
        FieldSpec::timestamp("birthdate"),
        FieldSpec::text("imageId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::url("website"),
        FieldSpec::boolean("isPrivate"),
    ],
};

pub fn validate_profile(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_profile(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
