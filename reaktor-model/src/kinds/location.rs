//! Geographic locations.

use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Location,
    collection: "locations",
    id_field: "locationId",
    fields: &[
        FieldSpec::float("latitude", -90.0, 90.0).required(),
        FieldSpec::float("longitude", -180.0, 180.0).required(),
        FieldSpec::text("name", 160),
        FieldSpec::text("address", 255),
        FieldSpec::text("city", 100),
        FieldSpec::text("state", 100),
        FieldSpec::text("country", 2).charset(Charset::Alphabetic),
        FieldSpec::text("zip", 16).charset(Charset::Key),
    ],
};

pub fn validate_location(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_location(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
