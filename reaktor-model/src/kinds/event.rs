//! Calendar events.

use super::{MAX_BODY_LENGTH, MAX_REF_LENGTH};
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationError, ValidationResult, normalize_record,
};

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Event,
    collection: "events",
    id_field: "eventId",
    fields: &[
        FieldSpec::text("name", 160).required(),
        FieldSpec::text("description", MAX_BODY_LENGTH),
        FieldSpec::timestamp("startDate").required(),
        FieldSpec::timestamp("endDate"),
        FieldSpec::text("timezone", 64),
        FieldSpec::text("locationId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::text("userId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::url("url"),
        FieldSpec::integer("capacity", 0, 1_000_000),
        FieldSpec::float("cost", 0.0, 1_000_000_000.0),
        FieldSpec::boolean("isAllDay"),
        FieldSpec::text_list("tags", 30, 64).charset(Charset::Slug),
    ],
};

/// Validates an event. `endDate`, when given, may not precede `startDate`.
pub fn validate_event(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    let event = normalize_record(record, &SCHEMA, Mode::Validate, options)?;
    if let (Some(start), Some(end)) = (event.get_i64("startDate"), event.get_i64("endDate")) {
        if end < start {
            return Err(ValidationError::field(
                EntityKind::Event,
                "endDate",
                "must not be before startDate",
            ));
        }
    }
    Ok(event)
}

pub fn parse_event(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
