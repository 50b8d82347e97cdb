//! Direct and group chat messages.

use super::{MAX_BODY_LENGTH, MAX_REF_LENGTH};
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const MESSAGE_TYPES: &[&str] = &["text", "image", "file", "system"];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Message,
    collection: "messages",
    id_field: "messageId",
    fields: &[
        FieldSpec::text("content", MAX_BODY_LENGTH).required(),
        FieldSpec::text("conversationId", MAX_REF_LENGTH)
            .charset(Charset::Key)
            .required(),
        FieldSpec::text("userId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::enumeration("type", MESSAGE_TYPES),
        FieldSpec::boolean("isRead"),
        FieldSpec::timestamp("readAt"),
        FieldSpec::json("metadata"),
    ],
};

pub fn validate_message(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_message(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
