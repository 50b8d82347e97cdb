//! Reactions on posts, messages and other items.

use super::MAX_REF_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const REACTION_NAMES: &[&str] = &["like", "love", "haha", "wow", "sad", "angry", "view"];
pub const REACTION_TARGETS: &[&str] = &["post", "message", "event", "image", "user"];

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Reaction,
    collection: "reactions",
    id_field: "reactionId",
    fields: &[
        FieldSpec::enumeration("name", REACTION_NAMES).required(),
        FieldSpec::text("itemId", MAX_REF_LENGTH)
            .charset(Charset::Key)
            .required(),
        FieldSpec::enumeration("itemType", REACTION_TARGETS),
        FieldSpec::text("userId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::integer("value", -1, 1),
    ],
};

pub fn validate_reaction(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_reaction(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
