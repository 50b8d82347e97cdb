//! Authentication sessions.
//!
//! A session ties a bearer token to a user and an expiry. Tokens are opaque
//! to this layer; only their character set and length are checked.

use super::MAX_REF_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationError, ValidationResult, normalize_record,
};

pub const MAX_TOKEN_LENGTH: usize = 4_096;

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::Session,
    collection: "sessions",
    id_field: "sessionId",
    fields: &[
        FieldSpec::text("token", MAX_TOKEN_LENGTH)
            .charset(Charset::Token)
            .required(),
        FieldSpec::text("userId", MAX_REF_LENGTH)
            .charset(Charset::Key)
            .required(),
        FieldSpec::timestamp("expires").required(),
        FieldSpec::timestamp("issued"),
        FieldSpec::text("refreshToken", MAX_TOKEN_LENGTH).charset(Charset::Token),
        FieldSpec::text("deviceId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::text("userAgent", 512),
    ],
};

/// Validates a session. Also rejects sessions that expire before they were
/// issued.
pub fn validate_session(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    let session = normalize_record(record, &SCHEMA, Mode::Validate, options)?;
    if let (Some(issued), Some(expires)) = (session.get_i64("issued"), session.get_i64("expires")) {
        if expires <= issued {
            return Err(ValidationError::field(
                EntityKind::Session,
                "expires",
                "must be after issued",
            ));
        }
    }
    Ok(session)
}

pub fn parse_session(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}
