//! Users.

use super::MAX_REF_LENGTH;
use crate::{
    AdapterOptions, Charset, Entity, EntityKind, EntitySchema, FieldSpec, Mode, Record,
    ValidationResult, normalize_record,
};

pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MAX_NAME_LENGTH: usize = 64;

pub static SCHEMA: EntitySchema = EntitySchema {
    kind: EntityKind::User,
    collection: "users",
    id_field: "userId",
    fields: &[
        FieldSpec::email("email").required(),
        FieldSpec::text("username", MAX_USERNAME_LENGTH).charset(Charset::Username),
        FieldSpec::text("firstName", MAX_NAME_LENGTH),
        FieldSpec::text("lastName", MAX_NAME_LENGTH),
        FieldSpec::text("phone", 32).charset(Charset::Phone),
        FieldSpec::text("gender", 1).charset(Charset::Alphabetic),
        FieldSpec::locale("locale"),
        FieldSpec::timestamp("dob"),
        FieldSpec::url("thumb"),
        FieldSpec::text("imageId", MAX_REF_LENGTH).charset(Charset::Key),
        FieldSpec::text_list("roles", 16, 32).charset(Charset::Slug),
        FieldSpec::boolean("isVerified"),
    ],
};

pub fn validate_user(record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Validate, options)
}

pub fn parse_user(record: &Record) -> ValidationResult<Entity> {
    normalize_record(record, &SCHEMA, Mode::Parse, &AdapterOptions::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValidationError;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn normalizes_identity_and_email() {
        let user = validate_user(
            &record(json!({"_key": "42", "_rev": "x", "email": "Ada@Example.COM"})),
            &AdapterOptions::default(),
        )
        .unwrap();
        assert_eq!(user.id(), Some("users/42"));
        assert_eq!(user.entity_id(), Some("42"));
        assert_eq!(user.get_str("email"), Some("ada@example.com"));
        assert!(user.get("_key").is_none());
        assert!(user.get("_rev").is_none());
    }

    #[test]
    fn rejects_unsupported_locale() {
        let err = validate_user(
            &record(json!({"email": "a@b.co", "locale": "ja"})),
            &AdapterOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ValidationError::User(_)));
        assert_eq!(err.field_name(), Some("locale"));
    }

    #[test]
    fn gender_is_one_letter() {
        let err = validate_user(
            &record(json!({"email": "a@b.co", "gender": "female"})),
            &AdapterOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err.field_name(), Some("gender"));

        let parsed = parse_user(&record(json!({"gender": "female"}))).unwrap();
        assert_eq!(parsed.get_str("gender"), Some("f"));
    }

    #[test]
    fn username_charset_is_stripped_on_read() {
        let parsed = parse_user(&record(json!({"username": "ada lovelace!"}))).unwrap();
        assert_eq!(parsed.get_str("username"), Some("adalovelace"));
    }
}
