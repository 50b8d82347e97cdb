//! The record normalization engine.
//!
//! One pure function, [`normalize_record`], turns a raw backend record into
//! an [`Entity`] for any [`EntitySchema`]. Fields are processed in a fixed
//! order (identity, timestamps, then schema fields in declaration order) so
//! the same invalid input always reports the same first failing field.

use crate::{
    AdapterOptions, Charset, Entity, EntitySchema, Environment, FieldKind, FieldSpec, Mode, Record,
    ValidationError, ValidationResult,
};
use reaktor_types::{is_bookkeeping, json_type_name, normalize_identifiers, normalize_timestamp};
use serde_json::{Number, Value};
use tracing::{debug, warn};

/// Canonical timestamp fields and the source fields they are read from,
/// first present wins.
pub const TIMESTAMP_FIELDS: [(&str, &[&str]); 2] = [
    ("added", &["added", "createdAt", "created"]),
    ("modified", &["modified", "updatedAt", "updated"]),
];

/// Normalizes `raw` against `schema`.
///
/// In [`Mode::Validate`] the first violation is returned as an error. In
/// [`Mode::Parse`] overlong text is truncated, disallowed characters are
/// stripped, numbers are clamped, and values that cannot be coerced are
/// dropped; required fields are not enforced. Malformed timestamps and
/// missing identifiers under `strict` fail in both modes.
pub fn normalize_record(
    raw: &Record,
    schema: &EntitySchema,
    mode: Mode,
    options: &AdapterOptions,
) -> ValidationResult<Entity> {
    let kind = schema.kind;
    let mut data = Record::new();

    let ids = normalize_identifiers(raw, schema.collection, schema.id_field);
    if options.is_strict() && ids.entity_id.is_none() {
        return Err(ValidationError::field(
            kind,
            schema.id_field,
            format!("missing identifier ({} or _key)", schema.id_field),
        ));
    }
    if let Some(id) = ids.id {
        data.insert("id".into(), Value::String(id));
    }
    if let Some(entity_id) = ids.entity_id {
        data.insert(schema.id_field.into(), Value::String(entity_id));
    }

    for (canonical, sources) in TIMESTAMP_FIELDS {
        let Some((source, value)) = sources
            .iter()
            .find_map(|s| raw.get(*s).filter(|v| !v.is_null()).map(|v| (*s, v)))
        else {
            continue;
        };
        match normalize_timestamp(Some(value)) {
            Ok(Some(millis)) => {
                data.insert(canonical.into(), Value::from(millis));
            }
            Ok(None) => {}
            Err(e) => return Err(ValidationError::field(kind, source, e.to_string())),
        }
    }

    for spec in schema.fields {
        let value = raw.get(spec.name).filter(|v| !v.is_null());
        let Some(value) = value else {
            if spec.required && mode == Mode::Validate && !options.allows_partial() {
                return Err(ValidationError::field(kind, spec.name, "is required"));
            }
            continue;
        };

        let normalized = match mode {
            Mode::Validate => validate_value(spec, value),
            Mode::Parse => parse_value(spec, value),
        }
        .map_err(|message| ValidationError::field(kind, spec.name, message))?;

        match normalized {
            Some(v) => {
                data.insert(spec.name.into(), v);
            }
            None if mode == Mode::Validate => {
                if spec.required && !options.allows_partial() {
                    return Err(ValidationError::field(kind, spec.name, "is required"));
                }
            }
            None if !matches!(spec.kind, FieldKind::Timestamp) => {
                warn!(
                    kind = %kind,
                    field = spec.name,
                    "dropping value that could not be repaired from stored record"
                );
            }
            None => {}
        }
    }

    for field in raw.keys() {
        if is_known_field(schema, field) {
            continue;
        }
        if mode == Mode::Validate && options.environment() == Environment::Development {
            warn!(kind = %kind, field = %field, "ignoring unknown field");
        } else {
            debug!(kind = %kind, field = %field, "ignoring unknown field");
        }
    }

    Ok(Entity::new(kind, data))
}

fn is_known_field(schema: &EntitySchema, field: &str) -> bool {
    field == "id"
        || field == schema.id_field
        || is_bookkeeping(field)
        || TIMESTAMP_FIELDS
            .iter()
            .any(|(_, sources)| sources.contains(&field))
        || schema.field(field).is_some()
}

// ── Write path ──────────────────────────────────────────────────

/// Returns `Ok(None)` for values that normalize to "absent" (a zero timestamp).
fn validate_value(spec: &FieldSpec, value: &Value) -> Result<Option<Value>, String> {
    let valid = match spec.kind {
        FieldKind::Text { max_len, charset } => {
            let s = expect_str(value)?;
            check_text(s, max_len, charset)?;
            if spec.required && s.trim().is_empty() {
                return Err("must not be empty".into());
            }
            Value::String(s.to_string())
        }
        FieldKind::Email => {
            let s = expect_str(value)?.trim();
            if s.chars().count() > MAX_EMAIL_LENGTH {
                return Err(format!("must be at most {MAX_EMAIL_LENGTH} characters"));
            }
            if !is_email(s) {
                return Err("must be a valid email address".into());
            }
            Value::String(s.to_lowercase())
        }
        FieldKind::Url { max_len } => {
            let s = expect_str(value)?.trim();
            if s.chars().count() > max_len {
                return Err(format!("must be at most {max_len} characters"));
            }
            if !is_url(s) {
                return Err("must be an absolute http(s) URL".into());
            }
            Value::String(s.to_string())
        }
        FieldKind::Locale { allowed } => {
            let s = expect_str(value)?;
            let valid = match allowed {
                Some(list) => list.contains(&s),
                None => is_locale_tag(s),
            };
            if !valid {
                return Err(match allowed {
                    Some(list) => format!("must be one of {}", list.join(", ")),
                    None => "must be a locale tag like \"en\" or \"en-US\"".into(),
                });
            }
            Value::String(s.to_string())
        }
        FieldKind::Enum { values } => {
            let s = expect_str(value)?;
            if !values.contains(&s) {
                return Err(format!("must be one of {}", values.join(", ")));
            }
            Value::String(s.to_string())
        }
        FieldKind::Integer { min, max } => {
            let n = coerce_i64(value).ok_or_else(|| type_error("an integer", value))?;
            if n < min || n > max {
                return Err(format!("must be between {min} and {max}"));
            }
            Value::from(n)
        }
        FieldKind::Float { min, max } => {
            let n = coerce_f64(value).ok_or_else(|| type_error("a number", value))?;
            if n < min || n > max {
                return Err(format!("must be between {min} and {max}"));
            }
            float_value(n)?
        }
        FieldKind::Bool => {
            Value::Bool(coerce_bool(value).ok_or_else(|| type_error("a boolean", value))?)
        }
        FieldKind::Timestamp => match normalize_timestamp(Some(value)).map_err(|e| e.to_string())?
        {
            Some(millis) => Value::from(millis),
            None => return Ok(None),
        },
        FieldKind::TextList {
            max_items,
            item_max_len,
            charset,
        } => {
            let items = value
                .as_array()
                .ok_or_else(|| type_error("a list of strings", value))?;
            if items.len() > max_items {
                return Err(format!("must have at most {max_items} items"));
            }
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                let s = expect_str(item)?;
                check_text(s, item_max_len, charset)?;
                out.push(Value::String(s.to_string()));
            }
            Value::Array(out)
        }
        FieldKind::Json => value.clone(),
    };
    Ok(Some(valid))
}

fn check_text(s: &str, max_len: usize, charset: Charset) -> Result<(), String> {
    if s.chars().count() > max_len {
        return Err(format!("must be at most {max_len} characters"));
    }
    if !s.chars().all(|c| charset.allows(c)) {
        return Err(format!("may only contain {charset}"));
    }
    Ok(())
}

// ── Read path ───────────────────────────────────────────────────

/// Returns `Ok(None)` when the stored value cannot be repaired.
fn parse_value(spec: &FieldSpec, value: &Value) -> Result<Option<Value>, String> {
    let repaired = match spec.kind {
        FieldKind::Text { max_len, charset } => {
            coerce_string(value).map(|s| Value::String(truncate(&charset.restrict(&s), max_len)))
        }
        FieldKind::Email => coerce_string(value)
            .map(|s| Value::String(truncate(&s.trim().to_lowercase(), MAX_EMAIL_LENGTH))),
        FieldKind::Url { max_len } => {
            coerce_string(value).map(|s| Value::String(truncate(s.trim(), max_len)))
        }
        FieldKind::Locale { allowed } => coerce_string(value)
            .map(|s| canonical_locale(&s))
            .filter(|s| match allowed {
                Some(list) => list.contains(&s.as_str()),
                None => is_locale_tag(s),
            })
            .map(Value::String),
        FieldKind::Enum { values } => coerce_string(value)
            .map(|s| s.trim().to_lowercase())
            .filter(|s| values.contains(&s.as_str()))
            .map(Value::String),
        FieldKind::Integer { min, max } => {
            coerce_i64(value).map(|n| Value::from(n.clamp(min, max)))
        }
        FieldKind::Float { min, max } => coerce_f64(value)
            .filter(|n| n.is_finite())
            .and_then(|n| float_value(n.clamp(min, max)).ok()),
        FieldKind::Bool => coerce_bool(value).map(Value::Bool),
        FieldKind::Timestamp => {
            return normalize_timestamp(Some(value))
                .map(|millis| millis.map(Value::from))
                .map_err(|e| e.to_string());
        }
        FieldKind::TextList {
            max_items,
            item_max_len,
            charset,
        } => value.as_array().map(|items| {
            Value::Array(
                items
                    .iter()
                    .filter_map(coerce_string)
                    .map(|s| truncate(&charset.restrict(&s), item_max_len))
                    .filter(|s| !s.is_empty())
                    .take(max_items)
                    .map(Value::String)
                    .collect(),
            )
        }),
        FieldKind::Json => Some(value.clone()),
    };
    Ok(repaired)
}

/// Truncates to at most `max_len` characters (not bytes).
fn truncate(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((end, _)) => s[..end].to_string(),
        None => s.to_string(),
    }
}

// ── Coercion helpers ────────────────────────────────────────────

const MAX_EMAIL_LENGTH: usize = 320;

fn expect_str(value: &Value) -> Result<&str, String> {
    value.as_str().ok_or_else(|| type_error("a string", value))
}

fn type_error(expected: &str, value: &Value) -> String {
    format!("must be {expected}, got {}", json_type_name(value))
}

fn coerce_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn coerce_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f < i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Number(n) => match n.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Value::String(s) => match s.trim() {
            "true" | "1" => Some(true),
            "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn float_value(n: f64) -> Result<Value, String> {
    Number::from_f64(n)
        .map(Value::Number)
        .ok_or_else(|| "must be a finite number".to_string())
}

fn is_email(s: &str) -> bool {
    if s.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

fn is_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !s.chars().any(char::is_whitespace),
        None => false,
    }
}

/// `xx` or `xx-YY`.
fn is_locale_tag(s: &str) -> bool {
    let b = s.as_bytes();
    match b.len() {
        2 => b.iter().all(u8::is_ascii_lowercase),
        5 => {
            b[..2].iter().all(u8::is_ascii_lowercase)
                && b[2] == b'-'
                && b[3..].iter().all(u8::is_ascii_uppercase)
        }
        _ => false,
    }
}

/// Repairs casing and separators of a stored locale (`EN_us` -> `en-US`).
fn canonical_locale(s: &str) -> String {
    let s = s.trim().replace('_', "-");
    match s.split_once('-') {
        Some((lang, region)) => format!("{}-{}", lang.to_lowercase(), region.to_uppercase()),
        None => s.to_lowercase(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("héllo", 2), "hé");
        assert_eq!(truncate("abc", 10), "abc");
        assert_eq!(truncate("", 0), "");
    }

    #[test]
    fn locale_tags() {
        assert!(is_locale_tag("en"));
        assert!(is_locale_tag("pt-BR"));
        assert!(!is_locale_tag("EN"));
        assert!(!is_locale_tag("eng"));
        assert!(!is_locale_tag("xx-too-long-99"));
    }

    #[test]
    fn canonical_locale_repairs_case() {
        assert_eq!(canonical_locale("EN_us"), "en-US");
        assert_eq!(canonical_locale(" FR "), "fr");
    }

    #[test]
    fn emails() {
        assert!(is_email("a@b.co"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a b@c.co"));
        assert!(!is_email("a@@b.co"));
    }

    #[test]
    fn bool_coercion() {
        assert_eq!(coerce_bool(&Value::from("true")), Some(true));
        assert_eq!(coerce_bool(&Value::from(0)), Some(false));
        assert_eq!(coerce_bool(&Value::from(2)), None);
        assert_eq!(coerce_bool(&Value::from("yes")), None);
    }

    #[test]
    fn integer_coercion() {
        assert_eq!(coerce_i64(&Value::from("42")), Some(42));
        assert_eq!(coerce_i64(&Value::from(3.0)), Some(3));
        assert_eq!(coerce_i64(&Value::from(3.5)), None);
        assert_eq!(coerce_i64(&Value::from(1e30)), None);
        assert_eq!(coerce_i64(&Value::from(u64::MAX)), None);
    }
}
