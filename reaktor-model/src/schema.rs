use crate::EntityKind;
use std::fmt;

/// Locales accepted where a free-form locale tag is not wanted.
pub const LOCALES: &[&str] = &["en", "es", "fr", "de", "pt", "it"];

/// Which side of the system a record is coming from.
///
/// The two modes are asymmetric: client input is rejected when
/// invalid, while data already stored is repaired (truncated, stripped,
/// clamped) rather than dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Write path: reject the record on the first violation.
    Validate,
    /// Read path: repair what can be repaired, drop what cannot.
    Parse,
}

/// Describes one entity kind's shape.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    pub kind: EntityKind,
    /// Document-store collection, used to qualify ids (`"<collection>/<key>"`).
    pub collection: &'static str,
    /// Name of the kind-specific id field (e.g. `userId`).
    pub id_field: &'static str,
    /// Fields in validation order.
    pub fields: &'static [FieldSpec],
}

impl EntitySchema {
    /// Looks up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields that must be present unless partial input is allowed.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }
}

/// A single field of an [`EntitySchema`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    const fn optional(name: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            kind,
            required: false,
        }
    }

    /// Marks the field as required.
    pub const fn required(self) -> Self {
        Self {
            required: true,
            ..self
        }
    }

    /// Restricts the character set of a text or text-list field.
    pub const fn charset(self, charset: Charset) -> Self {
        let kind = match self.kind {
            FieldKind::Text { max_len, .. } => FieldKind::Text { max_len, charset },
            FieldKind::TextList {
                max_items,
                item_max_len,
                ..
            } => FieldKind::TextList {
                max_items,
                item_max_len,
                charset,
            },
            other => other,
        };
        Self { kind, ..self }
    }

    /// Free text of at most `max_len` characters.
    pub const fn text(name: &'static str, max_len: usize) -> Self {
        Self::optional(
            name,
            FieldKind::Text {
                max_len,
                charset: Charset::Any,
            },
        )
    }

    /// An email address.
    pub const fn email(name: &'static str) -> Self {
        Self::optional(name, FieldKind::Email)
    }

    /// An absolute `http(s)` URL.
    pub const fn url(name: &'static str) -> Self {
        Self::optional(name, FieldKind::Url { max_len: 2048 })
    }

    /// A locale restricted to [`LOCALES`].
    pub const fn locale(name: &'static str) -> Self {
        Self::optional(
            name,
            FieldKind::Locale {
                allowed: Some(LOCALES),
            },
        )
    }

    /// A free-form `xx` or `xx-YY` locale tag.
    pub const fn locale_tag(name: &'static str) -> Self {
        Self::optional(name, FieldKind::Locale { allowed: None })
    }

    /// One of a fixed set of lowercase values.
    pub const fn enumeration(name: &'static str, values: &'static [&'static str]) -> Self {
        Self::optional(name, FieldKind::Enum { values })
    }

    pub const fn integer(name: &'static str, min: i64, max: i64) -> Self {
        Self::optional(name, FieldKind::Integer { min, max })
    }

    pub const fn float(name: &'static str, min: f64, max: f64) -> Self {
        Self::optional(name, FieldKind::Float { min, max })
    }

    pub const fn boolean(name: &'static str) -> Self {
        Self::optional(name, FieldKind::Bool)
    }

    /// Epoch milliseconds, accepted as a number or ISO-8601 string.
    pub const fn timestamp(name: &'static str) -> Self {
        Self::optional(name, FieldKind::Timestamp)
    }

    /// A list of short strings (tags, roles).
    pub const fn text_list(name: &'static str, max_items: usize, item_max_len: usize) -> Self {
        Self::optional(
            name,
            FieldKind::TextList {
                max_items,
                item_max_len,
                charset: Charset::Any,
            },
        )
    }

    /// Arbitrary JSON, passed through untouched.
    pub const fn json(name: &'static str) -> Self {
        Self::optional(name, FieldKind::Json)
    }
}

/// The type and constraints of a field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text { max_len: usize, charset: Charset },
    Email,
    Url { max_len: usize },
    Locale { allowed: Option<&'static [&'static str]> },
    Enum { values: &'static [&'static str] },
    Integer { min: i64, max: i64 },
    Float { min: f64, max: f64 },
    Bool,
    Timestamp,
    TextList {
        max_items: usize,
        item_max_len: usize,
        charset: Charset,
    },
    Json,
}

/// Character classes for text fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Charset {
    /// No restriction.
    Any,
    /// ASCII letters.
    Alphabetic,
    /// ASCII letters, digits, `_ . : / -` (keys and foreign ids).
    Key,
    /// ASCII letters, digits, `_ . -`.
    Username,
    /// Lowercase ASCII letters, digits, `_ -`.
    Slug,
    /// Digits, spaces and `+ - ( ) .`.
    Phone,
    /// Hex digits.
    Hex,
    /// MIME type characters (`type/subtype+suffix`).
    MimeType,
    /// Opaque token characters (base64, base64url, JWT).
    Token,
}

impl Charset {
    /// Returns true if `c` belongs to this class.
    pub fn allows(self, c: char) -> bool {
        match self {
            Self::Any => true,
            Self::Alphabetic => c.is_ascii_alphabetic(),
            Self::Key => c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | ':' | '/' | '-'),
            Self::Username => c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'),
            Self::Slug => c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | '-'),
            Self::Phone => c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')' | '.'),
            Self::Hex => c.is_ascii_hexdigit(),
            Self::MimeType => {
                c.is_ascii_alphanumeric() || matches!(c, '/' | '+' | '-' | '.' | '_')
            }
            Self::Token => {
                c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-' | '~' | '+' | '/' | '=')
            }
        }
    }

    /// Repairs `s` to fit this class: slugs are lowercased first, then any
    /// remaining disallowed characters are removed.
    pub fn restrict(self, s: &str) -> String {
        match self {
            Self::Any => s.to_string(),
            Self::Slug => s
                .to_lowercase()
                .chars()
                .filter(|c| self.allows(*c))
                .collect(),
            _ => s.chars().filter(|c| self.allows(*c)).collect(),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Any => "any",
            Self::Alphabetic => "letters",
            Self::Key => "letters, digits, '_', '.', ':', '/' and '-'",
            Self::Username => "letters, digits, '_', '.' and '-'",
            Self::Slug => "lowercase letters, digits, '_' and '-'",
            Self::Phone => "digits, spaces and '+', '-', '(', ')', '.'",
            Self::Hex => "hex digits",
            Self::MimeType => "MIME type characters",
            Self::Token => "token characters",
        };
        f.write_str(name)
    }
}
