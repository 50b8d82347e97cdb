use crate::kinds;
use crate::{AdapterOptions, EntitySchema, Record, ValidationResult};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// The closed set of entity kinds the SDK validates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    User,
    Profile,
    Session,
    Post,
    Event,
    Image,
    File,
    Message,
    Reaction,
    Tag,
    Location,
    Content,
    Translation,
}

impl EntityKind {
    /// Every kind, in declaration order.
    pub const ALL: [EntityKind; 13] = [
        Self::User,
        Self::Profile,
        Self::Session,
        Self::Post,
        Self::Event,
        Self::Image,
        Self::File,
        Self::Message,
        Self::Reaction,
        Self::Tag,
        Self::Location,
        Self::Content,
        Self::Translation,
    ];

    /// Lowercase name, also used as the GraphQL variable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Profile => "profile",
            Self::Session => "session",
            Self::Post => "post",
            Self::Event => "event",
            Self::Image => "image",
            Self::File => "file",
            Self::Message => "message",
            Self::Reaction => "reaction",
            Self::Tag => "tag",
            Self::Location => "location",
            Self::Content => "content",
            Self::Translation => "translation",
        }
    }

    /// The declarative schema for this kind.
    #[must_use]
    pub fn schema(self) -> &'static EntitySchema {
        match self {
            Self::User => &kinds::user::SCHEMA,
            Self::Profile => &kinds::profile::SCHEMA,
            Self::Session => &kinds::session::SCHEMA,
            Self::Post => &kinds::post::SCHEMA,
            Self::Event => &kinds::event::SCHEMA,
            Self::Image => &kinds::image::SCHEMA,
            Self::File => &kinds::file::SCHEMA,
            Self::Message => &kinds::message::SCHEMA,
            Self::Reaction => &kinds::reaction::SCHEMA,
            Self::Tag => &kinds::tag::SCHEMA,
            Self::Location => &kinds::location::SCHEMA,
            Self::Content => &kinds::content::SCHEMA,
            Self::Translation => &kinds::translation::SCHEMA,
        }
    }

    /// Runs this kind's write-path validator (rejects invalid input).
    pub fn validate(self, record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
        match self {
            Self::User => kinds::user::validate_user(record, options),
            Self::Profile => kinds::profile::validate_profile(record, options),
            Self::Session => kinds::session::validate_session(record, options),
            Self::Post => kinds::post::validate_post(record, options),
            Self::Event => kinds::event::validate_event(record, options),
            Self::Image => kinds::image::validate_image(record, options),
            Self::File => kinds::file::validate_file(record, options),
            Self::Message => kinds::message::validate_message(record, options),
            Self::Reaction => kinds::reaction::validate_reaction(record, options),
            Self::Tag => kinds::tag::validate_tag(record, options),
            Self::Location => kinds::location::validate_location(record, options),
            Self::Content => kinds::content::validate_content(record, options),
            Self::Translation => kinds::translation::validate_translation(record, options),
        }
    }

    /// Runs this kind's read-path parser (repairs stored data).
    pub fn parse(self, record: &Record, options: &AdapterOptions) -> ValidationResult<Entity> {
        crate::normalize_record(record, self.schema(), crate::Mode::Parse, options)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown entity kind: {s}"))
    }
}

/// A normalized entity.
///
/// Holds the canonical `id`, the kind's own id field (e.g. `userId`),
/// epoch-millisecond `added`/`modified` when known, and every schema field
/// that survived normalization. Never contains document-store bookkeeping
/// fields. Serializes as the plain field map.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    kind: EntityKind,
    data: Record,
}

impl Entity {
    pub fn new(kind: EntityKind, data: Record) -> Self {
        Self { kind, data }
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    pub fn data(&self) -> &Record {
        &self.data
    }

    /// Mutable access for adapters that derive or rewrite fields.
    pub fn data_mut(&mut self) -> &mut Record {
        &mut self.data
    }

    pub fn into_data(self) -> Record {
        self.data
    }

    /// The canonical id (e.g. `"users/123"`).
    pub fn id(&self) -> Option<&str> {
        self.get_str("id")
    }

    /// The kind-specific id (e.g. the value of `userId`).
    pub fn entity_id(&self) -> Option<&str> {
        self.get_str(self.kind.schema().id_field)
    }

    /// Creation time in epoch milliseconds.
    pub fn added(&self) -> Option<i64> {
        self.get_i64("added")
    }

    /// Last modification time in epoch milliseconds.
    pub fn modified(&self) -> Option<i64> {
        self.get_i64("modified")
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.data.get(field)
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.data.get(field).and_then(|v| v.as_str())
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.data.get(field).and_then(|v| v.as_bool())
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.data.get(field).and_then(|v| v.as_i64())
    }

    pub fn get_number(&self, field: &str) -> Option<f64> {
        self.data.get(field).and_then(|v| v.as_f64())
    }

    /// Sets a field, returning the previous value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.data.insert(field.into(), value.into())
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.data.remove(field)
    }
}

impl Serialize for Entity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.data.serialize(serializer)
    }
}

impl From<Entity> for Value {
    fn from(entity: Entity) -> Self {
        Value::Object(entity.data)
    }
}
