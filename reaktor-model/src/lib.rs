//! Entity model and field validators for Reaktor.
//!
//! Defines the types every validation pipeline depends on:
//! - [`Entity`] / [`EntityKind`]: a normalized record and the closed set of
//!   entity kinds it can belong to
//! - [`EntitySchema`]: a declarative description of one kind's fields
//!   (required fields, length limits, character sets, enumerations)
//! - [`normalize_record`]: the single engine that turns a raw backend record
//!   into an [`Entity`] for a given schema, either rejecting invalid input
//!   ([`Mode::Validate`]) or repairing stored data ([`Mode::Parse`])
//! - [`AdapterOptions`]: the closed set of behavioral options shared by all
//!   validators
//! - [`ValidationError`]: one error variant per entity kind
//!
//! Per-kind entry points (`validate_user`, `parse_content`, ...) live in
//! [`kinds`].

mod entity;
mod error;
pub mod kinds;
mod normalize;
mod options;
mod schema;

pub use entity::{Entity, EntityKind};
pub use error::{ValidationError, ValidationResult, Violation};
pub use normalize::{TIMESTAMP_FIELDS, normalize_record};
pub use options::{AdapterOptions, CustomValidation, ENVIRONMENT_VAR, Environment};
pub use schema::{Charset, EntitySchema, FieldKind, FieldSpec, LOCALES, Mode};

pub use reaktor_types::Record;
