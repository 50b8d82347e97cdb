//! Per-kind field validators.
//!
//! Each module declares its kind's [`EntitySchema`](crate::EntitySchema) and
//! two entry points: `validate_<kind>` for client input (rejects) and
//! `parse_<kind>` for stored records (repairs).

pub mod content;
pub mod event;
pub mod file;
pub mod image;
pub mod location;
pub mod message;
pub mod post;
pub mod profile;
pub mod reaction;
pub mod session;
pub mod tag;
pub mod translation;
pub mod user;

pub use content::{parse_content, validate_content};
pub use event::{parse_event, validate_event};
pub use file::{parse_file, validate_file};
pub use image::{parse_image, validate_image};
pub use location::{parse_location, validate_location};
pub use message::{parse_message, validate_message};
pub use post::{parse_post, validate_post};
pub use profile::{parse_profile, validate_profile};
pub use reaction::{parse_reaction, validate_reaction};
pub use session::{parse_session, validate_session};
pub use tag::{parse_tag, validate_tag};
pub use translation::{parse_translation, validate_translation};
pub use user::{parse_user, validate_user};

/// Shared limit for long-form text bodies (posts, messages, content).
pub const MAX_BODY_LENGTH: usize = 10_000;

/// Shared limit for foreign-key style id references.
pub const MAX_REF_LENGTH: usize = 128;
