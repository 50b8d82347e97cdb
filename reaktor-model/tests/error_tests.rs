use reaktor_model::{EntityKind, ValidationError, Violation};

#[test]
fn every_kind_has_its_own_variant() {
    for kind in EntityKind::ALL {
        let err = ValidationError::new(kind, Some("f"), "bad");
        assert_eq!(err.kind(), kind);
    }
}

#[test]
fn display_includes_kind_field_and_message() {
    let err = ValidationError::field(EntityKind::Translation, "locale", "must be a locale tag");
    let msg = err.to_string();
    assert!(msg.starts_with("translation validation error"));
    assert!(msg.contains("locale: must be a locale tag"));
}

#[test]
fn record_level_errors_have_no_field() {
    let err = ValidationError::new(EntityKind::Session, None, "expired");
    assert_eq!(err.field_name(), None);
    assert_eq!(err.message(), "expired");
    assert_eq!(err.to_string(), "session validation error: expired");
}

#[test]
fn kinds_are_matchable() {
    let err = ValidationError::field(EntityKind::Profile, "bio", "too long");
    match err {
        ValidationError::Profile(Violation { field, message }) => {
            assert_eq!(field.as_deref(), Some("bio"));
            assert_eq!(message, "too long");
        }
        other => panic!("unexpected variant: {other:?}"),
    }
}
