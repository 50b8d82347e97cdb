use reaktor_model::{Charset, EntityKind, FieldKind, FieldSpec, LOCALES};
use std::collections::HashSet;

// ── FieldSpec constructors ───────────────────────────────────────

#[test]
fn text_field_defaults() {
    let f = FieldSpec::text("name", 64);
    assert_eq!(f.name, "name");
    assert_eq!(
        f.kind,
        FieldKind::Text {
            max_len: 64,
            charset: Charset::Any
        }
    );
    assert!(!f.required);
}

#[test]
fn required_and_charset_compose() {
    let f = FieldSpec::text("key", 200).charset(Charset::Key).required();
    assert!(f.required);
    assert_eq!(
        f.kind,
        FieldKind::Text {
            max_len: 200,
            charset: Charset::Key
        }
    );
}

#[test]
fn charset_applies_to_text_lists() {
    let f = FieldSpec::text_list("tags", 10, 32).charset(Charset::Slug);
    assert_eq!(
        f.kind,
        FieldKind::TextList {
            max_items: 10,
            item_max_len: 32,
            charset: Charset::Slug
        }
    );
}

#[test]
fn charset_ignored_for_non_text() {
    let f = FieldSpec::integer("count", 0, 10).charset(Charset::Hex);
    assert_eq!(f.kind, FieldKind::Integer { min: 0, max: 10 });
}

#[test]
fn locale_constructors() {
    assert_eq!(
        FieldSpec::locale("locale").kind,
        FieldKind::Locale {
            allowed: Some(LOCALES)
        }
    );
    assert_eq!(
        FieldSpec::locale_tag("locale").kind,
        FieldKind::Locale { allowed: None }
    );
}

// ── Charset ──────────────────────────────────────────────────────

#[test]
fn charset_membership() {
    assert!(Charset::Slug.allows('a'));
    assert!(!Charset::Slug.allows('A'));
    assert!(Charset::Key.allows('/'));
    assert!(!Charset::Username.allows('/'));
    assert!(Charset::Phone.allows('+'));
    assert!(!Charset::Hex.allows('g'));
    assert!(Charset::Any.allows('\u{1F600}'));
}

#[test]
fn charset_restrict() {
    assert_eq!(Charset::Slug.restrict("Hello World!"), "helloworld");
    assert_eq!(Charset::Hex.restrict("0xZZff"), "0ff");
    assert_eq!(Charset::Any.restrict("as is"), "as is");
}

// ── Registered schemas ───────────────────────────────────────────

#[test]
fn schemas_have_unique_collections_and_id_fields() {
    let collections: HashSet<_> = EntityKind::ALL
        .iter()
        .map(|k| k.schema().collection)
        .collect();
    let id_fields: HashSet<_> = EntityKind::ALL.iter().map(|k| k.schema().id_field).collect();
    assert_eq!(collections.len(), EntityKind::ALL.len());
    assert_eq!(id_fields.len(), EntityKind::ALL.len());
}

#[test]
fn schemas_have_unique_field_names() {
    for kind in EntityKind::ALL {
        let schema = kind.schema();
        let names: HashSet<_> = schema.fields.iter().map(|f| f.name).collect();
        assert_eq!(names.len(), schema.fields.len(), "duplicate field in {kind}");
        assert!(schema.field(schema.id_field).is_none(), "{kind} redeclares its id field");
    }
}

#[test]
fn content_required_fields() {
    let required: Vec<_> = EntityKind::Content.schema().required_fields().collect();
    assert_eq!(required, vec!["key", "locale", "content"]);
}
