use crate::{Tag, TagRef, UserRef};

use serde_json::json;

#[test]
fn test_tag_ref_from_bare_id() {
    let tag: TagRef = serde_json::from_value(json!(4)).unwrap();
    assert_eq!(tag, TagRef::Id(4));
    assert_eq!(tag.id(), 4);
}

#[test]
fn test_tag_ref_from_embedded_tag() {
    let tag: TagRef = serde_json::from_value(json!({"id": 9, "name": "bug"})).unwrap();
    assert_eq!(
        tag,
        TagRef::Tag(Tag {
            id: 9,
            name: Some("bug".to_string()),
            color: None,
        })
    );
    assert_eq!(tag.id(), 9);
}

#[test]
fn test_user_ref_from_embedded_user() {
    let user: UserRef =
        serde_json::from_value(json!({"id": 2, "username": "ana", "email": "ana@example.com"}))
            .unwrap();
    assert_eq!(user.id(), 2);
}

#[test]
fn test_tag_without_optional_fields() {
    let tag: Tag = serde_json::from_value(json!({"id": 1})).unwrap();
    assert_eq!(tag.id, 1);
    assert!(tag.name.is_none());
    assert!(tag.color.is_none());
}

#[test]
fn test_tag_and_user_omit_missing_fields_when_serialized() {
    let tag = Tag {
        id: 1,
        name: Some("bug".to_string()),
        color: None,
    };
    assert_eq!(
        serde_json::to_value(&tag).unwrap(),
        json!({"id": 1, "name": "bug"})
    );

    let user: crate::User = serde_json::from_value(json!({"id": 2, "email": null})).unwrap();
    assert_eq!(serde_json::to_value(&user).unwrap(), json!({"id": 2}));
}
