use super::*;
use serde_json::json;

#[test]
fn decodes_homepage_about_fields_and_ignores_the_rest() {
    let raw = json!({
        "_id": "homepage",
        "heroTitle": "Sea breeze",
        "aboutTitle": "Our villa",
        "aboutSubtitle": "Since 1998",
        "aboutImages": [
            { "_type": "image", "asset": { "_ref": "image-aaa-800x600-jpg", "_type": "reference" } },
            { "_type": "image", "asset": { "_ref": "image-bbb-800x600-jpg" } }
        ],
        "aboutHighlights": [
            { "icon": "palmtree", "title": "Garden", "description": "Shade all day" }
        ]
    });

    let record: ContentRecord = serde_json::from_value(raw).expect("decode");
    assert_eq!(record.title.as_deref(), Some("Our villa"));
    assert_eq!(record.image_list.len(), 2);
    assert_eq!(record.image_list[0].asset_ref(), "image-aaa-800x600-jpg");
    assert!(record.image_single.is_none());
    assert!(record.description.is_none());
    assert_eq!(record.highlights[0].icon_key, "palmtree");
}

#[test]
fn missing_collections_decode_as_empty() {
    let record: ContentRecord =
        serde_json::from_value(json!({ "aboutImage": { "asset": { "_ref": "image-c-1x1-png" } } }))
            .expect("decode");

    assert!(record.image_list.is_empty());
    assert!(record.highlights.is_empty());
    assert_eq!(record.image_single, Some(ImageRef::new("image-c-1x1-png")));
}
