use super::*;

fn image(asset_ref: &str) -> ImageRef {
    ImageRef::new(asset_ref)
}

fn record(list: &[&str], single: Option<&str>) -> ContentRecord {
    ContentRecord {
        image_list: list.iter().map(|r| image(r)).collect(),
        image_single: single.map(image),
        ..ContentRecord::default()
    }
}

#[test]
fn absent_record_yields_no_images() {
    assert!(normalize(None).is_empty());
}

#[test]
fn image_list_takes_precedence_over_single_image() {
    let record = record(&["image-a-1x1-jpg", "image-b-1x1-jpg"], Some("image-c-1x1-jpg"));

    assert_eq!(
        normalize(Some(&record)),
        vec![image("image-a-1x1-jpg"), image("image-b-1x1-jpg")]
    );
}

#[test]
fn empty_list_falls_back_to_single_image() {
    let record = record(&[], Some("image-c-1x1-jpg"));

    assert_eq!(normalize(Some(&record)), vec![image("image-c-1x1-jpg")]);
}

#[test]
fn empty_list_and_no_single_image_yields_nothing() {
    let record = record(&[], None);

    assert!(normalize(Some(&record)).is_empty());
}

#[test]
fn repeated_calls_return_the_same_sequence() {
    let record = record(&["image-a-1x1-jpg", "image-b-1x1-jpg", "image-c-1x1-jpg"], None);

    let first = normalize(Some(&record));
    let second = normalize(Some(&record));
    assert_eq!(first, second);
    assert_eq!(first.len(), 3);
}
