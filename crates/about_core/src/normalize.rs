use shared::domain::{ContentRecord, ImageRef};

/// Images the carousel cycles through, in display order.
pub type DisplayImages = Vec<ImageRef>;

/// Derives the carousel images from a content snapshot.
///
/// A non-empty image list wins; otherwise the single image is used on its own.
/// Empty only when the record is absent or carries neither field.
pub fn normalize(record: Option<&ContentRecord>) -> DisplayImages {
    let Some(record) = record else {
        return Vec::new();
    };

    if !record.image_list.is_empty() {
        return record.image_list.clone();
    }

    record.image_single.iter().cloned().collect()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
