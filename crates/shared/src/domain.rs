use serde::{Deserialize, Serialize};

/// Reference to an image asset held by the content service's media store.
///
/// Only the asset reference string carries identity; the rest of the
/// content service's image object (hotspot, crop, alt) is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageRef {
    asset: AssetRef,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
struct AssetRef {
    #[serde(rename = "_ref")]
    reference: String,
}

impl ImageRef {
    pub fn new(asset_ref: impl Into<String>) -> Self {
        Self {
            asset: AssetRef {
                reference: asset_ref.into(),
            },
        }
    }

    pub fn asset_ref(&self) -> &str {
        &self.asset.reference
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    #[serde(rename = "icon")]
    pub icon_key: String,
    pub title: String,
    pub description: String,
}

/// Snapshot of the About fields of the homepage document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    #[serde(rename = "aboutImages", default)]
    pub image_list: Vec<ImageRef>,
    #[serde(rename = "aboutImage", default, skip_serializing_if = "Option::is_none")]
    pub image_single: Option<ImageRef>,
    #[serde(rename = "aboutTitle", default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        rename = "aboutSubtitle",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub subtitle: Option<String>,
    #[serde(
        rename = "aboutDescription",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
    #[serde(rename = "aboutHighlights", default)]
    pub highlights: Vec<Highlight>,
}

#[cfg(test)]
#[path = "tests/domain_tests.rs"]
mod tests;
