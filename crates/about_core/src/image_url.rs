use shared::{domain::ImageRef, error::ContentError};
use url::Url;

pub const DEFAULT_CDN_BASE_URL: &str = "https://cdn.sanity.io";

/// Turns an image reference into a fetchable URL at the requested size.
pub trait ImageUrlResolver: Send + Sync {
    fn resolve(&self, image: &ImageRef, width: u32, height: u32) -> Result<String, ContentError>;
}

/// Resolver for the content service's image CDN.
///
/// Asset refs look like `image-<id>-<w>x<h>-<ext>` and map to
/// `<base>/images/<project>/<dataset>/<id>-<w>x<h>.<ext>?w=..&h=..`.
#[derive(Debug, Clone)]
pub struct CdnImageUrlResolver {
    base_url: Url,
    project_id: String,
    dataset: String,
}

impl CdnImageUrlResolver {
    pub fn new(
        base_url: &str,
        project_id: impl Into<String>,
        dataset: impl Into<String>,
    ) -> Result<Self, ContentError> {
        let parsed = Url::parse(base_url).map_err(|err| ContentError::InvalidBaseUrl {
            url: base_url.to_string(),
            reason: err.to_string(),
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ContentError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            });
        }

        Ok(Self {
            base_url: parsed,
            project_id: project_id.into(),
            dataset: dataset.into(),
        })
    }
}

struct AssetFile<'a> {
    id: &'a str,
    dimensions: &'a str,
    extension: &'a str,
}

fn parse_asset_ref(asset_ref: &str) -> Option<AssetFile<'_>> {
    let rest = asset_ref.strip_prefix("image-")?;
    let mut parts = rest.rsplitn(3, '-');
    let extension = parts.next()?;
    let dimensions = parts.next()?;
    let id = parts.next()?;

    let (w, h) = dimensions.split_once('x')?;
    let is_number = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if id.is_empty() || extension.is_empty() || !is_number(w) || !is_number(h) {
        return None;
    }

    Some(AssetFile {
        id,
        dimensions,
        extension,
    })
}

impl ImageUrlResolver for CdnImageUrlResolver {
    fn resolve(&self, image: &ImageRef, width: u32, height: u32) -> Result<String, ContentError> {
        let asset_ref = image.asset_ref();
        let file = parse_asset_ref(asset_ref)
            .ok_or_else(|| ContentError::InvalidAssetRef(asset_ref.to_string()))?;
        let file_name = format!("{}-{}.{}", file.id, file.dimensions, file.extension);

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ContentError::InvalidBaseUrl {
                url: self.base_url.to_string(),
                reason: "url cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend([
                "images",
                self.project_id.as_str(),
                self.dataset.as_str(),
                file_name.as_str(),
            ]);
        url.query_pairs_mut()
            .append_pair("w", &width.to_string())
            .append_pair("h", &height.to_string());

        Ok(url.into())
    }
}

#[cfg(test)]
#[path = "tests/image_url_tests.rs"]
mod tests;
