//! Render-ready view of the About section.

use shared::domain::ContentRecord;
use tracing::warn;

use crate::{
    icons::{IconHandle, IconRegistry},
    image_url::ImageUrlResolver,
    normalize::{normalize, DisplayImages},
};

const DEFAULT_HEADING: &str = "Welcome";
const DEFAULT_ALT_TITLE: &str = "About";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSize {
    pub width: u32,
    pub height: u32,
}

impl Default for RenderSize {
    fn default() -> Self {
        Self {
            width: 800,
            height: 1000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightCard {
    pub icon: IconHandle,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub index: usize,
    pub active: bool,
    pub label: String,
}

/// What the image region shows for one carousel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselFrame {
    pub index: usize,
    pub src: Option<String>,
    pub alt: String,
    pub indicators: Vec<Indicator>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutSection {
    pub images: DisplayImages,
    pub heading: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub highlights: Vec<HighlightCard>,
    alt_title: String,
}

fn non_empty(value: Option<&String>) -> Option<String> {
    value.filter(|v| !v.is_empty()).cloned()
}

impl AboutSection {
    /// `None` when there is no record; the section is not rendered at all.
    pub fn build(record: Option<&ContentRecord>, icons: &IconRegistry) -> Option<Self> {
        let record = record?;
        let title = non_empty(record.title.as_ref());

        let highlights = record
            .highlights
            .iter()
            .map(|highlight| HighlightCard {
                icon: icons.resolve(&highlight.icon_key),
                title: highlight.title.clone(),
                description: highlight.description.clone(),
            })
            .collect();

        Some(Self {
            images: normalize(Some(record)),
            heading: title.clone().unwrap_or_else(|| DEFAULT_HEADING.to_string()),
            subtitle: non_empty(record.subtitle.as_ref()),
            description: non_empty(record.description.as_ref()),
            highlights,
            alt_title: title.unwrap_or_else(|| DEFAULT_ALT_TITLE.to_string()),
        })
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }

    /// Frame for `current_index`, or `None` when there is no image there.
    ///
    /// Indicators are only produced when there is more than one image. A
    /// reference the resolver rejects leaves `src` empty.
    pub fn frame(
        &self,
        current_index: usize,
        resolver: &dyn ImageUrlResolver,
        size: RenderSize,
    ) -> Option<CarouselFrame> {
        let image = self.images.get(current_index)?;

        let src = match resolver.resolve(image, size.width, size.height) {
            Ok(src) => Some(src),
            Err(err) => {
                warn!(
                    index = current_index,
                    asset_ref = image.asset_ref(),
                    "about: image url not resolved: {err}"
                );
                None
            }
        };

        let indicators = if self.images.len() > 1 {
            (0..self.images.len())
                .map(|index| Indicator {
                    index,
                    active: index == current_index,
                    label: format!("Go to slide {}", index + 1),
                })
                .collect()
        } else {
            Vec::new()
        };

        Some(CarouselFrame {
            index: current_index,
            src,
            alt: format!("{} - {}", self.alt_title, current_index + 1),
            indicators,
        })
    }
}

#[cfg(test)]
#[path = "tests/section_tests.rs"]
mod tests;
