//! About section core: image normalization, icon lookup, and the auto-advancing carousel.

pub mod carousel;
pub mod content_source;
pub mod icons;
pub mod image_url;
pub mod normalize;
pub mod presenter;
pub mod section;

pub use carousel::{CarouselController, CarouselMode, CarouselState, DEFAULT_ROTATION_INTERVAL};
pub use content_source::{ContentSource, FileContentSource, StaticContentSource};
pub use icons::{IconHandle, IconRegistry};
pub use image_url::{CdnImageUrlResolver, ImageUrlResolver};
pub use normalize::{normalize, DisplayImages};
pub use presenter::AboutPresenter;
pub use section::{AboutSection, CarouselFrame, HighlightCard, Indicator, RenderSize};
