//! Keeps the carousel controller in step with the current content snapshot.

use std::time::Duration;

use shared::domain::ContentRecord;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::{
    carousel::{CarouselController, CarouselMode, CarouselState},
    icons::IconRegistry,
    image_url::ImageUrlResolver,
    section::{AboutSection, CarouselFrame, RenderSize},
};

pub struct AboutPresenter<'a> {
    icons: &'a IconRegistry,
    section: Option<AboutSection>,
    carousel: CarouselController,
}

impl<'a> AboutPresenter<'a> {
    pub fn mount(
        record: Option<&ContentRecord>,
        icons: &'a IconRegistry,
        rotation_interval: Duration,
    ) -> Self {
        let section = AboutSection::build(record, icons);
        let image_count = section.as_ref().map_or(0, AboutSection::image_count);
        info!(
            present = section.is_some(),
            image_count, "about: mounted"
        );

        Self {
            icons,
            section,
            carousel: CarouselController::mount(image_count, rotation_interval),
        }
    }

    /// Replaces the content with a fresh snapshot. The carousel index
    /// carries over while it still points at an image.
    pub fn reload(&mut self, record: Option<&ContentRecord>) {
        self.section = AboutSection::build(record, self.icons);
        let image_count = self.section.as_ref().map_or(0, AboutSection::image_count);
        debug!(
            present = self.section.is_some(),
            image_count, "about: content reloaded"
        );
        self.carousel.set_image_count(image_count);
    }

    pub fn section(&self) -> Option<&AboutSection> {
        self.section.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.carousel.current_index()
    }

    pub fn mode(&self) -> CarouselMode {
        self.carousel.mode()
    }

    /// Indicator activation from the render layer.
    pub fn select(&self, index: usize) -> bool {
        self.carousel.select(index)
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.carousel.subscribe()
    }

    pub fn current_frame(
        &self,
        resolver: &dyn ImageUrlResolver,
        size: RenderSize,
    ) -> Option<CarouselFrame> {
        self.section
            .as_ref()?
            .frame(self.carousel.current_index(), resolver, size)
    }

    pub fn teardown(self) {
        self.carousel.teardown();
    }
}

#[cfg(test)]
#[path = "tests/presenter_tests.rs"]
mod tests;
