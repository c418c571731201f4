use super::*;

use shared::{domain::ImageRef, error::ContentError};

use crate::carousel::DEFAULT_ROTATION_INTERVAL;

struct EchoResolver;

impl ImageUrlResolver for EchoResolver {
    fn resolve(&self, image: &ImageRef, _width: u32, _height: u32) -> Result<String, ContentError> {
        Ok(image.asset_ref().to_string())
    }
}

fn gallery(refs: &[&str]) -> ContentRecord {
    ContentRecord {
        image_list: refs.iter().map(|r| ImageRef::new(*r)).collect(),
        ..ContentRecord::default()
    }
}

#[tokio::test(start_paused = true)]
async fn frames_follow_the_timer() {
    let icons = IconRegistry::standard();
    let record = gallery(&["a", "b"]);
    let presenter = AboutPresenter::mount(Some(&record), &icons, DEFAULT_ROTATION_INTERVAL);

    let first = presenter
        .current_frame(&EchoResolver, RenderSize::default())
        .expect("frame");
    assert_eq!(first.src.as_deref(), Some("a"));

    tokio::time::sleep(Duration::from_millis(5_001)).await;
    let second = presenter
        .current_frame(&EchoResolver, RenderSize::default())
        .expect("frame");
    assert_eq!(second.src.as_deref(), Some("b"));
    assert!(second.indicators[1].active);
}

#[tokio::test(start_paused = true)]
async fn absent_record_mounts_idle_with_nothing_to_render() {
    let icons = IconRegistry::standard();
    let presenter = AboutPresenter::mount(None, &icons, DEFAULT_ROTATION_INTERVAL);

    assert!(presenter.section().is_none());
    assert_eq!(presenter.mode(), CarouselMode::Idle);
    assert!(presenter
        .current_frame(&EchoResolver, RenderSize::default())
        .is_none());
}

#[tokio::test(start_paused = true)]
async fn reload_that_shrinks_the_gallery_keeps_the_frame_valid() {
    let icons = IconRegistry::standard();
    let mut presenter =
        AboutPresenter::mount(Some(&gallery(&["a", "b", "c"])), &icons, DEFAULT_ROTATION_INTERVAL);
    assert!(presenter.select(2));

    presenter.reload(Some(&gallery(&["x", "y"])));
    assert_eq!(presenter.current_index(), 0);
    assert_eq!(presenter.mode(), CarouselMode::Cycling);

    let frame = presenter
        .current_frame(&EchoResolver, RenderSize::default())
        .expect("frame");
    assert_eq!(frame.src.as_deref(), Some("x"));
}

#[tokio::test(start_paused = true)]
async fn reload_to_no_record_stops_cycling() {
    let icons = IconRegistry::standard();
    let mut presenter =
        AboutPresenter::mount(Some(&gallery(&["a", "b"])), &icons, DEFAULT_ROTATION_INTERVAL);
    let observer = presenter.subscribe();

    presenter.reload(None);
    assert_eq!(presenter.mode(), CarouselMode::Idle);

    tokio::time::sleep(Duration::from_millis(12_000)).await;
    assert_eq!(observer.borrow().current_index(), 0);

    presenter.teardown();
}
