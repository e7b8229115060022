// SPDX-License-Identifier: MPL-2.0
use iced_folio::gallery::lightbox::{Effect, Message};
use iced_folio::gallery::{layout, LightboxController, LightboxKey};
use iced_folio::manifest::ImageRecord;
use iced_folio::media::ImageData;
use std::sync::Arc;
use std::time::Instant;

fn images(n: usize) -> Arc<[ImageRecord]> {
    (0..n)
        .map(|i| ImageRecord::new(format!("https://a.com/{i}.jpg"), Some(format!("Photo {i}"))))
        .collect()
}

fn pixel() -> ImageData {
    ImageData::from_rgba(1, 1, vec![255; 4])
}

#[test]
fn next_then_prev_returns_to_start_for_every_index() {
    for len in 1..6 {
        for start in 0..len {
            let mut lightbox = LightboxController::new();
            assert!(lightbox.open(images(len), start));
            lightbox.next();
            lightbox.prev();
            assert_eq!(lightbox.current_index(), Some(start));
        }
    }
}

#[test]
fn full_cycle_of_next_visits_every_image_once() {
    let len = 5;
    let mut lightbox = LightboxController::new();
    lightbox.open(images(len), 3);

    let mut seen = Vec::new();
    for _ in 0..len {
        seen.push(lightbox.current_index().unwrap_or(usize::MAX));
        lightbox.next();
    }
    seen.sort_unstable();
    assert_eq!(seen, (0..len).collect::<Vec<_>>());
    assert_eq!(lightbox.current_index(), Some(3));
}

#[test]
fn three_image_walkthrough() {
    let mut lightbox = LightboxController::new();
    lightbox.open(images(3), 2);
    assert_eq!(lightbox.position().map(|p| p.to_string()).as_deref(), Some("3 / 3"));

    assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), Effect::Navigated(0));
    assert_eq!(lightbox.position().map(|p| p.to_string()).as_deref(), Some("1 / 3"));

    assert_eq!(lightbox.handle_key(LightboxKey::ArrowLeft), Effect::Navigated(2));
    assert_eq!(lightbox.handle_key(LightboxKey::Escape), Effect::Closed);
    assert!(!lightbox.is_open());
    assert_eq!(lightbox.position(), None);
}

#[test]
fn caption_waits_for_image_on_every_navigation() {
    let mut lightbox = LightboxController::new();
    lightbox.open(images(2), 0);
    assert_eq!(lightbox.caption(), None);

    assert!(lightbox.on_asset_ready(0, pixel(), Instant::now()));
    assert_eq!(lightbox.caption(), Some("Photo 0"));

    lightbox.update(Message::Next);
    assert!(!lightbox.image_loaded());
    assert_eq!(lightbox.caption(), None);

    // A late signal for the image we left is ignored.
    assert!(!lightbox.on_asset_ready(0, pixel(), Instant::now()));
    assert_eq!(lightbox.caption(), None);
}

#[test]
fn presses_inside_content_do_not_close() {
    let mut lightbox = LightboxController::new();
    lightbox.open(images(4), 1);

    assert_eq!(lightbox.update(Message::ContentPressed), Effect::None);
    assert!(lightbox.is_open());

    assert_eq!(lightbox.update(Message::BackdropPressed), Effect::Closed);
    assert_eq!(lightbox.update(Message::BackdropPressed), Effect::None);
}

#[test]
fn keys_do_nothing_while_closed() {
    let mut lightbox = LightboxController::new();
    assert_eq!(lightbox.handle_key(LightboxKey::ArrowRight), Effect::None);
    assert_eq!(lightbox.handle_key(LightboxKey::Escape), Effect::None);
    assert_eq!(lightbox.current_index(), None);
}

#[test]
fn grid_columns_cover_every_item_once() {
    for len in 0..20 {
        for width in [320.0, 800.0, 1400.0] {
            let columns = layout::column_count(width, 3);
            let runs = layout::distribute(len, columns);
            let covered: Vec<usize> = runs.into_iter().flatten().collect();
            assert_eq!(covered, (0..len).collect::<Vec<_>>());
        }
    }
}
