//! End-to-end card flow: the observable behaviour of the page driven through
//! the same calls the view makes on each click.

use std::collections::HashSet;

use birthday_book_core::media::photo_data_url;
use birthday_book_core::{
    CardConfig, CardError, CardState, EffectBatch, OpenWatcher, PageStage, ShareRequest,
    ShareRoute,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

const PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
const SVG: &[u8] = br#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 10 10"><circle r="5"/></svg>"#;

/// Mirrors the view: every state change is pushed through the watcher.
struct Card {
    config: CardConfig,
    state: CardState,
    watcher: OpenWatcher,
    batch: Option<EffectBatch>,
    rng: SmallRng,
    clock: u64,
}

impl Card {
    fn load() -> Self {
        let mut card = Self {
            config: CardConfig::default(),
            state: CardState::new(),
            watcher: OpenWatcher::new(),
            batch: None,
            rng: SmallRng::seed_from_u64(2024),
            clock: 1_700_000_000_000,
        };
        card.settle();
        card
    }

    fn settle(&mut self) {
        self.clock += 16;
        self.watcher
            .observe(self.state.is_open, self.clock, &self.config.effects, &mut self.rng)
            .apply(&mut self.batch);
    }

    fn click_open(&mut self) {
        self.state.open();
        self.settle();
    }

    fn click_next(&mut self) -> Result<bool, CardError> {
        let changed = self.state.reveal_final_page();
        self.settle();
        changed
    }

    fn upload_photo(&mut self, file: Option<(&str, &[u8])>) {
        if let Some(Ok(url)) = file.map(|(name, bytes)| photo_data_url(bytes, name)) {
            self.state.set_photo(url);
        }
        self.settle();
    }
}

#[test]
fn initial_render_is_closed_without_effects() {
    let card = Card::load();
    assert_eq!(card.state.stage(), PageStage::Closed);
    assert!(card.batch.is_none());
    assert!(!card.state.is_second_page_open);
    assert_eq!(card.watcher.batches_generated(), 0);
}

#[test]
fn opening_produces_one_full_batch_with_unique_ids() {
    let mut card = Card::load();
    card.click_open();

    let batch = card.batch.as_ref().expect("batch after open");
    assert_eq!(batch.hearts.len(), 22);
    assert_eq!(batch.sparkles.len(), 40);
    assert_eq!(batch.fireworks.len(), 10);

    let ids: HashSet<&str> = batch.tokens().map(|t| t.id.as_str()).collect();
    assert_eq!(ids.len(), 72);
}

#[test]
fn later_clicks_do_not_regenerate_batches() {
    let mut card = Card::load();
    card.click_open();
    let first = card.batch.clone();

    card.click_open();
    card.upload_photo(Some(("me.png", PNG)));
    card.click_next().unwrap();
    card.click_next().unwrap();

    assert_eq!(card.watcher.batches_generated(), 1);
    assert_eq!(card.batch, first);
}

#[test]
fn uploaded_photo_shows_on_final_page() {
    let mut card = Card::load();
    card.upload_photo(Some(("me.png", PNG)));
    card.click_open();
    card.click_next().unwrap();

    assert_eq!(card.state.stage(), PageStage::FinalPage);
    let photo = card.state.uploaded_photo.as_deref().unwrap();
    assert!(photo.starts_with("data:image/png;base64,"));
}

#[test]
fn svg_photo_is_accepted() {
    let mut card = Card::load();
    card.upload_photo(Some(("balloon.svg", SVG)));
    card.click_open();
    card.click_next().unwrap();

    let photo = card.state.uploaded_photo.as_deref().unwrap();
    assert!(photo.starts_with("data:image/svg+xml;base64,"));
}

#[test]
fn closing_the_card_drops_the_batch_and_rearms() {
    let mut card = Card::load();
    card.click_open();
    assert!(card.batch.is_some());

    card.state.is_open = false;
    card.settle();
    assert!(card.batch.is_none());

    card.click_open();
    assert!(card.batch.is_some());
    assert_eq!(card.watcher.batches_generated(), 2);
}

#[test]
fn empty_selection_keeps_previous_photo() {
    let mut card = Card::load();
    card.upload_photo(None);
    assert!(card.state.uploaded_photo.is_none());

    card.upload_photo(Some(("me.png", PNG)));
    let before = card.state.uploaded_photo.clone();
    card.upload_photo(None);
    card.upload_photo(Some(("notes.txt", b"not an image")));
    assert_eq!(card.state.uploaded_photo, before);
}

#[test]
fn next_page_is_irreversible() {
    let mut card = Card::load();
    assert_eq!(card.click_next(), Err(CardError::CoverClosed));

    card.click_open();
    assert_eq!(card.click_next(), Ok(true));
    card.click_open();
    assert_eq!(card.click_next(), Ok(false));
    assert_eq!(card.state.stage(), PageStage::FinalPage);
}

#[test]
fn share_without_native_support_opens_whatsapp() {
    let config = CardConfig::default();
    let request = ShareRequest::new(&config, "https://cards.example/b day");

    let ShareRoute::Link(link) = request.route(false) else {
        panic!("expected fallback link");
    };
    assert_eq!(
        link,
        "https://wa.me/?text=%F0%9F%8E%89%20Happy%20Birthday%20Vishal%20%F0%9F%8E%82%20\
         Check%20this%20animated%20card!%20https%3A%2F%2Fcards.example%2Fb%20day"
    );
}
