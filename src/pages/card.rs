//! Card page - the whole birthday card.
//!
//! Owns the card state and wires the presentational components to the
//! browser adapters. Transition side effects (effect batch, music) hang off
//! a single watcher on the open flag.

use birthday_book_core::{
    media, mini_sparkles, CardState, EffectBatch, OpenWatcher, ShareRequest,
};
use birthday_book_ui::{Book, ControlBar, EffectLayer};
use dioxus::prelude::*;

use crate::browser::{self, AUDIO_ELEMENT_ID};
use crate::context::use_card_config;

#[component]
pub fn CardPage() -> Element {
    let config = use_card_config();
    let mut state = use_signal(CardState::new);
    let mut watcher = use_signal(OpenWatcher::new);
    let mut batch = use_signal(|| None::<EffectBatch>);
    let sparkles = use_hook(|| {
        let mut rng = browser::effect_rng(browser::now_stamp());
        mini_sparkles(config.mini_sparkles, &mut rng)
    });

    let is_open = use_memo(move || state.read().is_open);

    // Runs on mount and whenever the open flag flips.
    let effects = config.effects;
    let volume = config.volume;
    use_effect(move || {
        let open = is_open();
        let stamp = browser::now_stamp();
        let mut rng = browser::effect_rng(stamp);

        let outcome = watcher.write().observe(open, stamp, &effects, &mut rng);
        if outcome.is_keep() {
            return;
        }
        if outcome.apply(&mut batch.write()) {
            if let Err(err) = browser::play_audio(volume) {
                tracing::debug!(%err, "music did not start");
            }
        }
    });

    let on_open = move |_| {
        state.write().open();
    };

    let on_next = move |_| {
        if let Err(err) = state.write().reveal_final_page() {
            tracing::debug!(%err, "next page ignored");
        }
    };

    let on_photo = move |evt: FormEvent| {
        spawn(async move {
            let upload = browser::read_first_file(&evt)
                .await
                .and_then(|(name, bytes)| media::photo_data_url(&bytes, &name));
            match upload {
                Ok(url) => state.write().set_photo(url),
                Err(err) => tracing::debug!(%err, "photo upload skipped"),
            }
        });
    };

    let on_music = move |evt: FormEvent| {
        spawn(async move {
            let upload = browser::read_first_file(&evt)
                .await
                .and_then(|(name, bytes)| browser::audio_object_url(&bytes, &name));
            match upload {
                Ok(url) => state.write().set_audio_source(url),
                Err(err) => tracing::debug!(%err, "music upload skipped"),
            }
        });
    };

    let on_fullscreen = move |_| {
        if let Err(err) = browser::request_fullscreen() {
            tracing::debug!(%err, "fullscreen unavailable");
        }
    };

    let share_config = config.clone();
    let on_share = move |_| {
        let url = browser::page_url().unwrap_or_default();
        let request = ShareRequest::new(&share_config, url);
        match browser::share(&request) {
            Ok(route) => tracing::info!(?route, "card shared"),
            Err(err) => tracing::debug!(%err, "share failed"),
        }
    };

    let card = state.read();

    rsx! {
        main { class: "card-page",
            audio {
                id: AUDIO_ELEMENT_ID,
                r#loop: true,
                src: card.audio_source_url.clone(),
            }

            ControlBar { on_photo, on_music, on_fullscreen, on_share }

            Book {
                stage: card.stage(),
                recipient: config.recipient.clone(),
                headline: config.headline(),
                message: config.message.clone(),
                photo: card.uploaded_photo.clone(),
                mini_sparkles: sparkles,
                on_open,
                on_next,
            }

            EffectLayer { batch: batch(), recipient: config.recipient.clone() }
        }
    }
}
