//! Effect layer: hearts, sparkles and fireworks over the whole page.

use birthday_book_core::{EffectBatch, EffectKind};
use dioxus::prelude::*;

/// CSS classes for an effect element
pub fn effect_class(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::Heart => "fx fx-heart",
        EffectKind::Sparkle => "fx fx-sparkle",
        EffectKind::Firework => "fx fx-firework",
        EffectKind::MiniSparkle => "fx fx-mini-sparkle",
    }
}

/// Renders one element per token of the current batch.
///
/// Renders nothing while there is no batch, i.e. while the card is closed.
#[component]
pub fn EffectLayer(batch: Option<EffectBatch>, recipient: String) -> Element {
    let Some(batch) = batch else {
        return rsx! {};
    };

    rsx! {
        div { class: "fx-layer", "aria-hidden": "true",
            for token in batch.hearts.iter() {
                div {
                    key: "{token.id}",
                    class: effect_class(token.kind),
                    style: "{token.style()}",
                    "❤️ "
                    span { class: "fx-heart__name", "{recipient}" }
                }
            }
            for token in batch.sparkles.iter() {
                div {
                    key: "{token.id}",
                    class: effect_class(token.kind),
                    style: "{token.style()}",
                    "✨"
                }
            }
            for token in batch.fireworks.iter() {
                div {
                    key: "{token.id}",
                    class: effect_class(token.kind),
                    style: "{token.style()}",
                }
            }
        }
    }
}
