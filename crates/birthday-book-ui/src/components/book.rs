//! The flip book: front cover, interstitial page and final page stacked in
//! one 3D scene. Leaves rotate around their left edge.

use birthday_book_core::{EffectToken, PageStage};
use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use super::final_page::FinalPage;

/// Class for a rotating leaf; flipped leaves get the `--flipped` modifier
pub fn leaf_class(base: &str, flipped: bool) -> String {
    if flipped {
        format!("leaf {base} {base}--flipped")
    } else {
        format!("leaf {base}")
    }
}

/// Three-page book.
///
/// Pages are declared back to front so that later siblings sit on top.
#[component]
pub fn Book(
    stage: PageStage,
    recipient: String,
    headline: String,
    message: String,
    photo: Option<String>,
    mini_sparkles: Vec<EffectToken>,
    on_open: EventHandler<()>,
    on_next: EventHandler<()>,
) -> Element {
    let is_open = stage != PageStage::Closed;
    let final_shown = stage == PageStage::FinalPage;

    rsx! {
        div { class: "book-scene",
            div { class: "book",
                if final_shown {
                    FinalPage {
                        photo,
                        recipient,
                        headline,
                        message,
                        sparkles: mini_sparkles,
                    }
                }

                div { class: leaf_class("surprise-page", final_shown),
                    h2 { class: "surprise-page__title", "🎂 Surprise Inside 🎂" }
                    Button {
                        variant: ButtonVariant::Next,
                        onclick: move |_| on_next.call(()),
                        "Next Page ➡️"
                    }
                }

                div { class: leaf_class("cover", is_open),
                    h1 { class: "cover__title", "🎁 Birthday Book 🎁" }
                    if !is_open {
                        Button {
                            variant: ButtonVariant::Open,
                            onclick: move |_| on_open.call(()),
                            "Open ✨"
                        }
                    }
                }
            }
        }
    }
}
