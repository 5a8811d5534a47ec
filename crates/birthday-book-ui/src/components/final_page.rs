//! Final page: portrait, name, wish and the party around them.

use birthday_book_core::EffectToken;
use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use super::effects::effect_class;

/// Emoji pair drifting out of one corner of the final page
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerBurst {
    /// CSS modifier: `top-left`, `top-right`, `bottom-left`, `bottom-right`
    pub corner: &'static str,
    pub emoji: &'static str,
    pub duration_s: f64,
}

pub const CORNER_BURSTS: [CornerBurst; 4] = [
    CornerBurst { corner: "top-left", emoji: "🎈🎉", duration_s: 3.0 },
    CornerBurst { corner: "top-right", emoji: "🎊✨", duration_s: 3.2 },
    CornerBurst { corner: "bottom-left", emoji: "🎁💫", duration_s: 3.1 },
    CornerBurst { corner: "bottom-right", emoji: "🎆🥳", duration_s: 3.3 },
];

/// Last page of the book, mounted once the reader presses "Next Page"
#[component]
pub fn FinalPage(
    /// Data URL of the uploaded portrait
    photo: Option<String>,
    recipient: String,
    headline: String,
    message: String,
    sparkles: Vec<EffectToken>,
) -> Element {
    rsx! {
        div { class: "final-page",
            div { class: "neon-ring" }

            if let Some(src) = photo {
                img { class: "portrait", src: "{src}", alt: "{recipient}" }
            }

            h2 { class: "final-page__name", "{headline}" }
            p { class: "final-page__message", "{message}" }

            for burst in CORNER_BURSTS.iter() {
                div {
                    key: "{burst.corner}",
                    class: "corner-burst corner-burst--{burst.corner}",
                    style: "animation-duration: {burst.duration_s}s;",
                    "{burst.emoji}"
                }
            }

            // Decorative: there is nothing to do after the wishes.
            Button { variant: ButtonVariant::Wishes, "🎁 Best Wishes" }

            for token in sparkles.iter() {
                div {
                    key: "{token.id}",
                    class: effect_class(token.kind),
                    style: "{token.style()}",
                    "✨"
                }
            }
        }
    }
}
