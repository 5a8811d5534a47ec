//! Control bar pinned to the top of the page.

use birthday_book_core::UploadKind;
use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};

/// Upload, fullscreen and share controls
#[component]
pub fn ControlBar(
    /// Photo picker changed
    on_photo: EventHandler<FormEvent>,
    /// Music picker changed
    on_music: EventHandler<FormEvent>,
    on_fullscreen: EventHandler<()>,
    on_share: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "control-bar",
            UploadButton { kind: UploadKind::Photo, on_select: on_photo }
            UploadButton { kind: UploadKind::Music, on_select: on_music }
            Button {
                variant: ButtonVariant::Control,
                onclick: move |_| on_fullscreen.call(()),
                "📱 Fullscreen"
            }
            Button {
                variant: ButtonVariant::Control,
                onclick: move |_| on_share.call(()),
                "🔗 Share"
            }
        }
    }
}

/// A label styled as a button wrapping a hidden single-file picker
#[component]
pub fn UploadButton(kind: UploadKind, on_select: EventHandler<FormEvent>) -> Element {
    rsx! {
        label { class: ButtonVariant::Control.class(),
            "{kind.label()}"
            input {
                r#type: "file",
                accept: kind.accept(),
                hidden: true,
                onchange: move |evt| on_select.call(evt),
            }
        }
    }
}
