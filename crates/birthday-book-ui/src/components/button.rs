//! Button Components
//!
//! Button styles used across the card:
//! - Control: white pills on the top control bar
//! - Open: gold button on the front cover
//! - Next: purple button on the interstitial page
//! - Wishes: gradient call-to-action on the final page

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Control bar action (fullscreen, share)
    #[default]
    Control,
    /// "Open ✨" on the cover
    Open,
    /// "Next Page ➡️" on the interstitial page
    Next,
    /// "🎁 Best Wishes", grows on hover and shrinks on press
    Wishes,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Control => "control-btn",
            ButtonVariant::Open => "btn-open",
            ButtonVariant::Next => "btn-next",
            ButtonVariant::Wishes => "btn-wishes",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, emoji)
    pub children: Element,
    /// Click handler; decorative buttons leave it unset
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Styled button
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::Open,
///         onclick: move |_| state.write().open(),
///         "Open ✨"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let full_class = button_class(props.variant, props.class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}

fn button_class(variant: ButtonVariant, extra: Option<&str>) -> String {
    match extra.filter(|c| !c.is_empty()) {
        Some(extra) => format!("{} {}", variant.class(), extra),
        None => variant.class().to_string(),
    }
}
