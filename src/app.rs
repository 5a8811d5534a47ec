use dioxus::prelude::*;

use crate::context::load_config;
use crate::pages::CardPage;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the card configuration.
#[component]
pub fn App() -> Element {
    use_context_provider(load_config);

    rsx! {
        document::Title { "Birthday Book" }
        style { {GLOBAL_STYLES} }
        CardPage {}
    }
}
