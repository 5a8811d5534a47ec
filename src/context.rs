//! Card configuration context.
//!
//! The configuration is resolved once at launch and provided to every
//! component via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In App component
//! use_context_provider(load_config);
//!
//! // In child components
//! let config = use_card_config();
//! ```

use birthday_book_core::CardConfig;
use dioxus::prelude::*;

/// Build the card configuration.
pub fn load_config() -> CardConfig {
    let config = CardConfig::default();
    tracing::info!(recipient = %config.recipient, "card configured");
    config
}

/// Hook to access the card configuration from context.
pub fn use_card_config() -> CardConfig {
    use_context::<CardConfig>()
}
