//! Share payload and the WhatsApp fallback link.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::CardConfig;

/// Prefix of the fallback share target
pub const WHATSAPP_SHARE_BASE: &str = "https://wa.me/?text=";

/// Characters `encodeURIComponent` leaves untouched, besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode a string the way JavaScript's `encodeURIComponent` does.
pub fn encode_uri_component(input: &str) -> String {
    utf8_percent_encode(input, URI_COMPONENT).to_string()
}

/// How a share request gets delivered
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareRoute {
    /// Hand the payload to `navigator.share`
    Native,
    /// Open this link in a new browsing context
    Link(String),
}

/// What gets shared
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareRequest {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl ShareRequest {
    pub fn new(config: &CardConfig, page_url: impl Into<String>) -> Self {
        Self {
            title: config.share_title.clone(),
            text: config.share_text(),
            url: page_url.into(),
        }
    }

    /// `https://wa.me/?text=` followed by the encoded `"{text} {url}"`
    pub fn fallback_link(&self) -> String {
        let message = format!("{} {}", self.text, self.url);
        format!("{}{}", WHATSAPP_SHARE_BASE, encode_uri_component(&message))
    }

    /// Pick the delivery route given whether native share exists
    pub fn route(&self, native_available: bool) -> ShareRoute {
        if native_available {
            ShareRoute::Native
        } else {
            ShareRoute::Link(self.fallback_link())
        }
    }
}
