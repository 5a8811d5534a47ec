//! Card state and the forward-only page flow.
//!
//! ```text
//! Closed --open()--> Open --reveal_final_page()--> FinalPage
//! ```
//!
//! Neither transition can be undone; a reload starts a fresh `CardState`.

use crate::error::{CardError, Result};

/// Where the reader is in the book
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum PageStage {
    /// Front cover showing, nothing animating
    #[default]
    Closed,
    /// Cover flipped, interstitial page visible, effects running
    Open,
    /// Interstitial flipped, final message visible
    FinalPage,
}

impl PageStage {
    /// Short name used in log records
    pub fn label(&self) -> &'static str {
        match self {
            PageStage::Closed => "closed",
            PageStage::Open => "open",
            PageStage::FinalPage => "final-page",
        }
    }
}

/// All mutable state of the card.
///
/// Lives for one page session only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CardState {
    pub is_open: bool,
    pub is_second_page_open: bool,
    /// Data URL of the uploaded portrait
    pub uploaded_photo: Option<String>,
    /// Object URL of the uploaded song
    pub audio_source_url: Option<String>,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage(&self) -> PageStage {
        match (self.is_open, self.is_second_page_open) {
            (false, _) => PageStage::Closed,
            (true, false) => PageStage::Open,
            (true, true) => PageStage::FinalPage,
        }
    }

    /// Flip the cover. Returns `true` if this call changed the state.
    pub fn open(&mut self) -> bool {
        if self.is_open {
            return false;
        }
        self.is_open = true;
        tracing::info!(stage = self.stage().label(), "cover opened");
        true
    }

    /// Flip the interstitial page and show the final message.
    ///
    /// Returns `Ok(false)` when the final page is already showing.
    pub fn reveal_final_page(&mut self) -> Result<bool> {
        if !self.is_open {
            return Err(CardError::CoverClosed);
        }
        if self.is_second_page_open {
            return Ok(false);
        }
        self.is_second_page_open = true;
        tracing::info!(stage = self.stage().label(), "final page revealed");
        Ok(true)
    }

    /// Replace the portrait with a new data URL
    pub fn set_photo(&mut self, data_url: String) {
        self.uploaded_photo = Some(data_url);
    }

    /// Swap in a new audio source. The previous URL is not released.
    pub fn set_audio_source(&mut self, url: String) {
        self.audio_source_url = Some(url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_and_empty() {
        let state = CardState::new();
        assert_eq!(state.stage(), PageStage::Closed);
        assert!(state.uploaded_photo.is_none());
        assert!(state.audio_source_url.is_none());
    }

    #[test]
    fn open_is_idempotent() {
        let mut state = CardState::new();
        assert!(state.open());
        assert!(!state.open());
        assert_eq!(state.stage(), PageStage::Open);
    }

    #[test]
    fn final_page_requires_open_cover() {
        let mut state = CardState::new();
        assert_eq!(state.reveal_final_page(), Err(CardError::CoverClosed));
        assert!(!state.is_second_page_open);
    }

    #[test]
    fn final_page_is_terminal() {
        let mut state = CardState::new();
        state.open();
        assert_eq!(state.reveal_final_page(), Ok(true));
        assert_eq!(state.reveal_final_page(), Ok(false));
        assert!(!state.open());
        assert_eq!(state.stage(), PageStage::FinalPage);
    }

    #[test]
    fn uploads_replace_previous_values() {
        let mut state = CardState::new();
        state.set_photo("data:image/png;base64,AAA".into());
        state.set_photo("data:image/png;base64,BBB".into());
        assert_eq!(state.uploaded_photo.as_deref(), Some("data:image/png;base64,BBB"));

        state.set_audio_source("blob:one".into());
        state.set_audio_source("blob:two".into());
        assert_eq!(state.audio_source_url.as_deref(), Some("blob:two"));
    }

    #[test]
    fn stage_labels() {
        assert_eq!(PageStage::Closed.label(), "closed");
        assert_eq!(PageStage::Open.label(), "open");
        assert_eq!(PageStage::FinalPage.label(), "final-page");
    }
}
