//! Card configuration.
//!
//! The card is fixed: recipient, wish and share text are compiled in and no
//! environment or URL input is read.

/// Default recipient shown on hearts, the final page and the share text
pub const DEFAULT_RECIPIENT: &str = "Vishal";

/// Default wish shown on the final page
pub const DEFAULT_MESSAGE: &str = "🎂 Wishing you a year filled with endless smiles, big dreams, \
glowing success and beautiful memories. May every day bring you new reasons to celebrate \
and shine brighter than ever! 🌟💖";

/// Title passed to the native share sheet
pub const SHARE_TITLE: &str = "Birthday Card";

/// Playback volume applied when the cover opens
pub const DEFAULT_VOLUME: f64 = 0.7;

/// Number of floating sparkles on the final page
pub const DEFAULT_MINI_SPARKLES: usize = 12;

/// Size of each effect batch generated when the card opens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectCounts {
    pub hearts: usize,
    pub sparkles: usize,
    pub fireworks: usize,
}

impl Default for EffectCounts {
    fn default() -> Self {
        Self {
            hearts: 22,
            sparkles: 40,
            fireworks: 10,
        }
    }
}

impl EffectCounts {
    /// Total number of tokens in one batch
    pub fn total(&self) -> usize {
        self.hearts + self.sparkles + self.fireworks
    }
}

/// Everything that personalises a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardConfig {
    /// Name rendered on hearts, the final page heading and the share text
    pub recipient: String,
    /// Wish paragraph on the final page
    pub message: String,
    pub share_title: String,
    /// Audio volume in `[0, 1]`
    pub volume: f64,
    pub effects: EffectCounts,
    pub mini_sparkles: usize,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            message: DEFAULT_MESSAGE.to_string(),
            share_title: SHARE_TITLE.to_string(),
            volume: DEFAULT_VOLUME,
            effects: EffectCounts::default(),
            mini_sparkles: DEFAULT_MINI_SPARKLES,
        }
    }
}

impl CardConfig {
    /// Greeting used by both the native share sheet and the fallback link
    pub fn share_text(&self) -> String {
        format!(
            "🎉 Happy Birthday {} 🎂 Check this animated card!",
            self.recipient
        )
    }

    /// Heading on the final page
    pub fn headline(&self) -> String {
        format!("🎉 {} 🎉", self.recipient)
    }
}
