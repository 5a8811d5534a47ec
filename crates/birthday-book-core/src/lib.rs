//! Birthday Book Core Library
//!
//! Platform-independent rules behind the animated birthday card: the page
//! flow, effect token generation, share links and upload helpers.
//!
//! ## Overview
//!
//! The card is a three-page flip book. Opening the cover launches a batch of
//! hearts, sparkles and fireworks; the next page reveals the personal message
//! with an optional uploaded portrait. Nothing is persisted.
//!
//! ## Quick Start
//!
//! ```
//! use birthday_book_core::{CardConfig, CardState, OpenWatcher};
//! use rand::{rngs::SmallRng, SeedableRng};
//!
//! let config = CardConfig::default();
//! let mut state = CardState::new();
//! let mut watcher = OpenWatcher::new();
//! let mut rng = SmallRng::seed_from_u64(1);
//!
//! state.open();
//! let mut batch = None;
//! let launched = watcher
//!     .observe(state.is_open, 1_700_000_000_000, &config.effects, &mut rng)
//!     .apply(&mut batch);
//! assert!(launched);
//! assert_eq!(batch.map(|b| b.hearts.len()), Some(22));
//! ```

pub mod config;
pub mod effects;
pub mod error;
pub mod media;
pub mod share;
pub mod state;

// Re-exports
pub use config::{CardConfig, EffectCounts};
pub use effects::{
    mini_sparkles, EffectBatch, EffectKind, EffectToken, OpenWatcher, Trajectory,
    WatchOutcome,
};
pub use error::{CardError, Result};
pub use media::UploadKind;
pub use share::{ShareRequest, ShareRoute};
pub use state::{CardState, PageStage};
