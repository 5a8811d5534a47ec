//! Birthday Book UI Components
//!
//! Presentational Dioxus components for the animated birthday card. They
//! take plain props and callbacks; browser access lives in the app crate.
//!
//! ## Look
//!
//! - **Pink to indigo** page gradient behind a 340×440 book
//! - **Gold** call-to-action buttons, **purple** navigation buttons
//! - Every animation is a CSS keyframe driven by per-element custom
//!   properties (`--dx`, `--dy`, `--rot`, `--scale-from`, `--scale-to`)

pub mod components;

pub use components::*;
