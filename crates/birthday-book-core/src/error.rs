//! Error types for Birthday Book

use thiserror::Error;

/// Errors raised by card operations and browser adapters.
///
/// None of these reach the user; the view layer absorbs them at the
/// event-handler boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CardError {
    /// The final page was requested before the cover was opened
    #[error("Cover is still closed")]
    CoverClosed,

    /// The file picker closed without a selection
    #[error("No file selected")]
    NoFileSelected,

    /// Uploaded bytes are not a recognised image
    #[error("Unsupported image data")]
    UnsupportedImage,

    /// A browser capability is missing (fullscreen, share, audio element)
    #[error("Capability not available: {0}")]
    Unsupported(&'static str),

    /// A browser call rejected or threw
    #[error("Browser error: {0}")]
    Browser(String),
}

/// Result alias for card operations
pub type Result<T> = std::result::Result<T, CardError>;
