//! Uploaded media helpers.
//!
//! Photos become self-contained data URLs so the portrait survives without
//! any blob bookkeeping. Songs keep their bytes in a browser blob; here we only
//! work out which MIME type to give it.

use base64::Engine;

use crate::error::{CardError, Result};

/// The two file pickers on the control bar
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UploadKind {
    Photo,
    Music,
}

impl UploadKind {
    /// Value of the picker's `accept` attribute
    pub fn accept(&self) -> &'static str {
        match self {
            UploadKind::Photo => "image/*",
            UploadKind::Music => "audio/*",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UploadKind::Photo => "📸 Upload Photo",
            UploadKind::Music => "🎵 Upload Music",
        }
    }
}

/// First entry of a picker selection.
///
/// Pickers here are single-select; extra entries are ignored.
pub fn first_file(names: &[String]) -> Result<&str> {
    names
        .first()
        .map(String::as_str)
        .ok_or(CardError::NoFileSelected)
}

/// Encode image bytes as `data:{mime};base64,...`.
///
/// The MIME type is sniffed from the bytes first. Formats without a binary
/// signature (SVG) or that the sniffer doesn't know (HEIC, AVIF) fall back to
/// the file name, the same way the browser's `File.type` is derived.
pub fn photo_data_url(bytes: &[u8], file_name: &str) -> Result<String> {
    if bytes.is_empty() {
        return Err(CardError::UnsupportedImage);
    }
    let mime = image_mime_for(bytes, file_name).ok_or(CardError::UnsupportedImage)?;
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(format!("data:{};base64,{}", mime, encoded))
}

fn image_mime_for(bytes: &[u8], file_name: &str) -> Option<&'static str> {
    if let Ok(format) = image::guess_format(bytes) {
        return Some(format.to_mime_type());
    }
    if looks_like_svg(bytes) {
        return Some("image/svg+xml");
    }

    let ext = extension(file_name);
    match ext.as_str() {
        "svg" | "svgz" => Some("image/svg+xml"),
        "heic" => Some("image/heic"),
        "heif" => Some("image/heif"),
        _ => image::ImageFormat::from_extension(&ext).map(|f| f.to_mime_type()),
    }
}

/// SVG is XML text; look for the root element near the start.
fn looks_like_svg(bytes: &[u8]) -> bool {
    let head = &bytes[..bytes.len().min(1024)];
    let text = String::from_utf8_lossy(head);
    let text = text.trim_start_matches('\u{feff}').trim_start();
    (text.starts_with("<svg") || text.starts_with("<?xml") || text.starts_with("<!DOCTYPE svg"))
        && text.contains("<svg")
}

fn extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// MIME type for an audio file, from its extension.
///
/// Returns an empty string when unknown; the browser then sniffs the blob.
pub fn audio_mime_for(file_name: &str) -> &'static str {
    match extension(file_name).as_str() {
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "oga" => "audio/ogg",
        "m4a" | "mp4" => "audio/mp4",
        "aac" => "audio/aac",
        "flac" => "audio/flac",
        "webm" => "audio/webm",
        _ => "",
    }
}
