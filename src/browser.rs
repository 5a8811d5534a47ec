//! Browser capability adapters.
//!
//! Thin wrappers over the Web APIs the card touches: file reading, object
//! URLs, media playback, fullscreen and share. Every function returns a
//! [`Result`]; callers in the view absorb failures so the card keeps playing.

use birthday_book_core::media;
use birthday_book_core::{CardError, Result, ShareRequest, ShareRoute};
use dioxus::prelude::FormData;
use js_sys::{Function, Object, Promise, Reflect};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, HtmlAudioElement, Url, Window};

/// Id of the single `<audio>` element on the page
pub const AUDIO_ELEMENT_ID: &str = "birthday-audio";

fn js_error(err: JsValue) -> CardError {
    CardError::Browser(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

fn window() -> Result<Window> {
    web_sys::window().ok_or(CardError::Unsupported("window"))
}

fn document() -> Result<Document> {
    window()?.document().ok_or(CardError::Unsupported("document"))
}

/// `name in target`, walking the prototype chain
fn has_property(target: &JsValue, name: &str) -> bool {
    Reflect::has(target, &JsValue::from_str(name)).unwrap_or(false)
}

/// Await a promise in the background and drop its outcome.
fn settle_quietly(promise: Promise, what: &'static str) {
    spawn_local(async move {
        if let Err(err) = JsFuture::from(promise).await {
            tracing::debug!(error = ?err, what, "browser promise rejected");
        }
    });
}

/// Milliseconds since the epoch, used to stamp effect batches
pub fn now_stamp() -> u64 {
    js_sys::Date::now().max(0.0) as u64
}

/// Fresh RNG for effect trajectories
pub fn effect_rng(stamp: u64) -> SmallRng {
    let noise = (js_sys::Math::random() * u64::MAX as f64) as u64;
    SmallRng::seed_from_u64(stamp ^ noise)
}

/// Full URL of the current page
pub fn page_url() -> Result<String> {
    window()?.location().href().map_err(js_error)
}

/// Read the first file of a picker selection.
///
/// Returns the file name with its bytes.
pub async fn read_first_file(form: &FormData) -> Result<(String, Vec<u8>)> {
    let engine = form.files().ok_or(CardError::NoFileSelected)?;
    let names = engine.files();
    let name = media::first_file(&names)?.to_string();

    let bytes = engine
        .read_file(&name)
        .await
        .ok_or_else(|| CardError::Browser(format!("could not read {name}")))?;
    tracing::debug!(file = %name, size = bytes.len(), "read uploaded file");
    Ok((name, bytes))
}

/// Wrap audio bytes in a blob and return a playable `blob:` URL.
///
/// The URL is never revoked; it lives until the page unloads.
pub fn audio_object_url(bytes: &[u8], file_name: &str) -> Result<String> {
    let mime = media::audio_mime_for(file_name);
    let blob = gloo::file::Blob::new_with_options(bytes, (!mime.is_empty()).then_some(mime));
    Url::create_object_url_with_blob(blob.as_ref()).map_err(js_error)
}

/// Set the volume and start playback of the card's audio element.
///
/// A rejected play promise (autoplay policy, no source) is swallowed.
pub fn play_audio(volume: f64) -> Result<()> {
    let audio = document()?
        .get_element_by_id(AUDIO_ELEMENT_ID)
        .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
        .ok_or(CardError::Unsupported("audio element"))?;

    audio.set_volume(volume);
    let promise = audio.play().map_err(js_error)?;
    settle_quietly(promise, "audio.play");
    Ok(())
}

/// Ask for fullscreen on the document root when the browser supports it.
pub fn request_fullscreen() -> Result<()> {
    let root = document()?
        .document_element()
        .ok_or(CardError::Unsupported("document element"))?;

    if !has_property(root.as_ref(), "requestFullscreen") {
        return Err(CardError::Unsupported("fullscreen"));
    }
    root.request_fullscreen().map(|_| ()).map_err(js_error)
}

/// Share through `navigator.share`, or open the WhatsApp link instead.
pub fn share(request: &ShareRequest) -> Result<ShareRoute> {
    let window = window()?;
    let navigator = window.navigator();
    let share_fn = Reflect::get(navigator.as_ref(), &JsValue::from_str("share"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok());

    let route = request.route(share_fn.is_some());
    match (&route, share_fn) {
        (ShareRoute::Native, Some(share_fn)) => {
            let data = Object::new();
            for (key, value) in [
                ("title", &request.title),
                ("text", &request.text),
                ("url", &request.url),
            ] {
                Reflect::set(&data, &JsValue::from_str(key), &JsValue::from_str(value))
                    .map_err(js_error)?;
            }

            let result = share_fn.call1(navigator.as_ref(), &data).map_err(js_error)?;
            if let Ok(promise) = result.dyn_into::<Promise>() {
                settle_quietly(promise, "navigator.share");
            }
        }
        (ShareRoute::Link(link), _) => {
            window.open_with_url(link).map_err(js_error)?;
        }
        (ShareRoute::Native, None) => return Err(CardError::Unsupported("share")),
    }

    Ok(route)
}
