//! `<video>` element control.

use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

/// Pause, drop the current source and reload so the element releases its
/// decoder and network connection.
fn reset(video: &HtmlVideoElement) {
    let _ = video.pause();
    let _ = video.remove_attribute("src");
    video.load();
}

/// Replace the element's source.
///
/// The element is fully reset first so two clips never play (or buffer)
/// on the same element, then loads only metadata for the new source.
pub fn load_source(video: &HtmlVideoElement, url: &str) {
    reset(video);
    video.set_preload("metadata");
    video.set_src(url);
    video.load();
}

/// Stop playback and clear the source.
pub fn clear_source(video: &HtmlVideoElement) {
    reset(video);
}

/// Start playback, ignoring autoplay-policy rejections.
pub fn play(video: &HtmlVideoElement) {
    let Ok(promise) = video.play() else {
        return;
    };
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::debug!("video playback was not started: {e:?}");
        }
    });
}
