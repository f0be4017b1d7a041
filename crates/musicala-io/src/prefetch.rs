//! Idle-time `<link rel="preload">` hints.

use std::time::Duration;

use gloo_timers::callback::Timeout;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

/// Append `<link rel="preload" as="video" href=src>` to the document head.
fn append_preload_link(src: &str) -> Option<()> {
    let document = crate::dom::document()?;
    let link = document.create_element("link").ok()?;
    link.set_attribute("rel", "preload").ok()?;
    link.set_attribute("as", "video").ok()?;
    link.set_attribute("href", src).ok()?;
    document.head()?.append_child(&link).ok()?;
    Some(())
}

/// `timeout` in whole milliseconds for `setTimeout`, saturating.
fn timer_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

/// `window.requestIdleCallback`, if the browser has it.
fn idle_callback() -> Option<(web_sys::Window, js_sys::Function)> {
    let window = web_sys::window()?;
    let func = js_sys::Reflect::get(&window, &JsValue::from_str("requestIdleCallback")).ok()?;
    if !func.is_function() {
        return None;
    }
    Some((window, func.unchecked_into()))
}

/// Run `requestIdleCallback(preload, { timeout })`.
///
/// Only called once [`idle_callback`] found the API; the JS callback is
/// created here and nowhere else.
fn request_idle(
    window: &web_sys::Window,
    func: &js_sys::Function,
    src: &str,
    timeout: Duration,
) -> Result<(), JsValue> {
    let options = js_sys::Object::new();
    #[allow(clippy::cast_precision_loss)] // idle timeouts are a few hundred ms
    let millis = timeout.as_millis() as f64;
    js_sys::Reflect::set(&options, &"timeout".into(), &JsValue::from_f64(millis))?;

    let owned = src.to_owned();
    let task = Closure::once_into_js(move || {
        if append_preload_link(&owned).is_none() {
            log::debug!("could not add preload hint for {owned}");
        }
    });
    func.call2(window, &task, &options)?;
    Ok(())
}

/// Preload `src` once the browser is idle, or after `idle_timeout` where
/// idle callbacks are not supported.
pub fn schedule(src: &str, idle_timeout: Duration) {
    if let Some((window, func)) = idle_callback() {
        match request_idle(&window, &func, src, idle_timeout) {
            Ok(()) => return,
            Err(e) => log::debug!("requestIdleCallback failed, using a timer: {e:?}"),
        }
    }

    let owned = src.to_owned();
    Timeout::new(timer_millis(idle_timeout), move || {
        if append_preload_link(&owned).is_none() {
            log::debug!("could not add preload hint for {owned}");
        }
    })
    .forget();
}
