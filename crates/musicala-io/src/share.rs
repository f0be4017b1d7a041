//! Native share sheet and link resolution.

use musicala_core::share::{ShareError, ShareRequest, ShareTarget};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::clipboard;

/// Resolve `path` against the page location.
///
/// Returns `None` outside a browser or if the path is not a valid URL
/// reference.
#[must_use]
pub fn absolute_url(path: &str) -> Option<String> {
    let base = web_sys::window()?.location().href().ok()?;
    web_sys::Url::new_with_base(path, &base)
        .ok()
        .map(|url| url.href())
}

/// `navigator.share`, if the browser has it.
fn share_function() -> Option<(web_sys::Navigator, js_sys::Function)> {
    let navigator = web_sys::window()?.navigator();
    let func = js_sys::Reflect::get(&navigator, &JsValue::from_str("share")).ok()?;
    if !func.is_function() {
        return None;
    }
    Some((navigator, func.unchecked_into()))
}

/// Build the `ShareData` dictionary.
fn share_data(request: &ShareRequest) -> Result<js_sys::Object, JsValue> {
    let data = js_sys::Object::new();
    js_sys::Reflect::set(&data, &"title".into(), &request.title.as_str().into())?;
    js_sys::Reflect::set(&data, &"text".into(), &request.text.as_str().into())?;
    js_sys::Reflect::set(&data, &"url".into(), &request.url.as_str().into())?;
    Ok(data)
}

/// Name of a rejected promise's `DOMException`, if it is one.
fn error_name(error: &JsValue) -> Option<String> {
    js_sys::Reflect::get(error, &JsValue::from_str("name"))
        .ok()?
        .as_string()
}

/// The browser's share and copy capabilities.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserShare;

impl ShareTarget for BrowserShare {
    fn can_share(&self) -> bool {
        share_function().is_some()
    }

    async fn share(&self, request: &ShareRequest) -> Result<(), ShareError> {
        let (navigator, func) = share_function().ok_or(ShareError::Unavailable)?;
        let data =
            share_data(request).map_err(|e| ShareError::Failed(format!("share data: {e:?}")))?;
        let promise: js_sys::Promise = func
            .call1(&navigator, &data)
            .map_err(|e| ShareError::Failed(format!("{e:?}")))?
            .unchecked_into();

        match JsFuture::from(promise).await {
            Ok(_) => Ok(()),
            Err(e) if error_name(&e).as_deref() == Some("AbortError") => Err(ShareError::Dismissed),
            Err(e) => Err(ShareError::Failed(format!("{e:?}"))),
        }
    }

    fn has_clipboard(&self) -> bool {
        clipboard::is_available()
    }

    async fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        clipboard::write_text(text)
            .await
            .map_err(|e| ShareError::Failed(e.to_string()))
    }

    fn legacy_copy(&self, text: &str) -> Result<(), ShareError> {
        clipboard::copy_via_textarea(text).map_err(|e| ShareError::Failed(e.to_string()))
    }
}
