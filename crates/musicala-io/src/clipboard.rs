//! Copying the spot link.
//!
//! Two mechanisms, tried by the share cascade in this order: the async
//! `navigator.clipboard` API where the page is a secure context, and a
//! throwaway off-screen `<textarea>` plus `execCommand("copy")` for older
//! or insecure pages. Both must run inside the click that asked for the
//! copy.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

/// Why the link could not be copied.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// A browser call threw, or the window or document is missing.
    #[error("copy failed: {0}")]
    JsError(String),

    /// `document.execCommand("copy")` reported that nothing was copied.
    #[error("copy command was refused")]
    Refused,
}

impl From<JsValue> for ClipboardError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Whether `navigator.clipboard` exists.
///
/// It is absent in insecure contexts even though the `web-sys` binding
/// returns it unconditionally.
#[must_use]
pub fn is_available() -> bool {
    web_sys::window().is_some_and(|w| {
        js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("clipboard"))
            .is_ok_and(|c| !c.is_undefined() && !c.is_null())
    })
}

/// Write the link with `navigator.clipboard.writeText`.
///
/// # Errors
///
/// [`ClipboardError::JsError`] when there is no window or the browser
/// rejects the write, typically for lack of clipboard permission.
#[allow(clippy::future_not_send)] // single-threaded WASM; JsFuture is !Send
pub async fn write_text(text: &str) -> Result<(), ClipboardError> {
    let window =
        web_sys::window().ok_or_else(|| ClipboardError::JsError("no global window".into()))?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Copy `text` by selecting it in a temporary off-screen `<textarea>`
/// and running `document.execCommand("copy")`.
///
/// # Errors
///
/// Returns [`ClipboardError::JsError`] if any DOM call fails and
/// [`ClipboardError::Refused`] if the browser declined the copy.
pub fn copy_via_textarea(text: &str) -> Result<(), ClipboardError> {
    let document = crate::dom::document()
        .ok_or_else(|| ClipboardError::JsError("no document".into()))?;
    let body = document
        .body()
        .ok_or_else(|| ClipboardError::JsError("no document body".into()))?;

    let textarea: web_sys::HtmlTextAreaElement = document
        .create_element("textarea")?
        .dyn_into()
        .map_err(|e| ClipboardError::JsError(format!("failed to cast element: {e:?}")))?;
    textarea.set_value(text);
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", "-9999px")?;

    body.append_child(&textarea)?;
    textarea.select();
    let copied = document
        .dyn_into::<web_sys::HtmlDocument>()
        .map_err(|_| ClipboardError::JsError("document is not an HTML document".into()))
        .and_then(|html| html.exec_command("copy").map_err(ClipboardError::from));

    // Remove the field whatever the outcome.
    let _ = body.remove_child(&textarea);

    if copied? {
        Ok(())
    } else {
        Err(ClipboardError::Refused)
    }
}
