//! The on-screen toast.
//!
//! One `#toast` element is created on first use and reused. Showing a
//! new message while one is visible replaces the text and restarts the
//! fade-out timer.

use std::cell::RefCell;

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::dom::{self, ids};

/// Inline styles applied to the toast element when it is created.
const TOAST_STYLE: &[(&str, &str)] = &[
    ("position", "fixed"),
    ("left", "50%"),
    ("bottom", "84px"),
    ("transform", "translateX(-50%)"),
    ("padding", "10px 12px"),
    ("border-radius", "14px"),
    ("background", "rgba(255,255,255,.92)"),
    ("border", "1px solid rgba(12,65,196,.18)"),
    ("box-shadow", "0 18px 38px rgba(15,23,42,.12)"),
    ("font-weight", "800"),
    ("z-index", "60"),
    ("opacity", "0"),
    ("transition", "opacity .15s ease"),
];

/// A reusable toast with a restartable fade-out.
pub struct Toast {
    duration_ms: u32,
    fade_out: RefCell<Option<Timeout>>,
}

impl Toast {
    /// Create a toast that stays visible for `duration_ms`.
    #[must_use]
    pub const fn new(duration_ms: u32) -> Self {
        Self {
            duration_ms,
            fade_out: RefCell::new(None),
        }
    }

    /// Show `message`.
    pub fn show(&self, message: &str) {
        let Some(element) = element() else {
            log::debug!("toast unavailable: {message}");
            return;
        };
        element.set_text_content(Some(message));

        let style = element.style();
        let fade_in = Closure::once_into_js(move || {
            let _ = style.set_property("opacity", "1");
        });
        let scheduled = web_sys::window()
            .and_then(|w| w.request_animation_frame(fade_in.unchecked_ref()).ok());
        if scheduled.is_none() {
            let _ = element.style().set_property("opacity", "1");
        }

        // Replacing the timer drops (and so cancels) the previous one.
        let style = element.style();
        let timer = Timeout::new(self.duration_ms, move || {
            let _ = style.set_property("opacity", "0");
        });
        *self.fade_out.borrow_mut() = Some(timer);
    }
}

/// The existing `#toast` element, or a newly created one.
fn element() -> Option<web_sys::HtmlElement> {
    if let Some(existing) = dom::by_id_as::<web_sys::HtmlElement>(ids::TOAST) {
        return Some(existing);
    }
    let document = dom::document()?;
    let element: web_sys::HtmlElement = document.create_element("div").ok()?.dyn_into().ok()?;
    element.set_id(ids::TOAST);
    element.set_attribute("role", "status").ok()?;
    let style = element.style();
    for (name, value) in TOAST_STYLE {
        style.set_property(name, value).ok()?;
    }
    document.body()?.append_child(&element).ok()?;
    Some(element)
}
