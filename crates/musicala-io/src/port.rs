//! The browser-backed implementation of every `musicala-core` port.

use std::rc::Rc;
use std::time::Duration;

use musicala_core::SpotText;
use musicala_core::port::{
    FocusPort, Haptics, KeyValueStore, Locator, ModalView, Notifier, PreloadHints, RenderTarget,
    StorageError, Surface, VideoSurfaces,
};
use wasm_bindgen::JsValue;
use web_sys::{Element, HtmlVideoElement};

use crate::dom::{self, ids};
use crate::toast::Toast;
use crate::{prefetch, share, storage, video};

/// Class toggled on the modal container while it is open.
const MODAL_OPEN_CLASS: &str = "is-open";

/// Elements the widget writes to, looked up once at mount.
struct Elements {
    vid_main: Option<HtmlVideoElement>,
    vid_big: Option<HtmlVideoElement>,
    title: Option<Element>,
    desc: Option<Element>,
    pill: Option<Element>,
    aria_status: Option<Element>,
    open_file: Option<Element>,
    dots: Option<Element>,
    cards: Option<Element>,
    modal: Option<Element>,
    modal_title: Option<Element>,
    close: Option<Element>,
}

impl Elements {
    fn lookup() -> Self {
        Self {
            vid_main: dom::by_id_as(ids::VID_MAIN),
            vid_big: dom::by_id_as(ids::VID_BIG),
            title: dom::by_id(ids::VIDEO_TITLE),
            desc: dom::by_id(ids::VIDEO_DESC),
            pill: dom::by_id(ids::PILL_NOW),
            aria_status: dom::by_id(ids::ARIA_STATUS),
            open_file: dom::by_id(ids::BTN_OPEN_FILE),
            dots: dom::by_id(ids::DOTS),
            cards: dom::by_id(ids::CARDS),
            modal: dom::by_id(ids::MODAL),
            modal_title: dom::by_id(ids::MODAL_TITLE),
            close: dom::by_id(ids::BTN_CLOSE),
        }
    }
}

fn set_text(element: Option<&Element>, text: &str) {
    if let Some(element) = element {
        element.set_text_content(Some(text));
    }
}

/// Drives the page through `web-sys`.
pub struct BrowserPort {
    elements: Elements,
    toast: Rc<Toast>,
}

impl BrowserPort {
    /// Look up the page's elements and share `toast` with the rest of
    /// the app.
    #[must_use]
    pub fn new(toast: Rc<Toast>) -> Self {
        let elements = Elements::lookup();
        if elements.vid_main.is_none() {
            log::warn!("#{} not found; inline playback disabled", ids::VID_MAIN);
        }
        Self { elements, toast }
    }

    const fn surface(&self, surface: Surface) -> Option<&HtmlVideoElement> {
        match surface {
            Surface::Inline => self.elements.vid_main.as_ref(),
            Surface::Modal => self.elements.vid_big.as_ref(),
        }
    }
}

impl VideoSurfaces for BrowserPort {
    fn load_source(&mut self, surface: Surface, url: &str) {
        if let Some(v) = self.surface(surface) {
            video::load_source(v, url);
        }
    }

    fn clear_source(&mut self, surface: Surface) {
        if let Some(v) = self.surface(surface) {
            video::clear_source(v);
        }
    }

    fn play(&mut self, surface: Surface) {
        if let Some(v) = self.surface(surface) {
            video::play(v);
        }
    }
}

impl KeyValueStore for BrowserPort {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        storage::get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        storage::set_item(key, value)
    }
}

impl FocusPort for BrowserPort {
    type Handle = Element;

    fn active_element(&self) -> Option<Element> {
        dom::document()?.active_element()
    }

    fn focus(&mut self, target: &Element) {
        dom::focus(target);
    }

    fn focus_close_control(&mut self) {
        if let Some(close) = &self.elements.close {
            dom::focus(close);
        }
    }
}

impl RenderTarget for BrowserPort {
    fn render_text(&mut self, text: &SpotText) {
        let e = &self.elements;
        set_text(e.title.as_ref(), &text.title);
        set_text(e.desc.as_ref(), &text.desc);
        set_text(e.pill.as_ref(), &text.pill);
        set_text(e.aria_status.as_ref(), &text.status);

        if let Some(link) = &e.open_file {
            let _ = link.set_attribute("href", &text.open_href);
            let _ = link.set_attribute("target", "_blank");
            let _ = link.set_attribute("rel", "noopener");
        }
    }

    fn render_dots(&mut self, markup: &str) {
        if let Some(dots) = &self.elements.dots {
            dots.set_inner_html(markup);
        }
    }

    fn render_cards(&mut self, markup: &str) {
        if let Some(cards) = &self.elements.cards {
            cards.set_inner_html(markup);
        }
    }
}

impl ModalView for BrowserPort {
    fn has_modal(&self) -> bool {
        self.elements.modal.is_some()
    }

    fn set_modal_open(&mut self, open: bool) {
        if let Some(modal) = &self.elements.modal {
            let _ = modal.class_list().toggle_with_force(MODAL_OPEN_CLASS, open);
            let _ = modal.set_attribute("aria-hidden", if open { "false" } else { "true" });
        }
    }

    fn set_modal_title(&mut self, title: &str) {
        set_text(self.elements.modal_title.as_ref(), title);
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        let Some(document) = dom::document() else {
            return;
        };
        let overflow = if locked { "hidden" } else { "" };
        let root = document
            .document_element()
            .and_then(|el| wasm_bindgen::JsCast::dyn_into::<web_sys::HtmlElement>(el).ok());
        for element in root.into_iter().chain(document.body()) {
            let _ = element.style().set_property("overflow", overflow);
        }
    }
}

impl Notifier for BrowserPort {
    fn show_toast(&mut self, message: &str) {
        self.toast.show(message);
    }
}

impl PreloadHints for BrowserPort {
    fn schedule_preload(&mut self, src: &str, idle_timeout: Duration) {
        prefetch::schedule(src, idle_timeout);
    }
}

impl Haptics for BrowserPort {
    fn can_vibrate(&self) -> bool {
        web_sys::window().is_some_and(|w| {
            js_sys::Reflect::get(&w.navigator(), &JsValue::from_str("vibrate"))
                .is_ok_and(|f| f.is_function())
        })
    }

    fn vibrate(&mut self, pulse: Duration) {
        let millis = u32::try_from(pulse.as_millis()).unwrap_or(u32::MAX);
        if let Some(window) = web_sys::window() {
            let _ = window.navigator().vibrate_with_duration(millis);
        }
    }
}

impl Locator for BrowserPort {
    fn resolve_url(&self, path: &str) -> Option<String> {
        share::absolute_url(path)
    }
}
