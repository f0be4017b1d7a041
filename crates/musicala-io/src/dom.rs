//! Element lookup for the page's markup contract.
//!
//! The widget addresses the page exclusively through the ids and
//! selectors below. Every lookup returns `Option`: a page that omits an
//! element simply loses the feature that element provides.

use wasm_bindgen::JsCast;

/// Stable element ids the widget expects.
pub mod ids {
    /// Inline video surface.
    pub const VID_MAIN: &str = "vidMain";
    /// Cinema modal video surface.
    pub const VID_BIG: &str = "vidBig";
    /// Spot title.
    pub const VIDEO_TITLE: &str = "videoTitle";
    /// Spot description.
    pub const VIDEO_DESC: &str = "videoDesc";
    /// Status pill (icon, title, position).
    pub const PILL_NOW: &str = "pillNow";
    /// Dot indicator container.
    pub const DOTS: &str = "dots";
    /// Card container.
    pub const CARDS: &str = "cards";
    /// Previous-spot control.
    pub const BTN_PREV: &str = "btnPrev";
    /// Next-spot control.
    pub const BTN_NEXT: &str = "btnNext";
    /// Opens the cinema modal.
    pub const BTN_CINEMA: &str = "btnCinema";
    /// Closes the cinema modal.
    pub const BTN_CLOSE: &str = "btnClose";
    /// Scrolls the hero into view.
    pub const BTN_START: &str = "btnStart";
    /// Share/copy control.
    pub const BTN_COPY: &str = "btnCopy";
    /// Older pages name the share/copy control this way.
    pub const BTN_SHARE: &str = "btnShare";
    /// Opens the current video file in a new tab.
    pub const BTN_OPEN_FILE: &str = "btnOpenFile";
    /// Cinema modal container.
    pub const MODAL: &str = "modal";
    /// Cinema modal heading.
    pub const MODAL_TITLE: &str = "modalTitle";
    /// Back-to-top link.
    pub const LINK_TOP: &str = "linkTop";
    /// Optional live region for screen reader announcements.
    pub const ARIA_STATUS: &str = "ariaStatus";
    /// Reusable toast element (created on demand).
    pub const TOAST: &str = "toast";
    /// Optional inline JSON settings.
    pub const TOUR_SETTINGS: &str = "tourSettings";
}

/// Selectors for elements addressed by class.
pub mod selectors {
    /// Section scrolled into view by the start control.
    pub const HERO: &str = ".hero";
    /// Area that recognises swipe gestures.
    pub const SWIPE_AREA: &str = ".hero__card";
}

/// The page's document.
#[must_use]
pub fn document() -> Option<web_sys::Document> {
    web_sys::window()?.document()
}

/// Look up an element by id.
#[must_use]
pub fn by_id(id: &str) -> Option<web_sys::Element> {
    document()?.get_element_by_id(id)
}

/// Look up an element by id and cast it to a more specific type.
#[must_use]
pub fn by_id_as<T: JsCast>(id: &str) -> Option<T> {
    by_id(id)?.dyn_into::<T>().ok()
}

/// First element matching `selector`.
#[must_use]
pub fn query(selector: &str) -> Option<web_sys::Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Whether `element` accepts typed text.
#[must_use]
pub fn is_typing_element(element: &web_sys::Element) -> bool {
    let editable = element
        .dyn_ref::<web_sys::HtmlElement>()
        .is_some_and(web_sys::HtmlElement::is_content_editable);
    musicala_core::input::is_typing_target(&element.tag_name(), editable)
}

/// Move focus to `element` if it is focusable. Failures are ignored.
pub fn focus(element: &web_sys::Element) {
    if let Some(html) = element.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.focus();
    }
}

/// The `data-index` of the nearest ancestor-or-self of the event target
/// that carries one.
#[must_use]
pub fn data_index_of(target: Option<web_sys::EventTarget>) -> Option<i64> {
    let element = target?.dyn_into::<web_sys::Element>().ok()?;
    let holder = element.closest("[data-index]").ok().flatten()?;
    holder.get_attribute("data-index")?.parse().ok()
}
