//! DOM event bindings.
//!
//! Every handler translates a browser event into a call on the shared
//! [`Tour`]. The returned [`EventListener`]s unregister themselves when
//! dropped, so the caller keeps them alive for as long as the widget is
//! mounted.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use musicala_core::input;
use musicala_core::{Tour, share_or_copy};
use wasm_bindgen::JsCast;
use web_sys::{
    Event, KeyboardEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, TouchEvent,
};

use crate::dom::{self, ids, selectors};
use crate::port::BrowserPort;
use crate::share::BrowserShare;
use crate::toast::Toast;

/// The mounted widget, shared between handlers.
pub type SharedTour = Rc<RefCell<Tour<BrowserPort>>>;

/// Run `f` on the tour unless another handler is already using it.
///
/// Events are dispatched one at a time, so a busy tour means the event
/// was raised synchronously by the tour's own DOM writes. Dropping it
/// is the correct response.
fn with_tour(tour: &SharedTour, f: impl FnOnce(&mut Tour<BrowserPort>)) {
    match tour.try_borrow_mut() {
        Ok(mut tour) => f(&mut tour),
        Err(_) => log::debug!("tour busy; event dropped"),
    }
}

/// Bind a click on the element with `id` to `f`.
fn on_click(
    listeners: &mut Vec<EventListener>,
    id: &str,
    tour: &SharedTour,
    f: fn(&mut Tour<BrowserPort>),
) {
    let Some(element) = dom::by_id(id) else {
        return;
    };
    let tour = Rc::clone(tour);
    listeners.push(EventListener::new(&element, "click", move |_| {
        with_tour(&tour, f);
    }));
}

/// First touch point of a touch list, as client coordinates.
fn first_touch(list: &web_sys::TouchList) -> Option<(f64, f64)> {
    let touch = list.get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

/// Attach every handler the widget needs.
#[must_use]
pub fn bind(tour: &SharedTour, toast: &Rc<Toast>) -> Vec<EventListener> {
    let mut listeners = Vec::new();

    on_click(&mut listeners, ids::BTN_PREV, tour, Tour::previous);
    on_click(&mut listeners, ids::BTN_NEXT, tour, Tour::next);
    on_click(&mut listeners, ids::BTN_CINEMA, tour, Tour::open_modal);
    on_click(&mut listeners, ids::BTN_CLOSE, tour, |t| t.close_modal(false));

    bind_start(&mut listeners, tour);
    bind_modal_backdrop(&mut listeners, tour);
    bind_share(&mut listeners, tour, toast);
    bind_link_top(&mut listeners);
    bind_keyboard(&mut listeners, tour);
    bind_dots(&mut listeners, tour);
    bind_cards(&mut listeners, tour);
    bind_swipe(&mut listeners, tour);
    bind_video_errors(&mut listeners, tour);

    log::debug!("bound {} event listeners", listeners.len());
    listeners
}

fn bind_start(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    let Some(button) = dom::by_id(ids::BTN_START) else {
        return;
    };
    let delay = tour.borrow().config().start_focus_delay_ms;
    listeners.push(EventListener::new(&button, "click", move |_| {
        if let Some(hero) = dom::query(selectors::HERO) {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            hero.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Timeout::new(delay, || {
            if let Some(next) = dom::by_id(ids::BTN_NEXT) {
                dom::focus(&next);
            }
        })
        .forget();
    }));
}

fn bind_modal_backdrop(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    let Some(modal) = dom::by_id(ids::MODAL) else {
        return;
    };
    let tour = Rc::clone(tour);
    listeners.push(EventListener::new(&modal, "click", move |event| {
        let closes = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .and_then(|el| el.get_attribute("data-close"))
            .is_some_and(|value| !value.is_empty());
        if closes {
            with_tour(&tour, |t| t.close_modal(false));
        }
    }));
}

fn bind_share(listeners: &mut Vec<EventListener>, tour: &SharedTour, toast: &Rc<Toast>) {
    let Some(button) = dom::by_id(ids::BTN_COPY).or_else(|| dom::by_id(ids::BTN_SHARE)) else {
        return;
    };
    let tour = Rc::clone(tour);
    let toast = Rc::clone(toast);
    listeners.push(EventListener::new(&button, "click", move |_| {
        let Ok(request) = tour.try_borrow().map(|t| t.share_request()) else {
            return;
        };
        let toast = Rc::clone(&toast);
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = share_or_copy(&BrowserShare, &request).await;
            log::debug!("share finished: {outcome:?}");
            if let Some(message) = outcome.toast() {
                toast.show(message);
            }
        });
    }));
}

fn bind_link_top(listeners: &mut Vec<EventListener>) {
    let Some(link) = dom::by_id(ids::LINK_TOP) else {
        return;
    };
    listeners.push(EventListener::new_with_options(
        &link,
        "click",
        EventListenerOptions::enable_prevent_default(),
        |event| {
            event.prevent_default();
            let Some(window) = web_sys::window() else {
                return;
            };
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        },
    ));
}

fn bind_keyboard(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let tour = Rc::clone(tour);
    listeners.push(EventListener::new(&window, "keydown", move |event| {
        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let typing = event
            .target()
            .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            .is_some_and(|el| dom::is_typing_element(&el));
        let key = event.key();
        with_tour(&tour, |t| {
            t.handle_key(&key, typing);
        });
    }));
}

fn bind_dots(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    let Some(dots) = dom::by_id(ids::DOTS) else {
        return;
    };
    let tour = Rc::clone(tour);
    listeners.push(EventListener::new(&dots, "click", move |event| {
        if let Some(index) = dom::data_index_of(event.target()) {
            with_tour(&tour, |t| t.go_to(index));
        }
    }));
}

fn bind_cards(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    let Some(cards) = dom::by_id(ids::CARDS) else {
        return;
    };

    let click_tour = Rc::clone(tour);
    listeners.push(EventListener::new(&cards, "click", move |event| {
        if let Some(index) = dom::data_index_of(event.target()) {
            with_tour(&click_tour, |t| t.go_to(index));
        }
    }));

    let key_tour = Rc::clone(tour);
    listeners.push(EventListener::new_with_options(
        &cards,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if !input::is_card_activation(&key_event.key()) {
                return;
            }
            if let Some(index) = dom::data_index_of(event.target()) {
                event.prevent_default();
                with_tour(&key_tour, |t| t.go_to(index));
            }
        },
    ));
}

fn bind_swipe(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    let Some(area) = dom::query(selectors::SWIPE_AREA) else {
        return;
    };

    let start_tour = Rc::clone(tour);
    listeners.push(EventListener::new(&area, "touchstart", move |event| {
        let Some((x, y)) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| first_touch(&e.touches()))
        else {
            return;
        };
        with_tour(&start_tour, |t| t.touch_start(x, y));
    }));

    let end_tour = Rc::clone(tour);
    listeners.push(EventListener::new(&area, "touchend", move |event| {
        let Some((x, y)) = event
            .dyn_ref::<TouchEvent>()
            .and_then(|e| first_touch(&e.changed_touches()))
        else {
            return;
        };
        with_tour(&end_tour, |t| t.touch_end(x, y));
    }));
}

fn bind_video_errors(listeners: &mut Vec<EventListener>, tour: &SharedTour) {
    for id in [ids::VID_MAIN, ids::VID_BIG] {
        let Some(video) = dom::by_id(id) else {
            continue;
        };
        let tour = Rc::clone(tour);
        listeners.push(EventListener::new(&video, "error", move |_: &Event| {
            log::warn!("video element #{id} reported an error");
            with_tour(&tour, |t| t.video_error(web_time::Instant::now()));
        }));
    }
}
