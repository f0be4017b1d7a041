use std::cell::RefCell;
use std::rc::Rc;

use dioxus::prelude::*;
use log::LevelFilter;
use musicala_io::{MountedTour, TourPage};

fn main() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    musicala_io::logger::init(level);
    dioxus::launch(app);
}

/// Root application component.
///
/// Renders the static page shell, then mounts the widget against it
/// exactly once. The widget writes to the DOM directly, so the shell
/// never re-renders.
fn app() -> Element {
    // Holds the listeners for the lifetime of the page.
    let mounted = use_hook(|| Rc::new(RefCell::new(Option::<MountedTour>::None)));

    use_effect(move || {
        let mut slot = mounted.borrow_mut();
        if slot.is_none() {
            *slot = Some(musicala_io::mount());
        }
    });

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/tour.css") }
        TourPage {}
    }
}
