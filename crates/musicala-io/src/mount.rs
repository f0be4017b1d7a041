//! Widget start-up.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_events::EventListener;
use musicala_core::{Tour, TourSettings};

use crate::dom::{self, ids};
use crate::listeners::{self, SharedTour};
use crate::port::BrowserPort;
use crate::toast::Toast;

/// A running widget. Dropping it detaches every event listener.
pub struct MountedTour {
    tour: SharedTour,
    _listeners: Vec<EventListener>,
}

impl MountedTour {
    /// The shared widget state.
    #[must_use]
    pub const fn tour(&self) -> &SharedTour {
        &self.tour
    }
}

/// Settings from the page's `#tourSettings` script element, or the
/// built-in defaults.
#[must_use]
pub fn page_settings() -> TourSettings {
    let json = dom::by_id(ids::TOUR_SETTINGS).and_then(|el| el.text_content());
    TourSettings::from_optional_json(json.as_deref())
}

/// Build the widget against the current document, render the restored
/// spot and attach its event handlers.
///
/// Call once, after the page shell is in the DOM.
#[must_use]
pub fn mount() -> MountedTour {
    let TourSettings { catalog, config } = page_settings();
    let toast = Rc::new(Toast::new(config.toast_duration_ms));
    let port = BrowserPort::new(Rc::clone(&toast));

    let mut tour = Tour::new(catalog, config, port);
    tour.start();
    log::info!(
        "tour mounted with {} spots, showing {}",
        tour.catalog().len(),
        tour.current_spot().key
    );

    let tour = Rc::new(RefCell::new(tour));
    let listeners = listeners::bind(&tour, &toast);
    MountedTour {
        tour,
        _listeners: listeners,
    }
}
